use rustc_hash::FxHashMap;

/// The distinct symbols of a pattern, sorted by natural `char` order, with a
/// direct symbol -> column map so that membership testing and column lookup
/// during a scan cost O(1) rather than O(|alphabet|).
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    columns: FxHashMap<char, usize>,
}

impl Alphabet {
    /// Extract the alphabet of a non-empty pattern. Column indices are
    /// assigned by sorted order and are stable for the life of the automaton.
    pub(crate) fn from_pattern(pattern: &[char]) -> Self {
        let mut symbols = pattern.to_vec();
        symbols.sort_unstable();
        symbols.dedup();

        let columns = symbols
            .iter()
            .enumerate()
            .map(|(column, &symbol)| (symbol, column))
            .collect();

        Self { symbols, columns }
    }

    /// Number of distinct symbols (table columns).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in column order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Column index for `symbol`, or `None` if the symbol does not occur in
    /// the pattern. Text symbols outside the alphabet reset the scan.
    #[inline]
    pub fn column(&self, symbol: char) -> Option<usize> {
        self.columns.get(&symbol).copied()
    }
}
