use super::{Alphabet, State};

/// The automaton's next-state table: `m + 1` rows (one per state) by
/// `|alphabet|` columns (one per distinct pattern symbol).
///
/// Rows live in a single contiguous buffer with row-major indexing
/// (`state * columns + column`), so a scan touches one cache-friendly
/// lookup per symbol and rows cannot alias each other. Every cell holds a
/// state in `[0, m]`; the table is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    states: usize,
    columns: usize,
    cells: Vec<State>,
}

impl TransitionTable {
    fn zeroed(states: usize, columns: usize) -> Self {
        Self {
            states,
            columns,
            cells: vec![0; states * columns],
        }
    }

    /// Number of states (rows), `pattern_len + 1`.
    pub fn states(&self) -> usize {
        self.states
    }

    /// Number of columns, `|alphabet|`.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Next state from `state` on the symbol at `column`.
    #[inline]
    pub fn next(&self, state: State, column: usize) -> State {
        self.cells[state as usize * self.columns + column]
    }

    /// All transitions out of `state`, in column order.
    pub fn row(&self, state: State) -> &[State] {
        let base = state as usize * self.columns;
        &self.cells[base..base + self.columns]
    }

    #[inline]
    fn set(&mut self, state: usize, column: usize, next: State) {
        self.cells[state * self.columns + column] = next;
    }
}

/// Build the transition table for a non-empty pattern in three ordered
/// passes. The order matters: later passes overwrite or lift earlier cells.
///
/// 1. Seed: every row gets `1` in the column of the pattern's first symbol.
///    Whatever state the scan is in, seeing that symbol at least restarts a
///    match into state 1.
/// 2. Direct advances: `table[s][col(pattern[s])] = s + 1` for each position,
///    laying the spine of the automaton along the pattern itself.
/// 3. Failure propagation: for each position `i` with a non-zero border,
///    state `i + 1` is lifted per column to at least what the border state
///    `prefix[i]` offers. A mismatch after a partial match then lands on the
///    longest reusable border instead of restarting from 0. Rows are visited
///    in ascending order, so each border row is already corrected when read.
pub(crate) fn build_table(
    pattern: &[char],
    alphabet: &Alphabet,
    prefix: &[usize],
) -> TransitionTable {
    let m = pattern.len();
    let mut table = TransitionTable::zeroed(m + 1, alphabet.len());

    let first_column = column_of(alphabet, pattern[0]);
    for state in 0..=m {
        table.set(state, first_column, 1);
    }

    for (state, &symbol) in pattern.iter().enumerate() {
        table.set(state, column_of(alphabet, symbol), (state + 1) as State);
    }

    for (i, &border) in prefix.iter().enumerate() {
        if border == 0 {
            continue;
        }
        let target = i + 1;
        for column in 0..alphabet.len() {
            let via_border = table.next(border as State, column);
            if table.next(target as State, column) < via_border {
                table.set(target, column, via_border);
            }
        }
    }

    table
}

fn column_of(alphabet: &Alphabet, symbol: char) -> usize {
    alphabet
        .column(symbol)
        .expect("pattern symbol is always in its own alphabet")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::prefix_function;

    fn build(pattern: &str) -> (Vec<char>, Alphabet, TransitionTable) {
        let symbols: Vec<char> = pattern.chars().collect();
        let alphabet = Alphabet::from_pattern(&symbols);
        let prefix = prefix_function(&symbols);
        let table = build_table(&symbols, &alphabet, &prefix);
        (symbols, alphabet, table)
    }

    #[test]
    fn test_dimensions() {
        let (symbols, alphabet, table) = build("ababc");
        assert_eq!(table.states(), symbols.len() + 1);
        assert_eq!(table.columns(), alphabet.len());
    }

    #[test]
    fn test_all_cells_within_state_range() {
        for pattern in ["a", "aa", "ababc", "mississippi", "abcabcabd"] {
            let (symbols, _, table) = build(pattern);
            let m = symbols.len() as State;
            for state in 0..table.states() as State {
                for &next in table.row(state) {
                    assert!(next <= m, "cell out of range in pattern {pattern:?}");
                }
            }
        }
    }

    #[test]
    fn test_direct_advances_follow_pattern() {
        let (symbols, alphabet, table) = build("ababc");
        for (state, &symbol) in symbols.iter().enumerate() {
            let column = alphabet.column(symbol).unwrap();
            assert_eq!(table.next(state as State, column), state as State + 1);
        }
    }

    #[test]
    fn test_every_row_restarts_on_first_symbol() {
        // Unless a direct advance or a border lift says otherwise, the first
        // pattern symbol moves any state to at least 1.
        let (symbols, alphabet, table) = build("ababc");
        let first_column = alphabet.column(symbols[0]).unwrap();
        for state in 0..table.states() as State {
            assert!(table.next(state, first_column) >= 1);
        }
    }

    #[test]
    fn test_overlapping_pattern_table() {
        // Pattern "aa": the accepting state must loop back into itself so
        // overlapping occurrences keep matching.
        let (_, alphabet, table) = build("aa");
        let a = alphabet.column('a').unwrap();
        assert_eq!(table.next(0, a), 1);
        assert_eq!(table.next(1, a), 2);
        assert_eq!(table.next(2, a), 2);
    }

    #[test]
    fn test_failure_propagation_reuses_border() {
        // Pattern "ababc": after "abab" (state 4), an 'a' should not restart
        // from scratch. The border "ab" means we are already two deep, so
        // 'a' moves to state 3, not 1.
        let (_, alphabet, table) = build("ababc");
        let a = alphabet.column('a').unwrap();
        assert_eq!(table.next(4, a), 3);
    }

    #[test]
    fn test_failure_propagation_never_regresses_direct_advance() {
        // The max() in pass 3 must not pull a forward transition backwards.
        let (symbols, alphabet, table) = build("aabaab");
        for (state, &symbol) in symbols.iter().enumerate() {
            let column = alphabet.column(symbol).unwrap();
            assert_eq!(table.next(state as State, column), state as State + 1);
        }
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let (_, _, first) = build("abracadabra");
        let (_, _, second) = build("abracadabra");
        assert_eq!(first, second);
    }
}
