//! Pattern automaton construction and scanning.
//!
//! A pattern is compiled into a DFA with `m + 1` states, where `m` is the
//! pattern length in symbols. State `s` means "the last `s` symbols read are
//! the first `s` symbols of the pattern"; state `m` is the unique accepting
//! state. The key components are:
//!
//! - `Alphabet`: sorted distinct pattern symbols with O(1) column lookup
//! - `prefix_function`: KMP border lengths, one per pattern position
//! - `TransitionTable`: contiguous `(m+1) x |alphabet|` next-state table
//! - `count_occurrences` / `find_occurrences`: the scan loop
//!
//! # Module Organization
//!
//! - `alphabet`: symbol set extraction and column indexing
//! - `prefix`: failure function computation
//! - `table`: three-pass transition table construction
//! - `runner`: text scanning over a built table

mod alphabet;
mod prefix;
mod runner;
mod table;

pub use alphabet::Alphabet;
pub use prefix::prefix_function;
pub use runner::{count_occurrences, find_occurrences};
pub use table::TransitionTable;

use thiserror::Error;

/// Maximum supported pattern length in symbols. Bounds the memory used by
/// the transition table, which has `pattern_len + 1` rows.
pub const MAX_PATTERN_LEN: usize = 1_000_000;

/// A state of the automaton, in `[0, m]`. State `m` is accepting.
pub type State = u32;

/// Rejected pattern. No partial automaton is ever exposed: construction
/// either returns a fully built [`Automaton`] or one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("pattern has {len} symbols, maximum is {MAX_PATTERN_LEN}")]
    TooLong { len: usize },
}

/// A compiled pattern automaton.
///
/// Holds the pattern, its alphabet, its prefix function, and the finished
/// transition table. Everything is immutable after [`Automaton::build`];
/// scans never mutate the automaton, so the same instance can be run over
/// any number of texts with identical results.
#[derive(Debug, Clone)]
pub struct Automaton {
    pattern: Vec<char>,
    alphabet: Alphabet,
    prefix: Vec<usize>,
    table: TransitionTable,
}

impl Automaton {
    /// Compile `pattern` into a DFA.
    ///
    /// Fails if the pattern is empty or longer than [`MAX_PATTERN_LEN`]
    /// symbols. Construction is O(m * |alphabet|).
    pub fn build(pattern: &str) -> Result<Self, InvalidPatternError> {
        let symbols: Vec<char> = pattern.chars().collect();
        if symbols.is_empty() {
            return Err(InvalidPatternError::Empty);
        }
        if symbols.len() > MAX_PATTERN_LEN {
            return Err(InvalidPatternError::TooLong { len: symbols.len() });
        }

        let alphabet = Alphabet::from_pattern(&symbols);
        let prefix = prefix_function(&symbols);
        let table = table::build_table(&symbols, &alphabet, &prefix);

        Ok(Self {
            pattern: symbols,
            alphabet,
            prefix,
            table,
        })
    }

    /// The pattern as a symbol sequence.
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The KMP prefix function, one border length per pattern position.
    pub fn prefix_function(&self) -> &[usize] {
        &self.prefix
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// The unique accepting state, equal to the pattern length.
    pub fn accepting_state(&self) -> State {
        self.pattern.len() as State
    }

    /// Count occurrences of the pattern in `text`, overlaps included.
    pub fn count_occurrences(&self, text: &str) -> usize {
        count_occurrences(&self.table, &self.alphabet, self.accepting_state(), text)
    }

    /// 0-based end positions (in symbols) of every occurrence in `text`.
    pub fn find_occurrences(&self, text: &str) -> Vec<usize> {
        find_occurrences(&self.table, &self.alphabet, self.accepting_state(), text)
    }
}
