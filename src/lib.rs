//! # fsamatch - DFA substring matcher
//!
//! fsamatch compiles a fixed pattern string into a deterministic finite
//! automaton with exactly `|pattern| + 1` states, then scans a text in a
//! single pass, taking one O(1) table lookup per symbol. Scan time is linear
//! in the text length regardless of pattern structure, and overlapping
//! occurrences are each counted.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`automaton`] - Alphabet extraction, prefix (failure) function,
//!   transition table construction, and the scan loop
//! - [`output`] - Report rendering (human-readable table dump and JSON)
//!
//! ## Quick Start
//!
//! ```
//! use fsamatch::automaton::Automaton;
//!
//! let automaton = Automaton::build("aa").unwrap();
//! assert_eq!(automaton.count_occurrences("aaa"), 2);
//! assert_eq!(automaton.find_occurrences("aaa"), vec![1, 2]);
//! ```
//!
//! ## How it works
//!
//! The transition table is built in three passes over a contiguous
//! `(m+1) x |alphabet|` buffer: every row is seeded with the restart
//! transition on the pattern's first symbol, the pattern's own character
//! sequence lays down the forward transitions, and the KMP prefix function
//! lifts each post-border state to whatever its border state already offers.
//! Symbols outside the pattern's alphabet reset the scan to state 0.

pub mod automaton;
pub mod output;
