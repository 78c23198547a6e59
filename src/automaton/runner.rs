use super::{Alphabet, State, TransitionTable};

/// Count occurrences of the pattern in `text` by running the automaton once
/// over it. Each visit to the accepting state counts, so overlapping
/// occurrences are all reported ("aa" occurs twice in "aaa").
///
/// Symbols outside the alphabet reset the scan to state 0; they are not
/// errors. An empty text yields 0. O(n) in the text length.
pub fn count_occurrences(
    table: &TransitionTable,
    alphabet: &Alphabet,
    accepting: State,
    text: &str,
) -> usize {
    let mut state: State = 0;
    let mut count = 0;

    for symbol in text.chars() {
        state = match alphabet.column(symbol) {
            Some(column) => table.next(state, column),
            None => 0,
        };
        if state == accepting {
            count += 1;
        }
    }

    count
}

/// Like [`count_occurrences`], but collect the 0-based end position (in
/// symbols) of every occurrence instead of just counting them.
pub fn find_occurrences(
    table: &TransitionTable,
    alphabet: &Alphabet,
    accepting: State,
    text: &str,
) -> Vec<usize> {
    let mut state: State = 0;
    let mut positions = Vec::new();

    for (i, symbol) in text.chars().enumerate() {
        state = match alphabet.column(symbol) {
            Some(column) => table.next(state, column),
            None => 0,
        };
        if state == accepting {
            positions.push(i);
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use crate::automaton::Automaton;

    /// Brute-force overlapping substring count, used as the oracle.
    fn naive_count(pattern: &str, text: &str) -> usize {
        let pattern: Vec<char> = pattern.chars().collect();
        let text: Vec<char> = text.chars().collect();
        if pattern.len() > text.len() {
            return 0;
        }
        text.windows(pattern.len())
            .filter(|window| *window == pattern.as_slice())
            .count()
    }

    #[test]
    fn test_overlapping_occurrences() {
        let automaton = Automaton::build("aa").unwrap();
        assert_eq!(automaton.count_occurrences("aaa"), 2);
        assert_eq!(automaton.find_occurrences("aaa"), vec![1, 2]);
    }

    #[test]
    fn test_self_overlapping_long_text() {
        let automaton = Automaton::build("ababc").unwrap();
        assert_eq!(automaton.count_occurrences("ababababc"), 1);
        assert_eq!(automaton.find_occurrences("ababababc"), vec![8]);
    }

    #[test]
    fn test_no_alphabet_overlap() {
        let automaton = Automaton::build("abc").unwrap();
        assert_eq!(automaton.count_occurrences("xyz"), 0);
        assert!(automaton.find_occurrences("xyz").is_empty());
    }

    #[test]
    fn test_empty_text() {
        let automaton = Automaton::build("abc").unwrap();
        assert_eq!(automaton.count_occurrences(""), 0);
    }

    #[test]
    fn test_unknown_symbol_resets_partial_match() {
        let automaton = Automaton::build("abc").unwrap();
        // "ab" then a reset symbol, then the full pattern.
        assert_eq!(automaton.count_occurrences("ab!abc"), 1);
        assert_eq!(automaton.find_occurrences("ab!abc"), vec![5]);
    }

    #[test]
    fn test_single_symbol_everywhere() {
        let automaton = Automaton::build("a").unwrap();
        assert_eq!(automaton.count_occurrences("banana"), 3);
        assert_eq!(automaton.find_occurrences("banana"), vec![1, 3, 5]);
    }

    #[test]
    fn test_count_equals_position_count() {
        let automaton = Automaton::build("aba").unwrap();
        let text = "abababa";
        assert_eq!(
            automaton.count_occurrences(text),
            automaton.find_occurrences(text).len()
        );
    }

    #[test]
    fn test_matches_brute_force() {
        let cases = [
            ("aa", "aaa"),
            ("ababc", "ababababc"),
            ("abc", "xyz"),
            ("aba", "abababa"),
            ("aab", "aaabaaabaab"),
            ("ss", "mississippi"),
            ("issi", "mississippi"),
            ("aaa", "aaaaaaaaaa"),
            ("ab", "abxabyab ab"),
        ];
        for (pattern, text) in cases {
            let automaton = Automaton::build(pattern).unwrap();
            assert_eq!(
                automaton.count_occurrences(text),
                naive_count(pattern, text),
                "pattern {pattern:?} against text {text:?}"
            );
        }
    }

    #[test]
    fn test_end_positions_identify_occurrences() {
        let automaton = Automaton::build("issi").unwrap();
        let text: Vec<char> = "mississippi".chars().collect();
        for end in automaton.find_occurrences("mississippi") {
            let start = end + 1 - 4;
            let window: String = text[start..=end].iter().collect();
            assert_eq!(window, "issi");
        }
    }
}
