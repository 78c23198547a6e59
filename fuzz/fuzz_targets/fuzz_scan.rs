#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String)| {
    // Scanning arbitrary text over an automaton built from an arbitrary
    // pattern must never panic, and count/find must agree.
    let (pattern, text) = input;
    if let Ok(automaton) = fsamatch::automaton::Automaton::build(&pattern) {
        let count = automaton.count_occurrences(&text);
        let positions = automaton.find_occurrences(&text);
        assert_eq!(count, positions.len());
    }
});
