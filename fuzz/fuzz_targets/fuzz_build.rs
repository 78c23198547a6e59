#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Building from arbitrary strings must never panic: bad patterns are
    // rejected with InvalidPatternError, everything else compiles cleanly.
    let _ = fsamatch::automaton::Automaton::build(data);
});
