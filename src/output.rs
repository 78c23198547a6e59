//! Report rendering: human-readable automaton dump and JSON output.

use crate::automaton::{Automaton, State};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Machine-readable run report, emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub pattern: String,
    pub alphabet: Vec<char>,
    pub prefix_function: Vec<usize>,
    pub transition_table: Vec<Vec<State>>,
    pub accepting_state: State,
    pub occurrences: usize,
    pub end_positions: Vec<usize>,
}

impl Report {
    pub fn new(automaton: &Automaton, end_positions: &[usize]) -> Self {
        let table = automaton.table();
        let transition_table = (0..table.states() as State)
            .map(|state| table.row(state).to_vec())
            .collect();

        Self {
            pattern: automaton.pattern().iter().collect(),
            alphabet: automaton.alphabet().symbols().to_vec(),
            prefix_function: automaton.prefix_function().to_vec(),
            transition_table,
            accepting_state: automaton.accepting_state(),
            occurrences: end_positions.len(),
            end_positions: end_positions.to_vec(),
        }
    }
}

/// Print the JSON report to stdout.
pub fn print_json(automaton: &Automaton, end_positions: &[usize]) -> anyhow::Result<()> {
    let report = Report::new(automaton, end_positions);
    let stdout = io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &report)?;
    println!();
    Ok(())
}

/// Print the human-readable report to stdout.
pub fn print_report(
    automaton: &Automaton,
    end_positions: &[usize],
    color: ColorChoice,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    render_report(&mut stdout, automaton, end_positions)
}

/// Render the full report: pattern, prefix function block, transition table
/// with the accepting row marked, and the occurrence count.
pub fn render_report<W: WriteColor>(
    out: &mut W,
    automaton: &Automaton,
    end_positions: &[usize],
) -> io::Result<()> {
    let pattern = automaton.pattern();
    let m = pattern.len();

    // Wide enough for the largest state index and any prefix value.
    let cell = digits(m).max(1);

    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "Pattern:")?;
    out.reset()?;
    writeln!(out, " {}", pattern.iter().collect::<String>())?;
    writeln!(out)?;

    write!(out, "p: ")?;
    for symbol in pattern {
        write!(out, "{symbol:>cell$} ")?;
    }
    writeln!(out)?;

    write!(out, "i: ")?;
    for i in 0..m {
        write!(out, "{i:>cell$} ")?;
    }
    writeln!(out)?;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "\u{03c0}: ")?;
    for value in automaton.prefix_function() {
        write!(out, "{value:>cell$} ")?;
    }
    out.reset()?;
    writeln!(out)?;
    writeln!(out)?;

    render_table(out, automaton, cell)?;
    writeln!(out)?;

    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "Occurrences:")?;
    out.reset()?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, " {}", end_positions.len())?;
    out.reset()?;

    if end_positions.is_empty() {
        writeln!(out)?;
    } else {
        let positions: Vec<String> = end_positions.iter().map(|p| p.to_string()).collect();
        writeln!(out, " (ending at {})", positions.join(", "))?;
    }

    Ok(())
}

/// Render the states x alphabet table. Each row is annotated with the symbol
/// that advances it, or `Accept` on the final row.
fn render_table<W: WriteColor>(out: &mut W, automaton: &Automaton, cell: usize) -> io::Result<()> {
    let pattern = automaton.pattern();
    let table = automaton.table();
    let state_width = digits(table.states() - 1);

    // Column header.
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(out, "{:>state_width$}  ", "")?;
    for symbol in automaton.alphabet().symbols() {
        write!(out, " {symbol:>cell$}")?;
    }
    out.reset()?;
    writeln!(out)?;

    for state in 0..table.states() as State {
        let accepting = state == automaton.accepting_state();

        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{state:>state_width$}")?;
        out.reset()?;
        write!(out, " |")?;

        for &next in table.row(state) {
            write!(out, " {next:>cell$}")?;
        }

        if accepting {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "   Accept")?;
            out.reset()?;
        } else {
            write!(out, "   {}", pattern[state as usize])?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn digits(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
