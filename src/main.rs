use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fsamatch::automaton::Automaton;
use fsamatch::output;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "fsamatch")]
#[command(about = "Deterministic finite-automaton substring matcher")]
struct Cli {
    /// Pattern to search for (at most 1,000,000 symbols)
    pattern: String,

    /// Text to scan
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file instead of the command line
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print only the occurrence count
    #[arg(short, long)]
    count: bool,

    /// Emit the full report as JSON
    #[arg(long, conflicts_with = "count")]
    json: bool,

    /// When to use colors in the report
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: ColorWhen,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    fn choice(self) -> ColorChoice {
        match self {
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
            ColorWhen::Auto => {
                if std::io::stdout().is_terminal() {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read text from {}", path.display()))?,
        None => cli.text.clone().unwrap_or_default(),
    };

    let automaton = Automaton::build(&cli.pattern).context("cannot build automaton")?;
    let positions = automaton.find_occurrences(&text);

    if cli.json {
        output::print_json(&automaton, &positions)?;
    } else if cli.count {
        println!("{}", positions.len());
    } else {
        output::print_report(&automaton, &positions, cli.color.choice())?;
    }

    Ok(())
}
