use std::io::Write;
use std::path::PathBuf;

use clap::Parser as _;
use log::info;
use thiserror::Error;

use pondus::{Grammar, Parser, ParserConfig, PcfgError, Rendered};

/// Prints the most probable parse of each sentence under a weighted grammar.
///
/// GRAMMAR has one rule per line, `<probability> <lhs> <rhs>...`. SENTENCES has
/// one whitespace-tokenized sentence per line. For each non-blank sentence the
/// output is the bracketed tree followed by its weight (-log2 probability), or
/// `NONE`.
#[derive(clap::Parser)]
#[clap(author, version, about)]
struct Cli {
    grammar: PathBuf,
    sentences: PathBuf,
    /// Non-terminal that has to span each sentence.
    #[clap(long, default_value = "ROOT")]
    start: String,
    /// Predict and attach without the left-corner filter.
    #[clap(long)]
    no_left_corner_filter: bool,
}

#[derive(Debug, Error)]
enum DriverError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Pcfg(#[from] PcfgError),
}

impl From<pondus::InvalidGrammar> for DriverError {
    fn from(e: pondus::InvalidGrammar) -> Self { DriverError::Pcfg(e.into()) }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DriverError> {
    let grammar: Grammar = fs_err::read_to_string(&cli.grammar)?.parse()?;
    info!("loaded {} rules, {} non-terminals", grammar.rules().len(), grammar.nonterms().len());

    let config = ParserConfig {
        start: cli.start.as_str().into(),
        left_corner_filter: !cli.no_left_corner_filter,
    };
    let parser = Parser::with_config(&grammar, config);

    let sentences = fs_err::read_to_string(&cli.sentences)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for sentence in sentences.lines().filter(|l| !l.trim().is_empty()) {
        let best = parser.parse_sentence(sentence)?.best()?;
        writeln!(out, "{}", best.rendered())?;
    }
    Ok(())
}
