//! Probabilistic Earley parsing.
//!
//! A [`Grammar`] is a list of weighted productions; the [`Parser`] runs the
//! Earley algorithm over a sentence, keeping for every dotted rule instance only
//! its lightest derivation, and [`Parse::best`] reads the minimum-weight tree
//! back out of the chart.
//!
//! ```rust
//! use pondus::{Grammar, Parser};
//!
//! let g: Grammar = "1.0 ROOT NP VP\n0.5 NP Papa\n0.5 NP the man\n1.0 VP ate\n".parse().unwrap();
//! let parse = Parser::new(&g).parse(&["Papa", "ate"]).unwrap();
//! let best = parse.best().unwrap().unwrap();
//! assert_eq!(best.tree.to_string(), "(ROOT (NP Papa) (VP ate))");
//! assert_eq!(best.weight, 1.0);
//! ```

#[macro_use] extern crate lalrpop_util;

use thiserror::Error;

pub type Spanned<Tok, Loc, Error> = Result<(Loc, Tok, Loc), Error>;

pub mod grammar;
pub mod chart;
pub mod left_corner;
pub mod earley;
pub mod tree;
mod lexer;
mod display;
mod rendering;

lalrpop_mod!(rules); // synthesized by LALRPOP


pub use grammar::{Grammar, Rule, RuleId, RuleSpec, Symbol};
pub use chart::{Chart, Entry, EntryId, Origin};
pub use left_corner::LeftCorners;
pub use earley::{BestParse, Parse, Parser, ParserConfig};
pub use tree::Tree;
pub use display::Dotted;
pub use rendering::Rendered;

/// Problems with a grammar. Any of these makes the whole grammar unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidGrammar {
    #[error("line {line}: expected `<probability> <lhs> <rhs>...`")]
    MalformedLine { line: usize },
    #[error("line {line}: `{text}` is not a probability")]
    MalformedProbability { line: usize, text: String },
    #[error("rule {rule}: probability {prob} is not in (0, 1]")]
    ProbabilityOutOfRange { rule: usize, prob: f64 },
    #[error("rule {rule}: `{lhs}` has an empty right-hand side")]
    EmptyRightSide { rule: usize, lhs: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PcfgError {
    #[error("invalid grammar: {0}")]
    InvalidGrammar(#[from] InvalidGrammar),
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}
