//! Tokens for the grammar file format. A grammar file is a sequence of lines,
//! and a line is a sequence of whitespace-separated words:
//!
//! ```text
//! 1.0  ROOT  NP VP
//! 0.5  NP    the man
//! ```
//!
//! Each kept line yields its `Word`s followed by one `Eol`. Lines whose trimmed
//! text is at most two characters long are dropped without a trace, so blank
//! lines (and stray one-letter lines) never reach the parser. Locations are
//! 1-based line numbers rather than byte offsets, which is what error messages
//! want to report.

use crate::{InvalidGrammar, Spanned};

use regex::Regex;

#[cfg(test)]
#[path = "tests/lexer.rs"]
mod tests_for_lexer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok<'a> {
    // r"\S+"
    Word(&'a str),
    // end of a kept line
    Eol,
}

impl<'a> std::fmt::Display for Tok<'a> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tok::Word(s) => write!(w, "{}", s),
            Tok::Eol => write!(w, "end of line"),
        }
    }
}

const SHORT_LINE: usize = 2;

pub struct Lexer<'a> {
    toks: std::vec::IntoIter<(usize, Tok<'a>, usize)>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let word = Regex::new(r"\S+").expect("word pattern is a valid regex");
        let mut toks = Vec::new();
        for (i, line) in input.lines().enumerate() {
            if line.trim().len() <= SHORT_LINE {
                continue;
            }
            let line_no = i + 1;
            toks.extend(word.find_iter(line).map(|m| (line_no, Tok::Word(m.as_str()), line_no)));
            toks.push((line_no, Tok::Eol, line_no));
        }
        Lexer { toks: toks.into_iter() }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Tok<'input>, usize, InvalidGrammar>;

    fn next(&mut self) -> Option<Self::Item> {
        self.toks.next().map(Ok)
    }
}
