use crate::{lexer, rules, InvalidGrammar};

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use derive_more::{Display, From};
use lalrpop_util::ParseError;

// A weighted grammar G is a tuple (Sigma, Delta, R, w), where
//   Sigma is a finite set of terminals
//   Delta is a finite set of non-terminals (exactly the left-hand sides of R)
//   R is an ordered list of productions A --> X_1 ... X_k, k >= 1, and
//   w maps each production to -log2 of its probability.
//
// The start non-terminal is not part of G; it is chosen by the parser.

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;

/// A terminal or non-terminal. Clones share the underlying string.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Display, From)]
pub struct Symbol(Rc<str>);

impl Symbol {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for Symbol { fn from(s: &str) -> Self { Symbol(s.into()) } }
impl From<String> for Symbol { fn from(s: String) -> Self { Symbol(s.into()) } }

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool { &*self.0 == other }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct RuleId(pub(crate) usize);

impl RuleId {
    pub fn index(self) -> usize { self.0 }
}

/// One production as it is written down: a probability rather than a weight.
#[derive(Clone, PartialEq, Debug)]
pub struct RuleSpec {
    pub prob: f64,
    pub lhs: Symbol,
    pub rhs: Vec<Symbol>,
}

impl RuleSpec {
    pub fn new(prob: f64, lhs: &str, rhs: &[&str]) -> Self {
        RuleSpec { prob, lhs: lhs.into(), rhs: rhs.iter().map(|&s| s.into()).collect() }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Rule {
    pub(crate) weight: f64,
    pub(crate) lhs: Symbol,
    pub(crate) rhs: Vec<Symbol>,
    pub(crate) first_rhs_is_nonterminal: bool,
}

impl Rule {
    /// `-log2` of the rule's probability.
    pub fn weight(&self) -> f64 { self.weight }
    pub fn lhs(&self) -> &Symbol { &self.lhs }
    pub fn rhs(&self) -> &[Symbol] { &self.rhs }
    pub fn first_rhs_is_nonterminal(&self) -> bool { self.first_rhs_is_nonterminal }
}

#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
    nonterms: HashSet<Symbol>,
    by_lhs: HashMap<Symbol, Vec<RuleId>>,
}

impl Grammar {
    pub fn load(specs: impl IntoIterator<Item=RuleSpec>) -> Result<Grammar, InvalidGrammar> {
        let mut rules = Vec::new();
        for (i, RuleSpec { prob, lhs, rhs }) in specs.into_iter().enumerate() {
            // written so that NaN is rejected as well
            if !(prob > 0.0 && prob <= 1.0) {
                return Err(InvalidGrammar::ProbabilityOutOfRange { rule: i, prob });
            }
            if rhs.is_empty() {
                return Err(InvalidGrammar::EmptyRightSide { rule: i, lhs: lhs.to_string() });
            }
            // `0.0 - x` rather than `-x`, so a certain rule weighs 0.0 and not -0.0
            let weight = 0.0 - prob.log2();
            rules.push(Rule { weight, lhs, rhs, first_rhs_is_nonterminal: false });
        }

        let nonterms: HashSet<Symbol> = rules.iter().map(|r| r.lhs.clone()).collect();
        let mut by_lhs: HashMap<Symbol, Vec<RuleId>> = HashMap::new();
        for (i, rule) in rules.iter_mut().enumerate() {
            rule.first_rhs_is_nonterminal = nonterms.contains(&rule.rhs[0]);
            by_lhs.entry(rule.lhs.clone()).or_default().push(RuleId(i));
        }

        Ok(Grammar { rules, nonterms, by_lhs })
    }

    pub fn is_nonterminal(&self, symbol: &Symbol) -> bool {
        self.nonterms.contains(symbol)
    }

    pub fn nonterms(&self) -> &HashSet<Symbol> { &self.nonterms }

    pub fn rules(&self) -> &[Rule] { &self.rules }

    pub fn rule(&self, id: RuleId) -> &Rule { &self.rules[id.0] }

    pub fn rule_ids(&self) -> impl Iterator<Item=RuleId> {
        (0..self.rules.len()).map(RuleId)
    }

    /// The rules whose left-hand side is `lhs`, in the order they were loaded.
    pub fn expansions(&self, lhs: &Symbol) -> &[RuleId] {
        self.by_lhs.get(lhs).map(|v| &v[..]).unwrap_or(&[])
    }
}

/// Reads rule specifications in the `<probability> <lhs> <rhs>...` line format.
pub fn parse_rule_specs(text: &str) -> Result<Vec<RuleSpec>, InvalidGrammar> {
    let lex = lexer::Lexer::new(text);
    rules::RulesParser::new().parse(lex).map_err(|e| match e {
        ParseError::User { error } => error,
        ParseError::InvalidToken { location } |
        ParseError::UnrecognizedEOF { location, .. } => InvalidGrammar::MalformedLine { line: location },
        ParseError::UnrecognizedToken { token: (line, _, _), .. } |
        ParseError::ExtraToken { token: (line, _, _) } => InvalidGrammar::MalformedLine { line },
    })
}

impl std::str::FromStr for Grammar {
    type Err = InvalidGrammar;
    fn from_str(text: &str) -> Result<Grammar, InvalidGrammar> {
        Grammar::load(parse_rule_specs(text)?)
    }
}
