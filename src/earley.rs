//! Weighted Earley parsing: gradually build, from left to right, the set of
//! Earley items (dotted rule instances) for each position in the input.
//!
//! The chart memoizes: a constituent found once is attached to every customer
//! waiting for it rather than being reparsed. Weights are `-log2` of
//! probabilities, so a derivation's weight is the sum of its rules' weights.
//! For every (rule, start, progress, column) the chart keeps only the lightest
//! derivation found so far; when attach finds a lighter one the old entry dies
//! and the new one is processed again, which relaxes everything built on top
//! of it.
//!
//! Two left-corner filters keep the chart small:
//!
//!  * predict only expands `A` when the current word can begin an `A`, and
//!    only with those rules of `A` that can start with the current word;
//!
//!  * attach only advances a customer past a completed constituent when the
//!    symbol after that can begin with the current word (or when the customer
//!    is then complete).
//!
//! On the last column there is no current word: nothing is predicted or
//! scanned, and attach only produces complete entries.

use crate::chart::{Chart, Entry, EntryId, Enqueued, Origin};
use crate::display::Dotted;
use crate::grammar::{Grammar, Symbol};
use crate::left_corner::LeftCorners;
use crate::tree::Tree;
use crate::PcfgError;

use log::{debug, trace};

#[cfg(test)]
#[path = "tests/earley.rs"]
mod tests_for_earley;

#[derive(Clone, Debug)]
pub struct ParserConfig {
    /// The non-terminal that has to span the whole sentence.
    pub start: Symbol,
    /// When off, predict and attach behave as in textbook Earley. The result
    /// is the same, only slower.
    pub left_corner_filter: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { start: "ROOT".into(), left_corner_filter: true }
    }
}

pub struct Parser<'g> {
    grammar: &'g Grammar,
    config: ParserConfig,
}

/// What the engine knows about the input at the column it is working on.
enum Lookahead<'w> {
    Word { word: &'w str, corners: Option<LeftCorners> },
    End,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self::with_config(grammar, ParserConfig::default())
    }

    pub fn with_config(grammar: &'g Grammar, config: ParserConfig) -> Self {
        Parser { grammar, config }
    }

    pub fn grammar(&self) -> &'g Grammar { self.grammar }

    pub fn config(&self) -> &ParserConfig { &self.config }

    /// Splits `sentence` on whitespace and parses the words.
    pub fn parse_sentence(&self, sentence: &str) -> Result<Parse<'g>, PcfgError> {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        self.parse(&words)
    }

    pub fn parse(&self, words: &[&str]) -> Result<Parse<'g>, PcfgError> {
        let mut chart = Chart::new(words.len());

        for &id in self.grammar.expansions(&self.config.start) {
            let entry = Entry::new(id, 0, self.grammar.rule(id).weight());
            self.enqueue(&mut chart, entry, 0, Origin::Seed);
        }

        for col in 0..=words.len() {
            let lookahead = match words.get(col) {
                Some(&word) => {
                    let corners = if self.config.left_corner_filter {
                        Some(LeftCorners::of(self.grammar, word))
                    } else {
                        None
                    };
                    Lookahead::Word { word, corners }
                }
                None => Lookahead::End,
            };

            // The column grows while we walk it; entries appended during the
            // walk are visited in this same pass.
            let mut row = 0;
            while row < chart.column(col).len() {
                let id = EntryId { column: col, row };
                row += 1;

                let entry = *chart.entry(id);
                if entry.dead {
                    continue;
                }

                let rule = self.grammar.rule(entry.rule);
                if entry.progress > rule.rhs().len() {
                    return Err(PcfgError::InternalInvariantViolation(format!(
                        "progress {} past the end of `{}`", entry.progress, rule)));
                }

                if entry.progress == rule.rhs().len() {
                    self.attach(&mut chart, id, &lookahead);
                } else if let Lookahead::Word { word, ref corners } = lookahead {
                    let next = &rule.rhs()[entry.progress];
                    if *next == *word {
                        self.scan(&mut chart, id);
                    } else {
                        self.predict(&mut chart, col, next, word, corners.as_ref());
                    }
                }
            }

            debug!("column {} done: {} entries", col, chart.column(col).len());
        }

        Ok(Parse { grammar: self.grammar, chart, start: self.config.start.clone() })
    }

    fn enqueue(&self, chart: &mut Chart, entry: Entry, col: usize, origin: Origin) -> Enqueued {
        let result = chart.enqueue(entry, col, origin);
        if log::log_enabled!(log::Level::Trace) {
            let dotted = Dotted { rule: self.grammar.rule(entry.rule), progress: entry.progress };
            match result {
                Enqueued::Added(id) => trace!(
                    "{} {} (weight = {}) added by {:?} at col {} row {}",
                    entry.start, dotted, entry.weight, origin, id.column, id.row),
                Enqueued::Superseded { old, new } => trace!(
                    "{} {} (weight = {}) added by {:?} at col {} row {}, replacing row {}",
                    entry.start, dotted, entry.weight, origin, new.column, new.row, old.row),
                Enqueued::Ignored => {}
            }
        }
        result
    }

    /// Expands the non-terminal `next` at column `col`, once per column.
    /// A terminal that is not the current word expands to nothing.
    fn predict(&self, chart: &mut Chart, col: usize, next: &Symbol, word: &str, corners: Option<&LeftCorners>) {
        if !self.grammar.is_nonterminal(next) {
            return;
        }
        if !chart.mark_predicted(next, col) {
            return;
        }
        if let Some(lc) = corners {
            if !lc.contains(next) {
                return;
            }
        }

        for &id in self.grammar.expansions(next) {
            let rule = self.grammar.rule(id);
            let viable = match corners {
                None => true,
                Some(lc) if rule.first_rhs_is_nonterminal() => lc.contains(&rule.rhs()[0]),
                Some(_) => rule.rhs()[0] == *word,
            };
            if viable {
                self.enqueue(chart, Entry::new(id, col, rule.weight()), col, Origin::Predict);
            }
        }
    }

    /// Moves the entry at `id` past the current word, into the next column.
    fn scan(&self, chart: &mut Chart, id: EntryId) {
        let advanced = chart.entry(id).advanced(id);
        self.enqueue(chart, advanced, id.column + 1, Origin::Scan);
    }

    /// Advances every customer of the complete entry at `id`.
    fn attach(&self, chart: &mut Chart, id: EntryId, lookahead: &Lookahead) {
        let completed = *chart.entry(id);
        let target = self.grammar.rule(completed.rule).lhs();

        let mut advanced = Vec::new();
        for (cid, customer) in chart.live(completed.start) {
            let rhs = self.grammar.rule(customer.rule).rhs();
            if customer.progress >= rhs.len() || rhs[customer.progress] != *target {
                continue;
            }

            let consistent = if customer.progress + 1 == rhs.len() {
                true
            } else {
                match lookahead {
                    Lookahead::End => false,
                    Lookahead::Word { corners: None, .. } => true,
                    Lookahead::Word { corners: Some(lc), .. } => lc.contains(&rhs[customer.progress + 1]),
                }
            };

            if consistent {
                let mut entry = customer.advanced(cid);
                entry.weight = customer.weight + completed.weight;
                entry.vert = Some(id);
                advanced.push(entry);
            }
        }

        for entry in advanced {
            self.enqueue(chart, entry, id.column, Origin::Attach);
        }
    }
}

/// A filled chart for one sentence.
#[derive(Debug)]
pub struct Parse<'g> {
    grammar: &'g Grammar,
    chart: Chart,
    start: Symbol,
}

#[derive(Clone, PartialEq, Debug)]
pub struct BestParse {
    pub tree: Tree,
    /// Sum of the weights of the rules used, i.e. `-log2` of the tree's
    /// probability.
    pub weight: f64,
}

impl<'g> Parse<'g> {
    pub fn chart(&self) -> &Chart { &self.chart }

    /// The lightest complete start-symbol entry spanning the whole input.
    /// Among equally light entries the first in the column wins.
    pub fn best_entry(&self) -> Option<EntryId> {
        let last = self.chart.columns() - 1;
        let mut best: Option<(EntryId, f64)> = None;
        for (id, entry) in self.chart.live(last) {
            let rule = self.grammar.rule(entry.rule);
            if *rule.lhs() != self.start || entry.start != 0 || entry.progress != rule.rhs().len() {
                continue;
            }
            if best.map_or(true, |(_, w)| entry.weight < w) {
                best = Some((id, entry.weight));
            }
        }
        best.map(|(id, _)| id)
    }

    /// The minimum-weight tree, or `None` when the sentence has no parse.
    pub fn best(&self) -> Result<Option<BestParse>, PcfgError> {
        match self.best_entry() {
            None => Ok(None),
            Some(id) => {
                let tree = Tree::from_chart(self.grammar, &self.chart, id)?;
                Ok(Some(BestParse { tree, weight: self.chart.entry(id).weight }))
            }
        }
    }
}
