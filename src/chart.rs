//! The Earley chart: one column per input position, each column an
//! append-only arena of entries.
//!
//! Entries are never removed. When a lighter derivation turns up for a dotted
//! rule instance that is already in the chart, the old entry is only flagged
//! dead, because entries added earlier may still hold its [`EntryId`] as a
//! backpointer.

use crate::grammar::{RuleId, Symbol};

use std::collections::HashMap;
use linear_map::set::LinearSet;

#[cfg(test)]
#[path = "tests/chart.rs"]
mod tests_for_chart;

/// Position of an entry: column `column`, row `row` within that column.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct EntryId { pub column: usize, pub row: usize }

/// A dotted rule instance: `rule` with its first `progress` rhs symbols
/// matched against the input starting at `start`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Entry {
    pub(crate) rule: RuleId,
    pub(crate) start: usize,
    pub(crate) progress: usize,
    pub(crate) weight: f64,
    /// Same rule instance, one symbol less matched. `None` while progress <= 1.
    pub(crate) horiz: Option<EntryId>,
    /// Completed entry for the most recently matched symbol, if it was a
    /// non-terminal.
    pub(crate) vert: Option<EntryId>,
    pub(crate) dead: bool,
}

impl Entry {
    pub fn new(rule: RuleId, start: usize, weight: f64) -> Self {
        Entry { rule, start, progress: 0, weight, horiz: None, vert: None, dead: false }
    }

    /// The entry one symbol further along, same weight and no vertical
    /// backpointer; `from` is where `self` lives.
    pub(crate) fn advanced(&self, from: EntryId) -> Self {
        Entry {
            rule: self.rule,
            start: self.start,
            progress: self.progress + 1,
            weight: self.weight,
            horiz: if self.progress > 0 { Some(from) } else { None },
            vert: None,
            dead: false,
        }
    }

    pub fn rule(&self) -> RuleId { self.rule }
    pub fn start(&self) -> usize { self.start }
    pub fn progress(&self) -> usize { self.progress }
    pub fn weight(&self) -> f64 { self.weight }
    pub fn horiz(&self) -> Option<EntryId> { self.horiz }
    pub fn vert(&self) -> Option<EntryId> { self.vert }
    pub fn is_dead(&self) -> bool { self.dead }
}

/// Which operator produced an entry.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Origin { Seed, Predict, Scan, Attach }

impl Origin {
    /// Whether an entry of this origin may replace a heavier one with the same
    /// key. Seeded and predicted entries always weigh exactly their rule's
    /// weight, so only attach (and a scan of an entry that attach replaced)
    /// can bring a lighter derivation.
    ///
    /// Scan has to relax as well, not just attach: once attach replaces an
    /// entry that was already scanned, the rescan of the replacement must
    /// evict the heavier copy in the next column, or that column keeps the
    /// stale weight. `later_lighter_completion_wins` exercises this.
    pub fn relaxes(self) -> bool {
        match self {
            Origin::Seed | Origin::Predict => false,
            Origin::Scan | Origin::Attach => true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Enqueued {
    Added(EntryId),
    /// `old` was heavier than the new entry and is now dead.
    Superseded { old: EntryId, new: EntryId },
    Ignored,
}

impl Enqueued {
    pub fn id(self) -> Option<EntryId> {
        match self {
            Enqueued::Added(id) | Enqueued::Superseded { new: id, .. } => Some(id),
            Enqueued::Ignored => None,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
struct DedupKey { rule: RuleId, start: usize, progress: usize, column: usize }

#[derive(Debug)]
pub struct Chart {
    columns: Vec<Vec<Entry>>,
    /// The live entry for each dotted rule instance.
    index: HashMap<DedupKey, EntryId>,
    /// Non-terminals whose expansions were already predicted, per column.
    predicted: Vec<LinearSet<Symbol>>,
}

impl Chart {
    /// An empty chart for a sentence of `word_count` words.
    pub fn new(word_count: usize) -> Self {
        Chart {
            columns: (0..=word_count).map(|_| Vec::new()).collect(),
            index: HashMap::new(),
            predicted: (0..=word_count).map(|_| LinearSet::new()).collect(),
        }
    }

    pub fn columns(&self) -> usize { self.columns.len() }

    pub fn column(&self, column: usize) -> &[Entry] { &self.columns[column] }

    pub fn entry(&self, id: EntryId) -> &Entry { &self.columns[id.column][id.row] }

    /// The live entries of `column`, with their ids.
    pub fn live(&self, column: usize) -> impl Iterator<Item=(EntryId, &Entry)> {
        self.columns[column]
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.dead)
            .map(move |(row, e)| (EntryId { column, row }, e))
    }

    /// The live entry for `rule` at (`start`, `progress`) in `column`, if any.
    pub fn lookup(&self, rule: RuleId, start: usize, progress: usize, column: usize) -> Option<EntryId> {
        self.index.get(&DedupKey { rule, start, progress, column }).copied()
    }

    pub fn enqueue(&mut self, entry: Entry, column: usize, origin: Origin) -> Enqueued {
        let key = DedupKey { rule: entry.rule, start: entry.start, progress: entry.progress, column };

        let mut superseded = None;
        if let Some(&existing) = self.index.get(&key) {
            if !origin.relaxes() {
                return Enqueued::Ignored;
            }
            let old = &mut self.columns[existing.column][existing.row];
            if old.weight <= entry.weight {
                return Enqueued::Ignored;
            }
            old.dead = true;
            self.index.remove(&key);
            superseded = Some(existing);
        }

        let cells = &mut self.columns[column];
        let id = EntryId { column, row: cells.len() };
        cells.push(entry);
        self.index.insert(key, id);

        match superseded {
            Some(old) => Enqueued::Superseded { old, new: id },
            None => Enqueued::Added(id),
        }
    }

    /// Records that `nonterm` has been predicted in `column`; false if it
    /// already had been.
    pub fn mark_predicted(&mut self, nonterm: &Symbol, column: usize) -> bool {
        self.predicted[column].insert(nonterm.clone())
    }

    pub fn was_predicted(&self, nonterm: &Symbol, column: usize) -> bool {
        self.predicted[column].contains(nonterm)
    }
}
