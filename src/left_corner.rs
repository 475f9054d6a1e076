use crate::grammar::{Grammar, Symbol};

use std::collections::HashSet;

#[cfg(test)]
#[path = "tests/left_corner.rs"]
mod tests_for_left_corner;

/// Every symbol that can begin a derivation whose first word is `word`: the
/// word itself, plus (transitively) the lhs of any rule whose first rhs symbol
/// is already in the set.
#[derive(Clone, Debug)]
pub struct LeftCorners {
    set: HashSet<Symbol>,
}

impl LeftCorners {
    pub fn of(grammar: &Grammar, word: &str) -> Self {
        let mut set = HashSet::new();
        set.insert(Symbol::from(word));

        // Full sweeps over the grammar until one adds nothing.
        let mut old_count = 0;
        while old_count < set.len() {
            old_count = set.len();
            for rule in grammar.rules() {
                if !set.contains(rule.lhs()) && set.contains(&rule.rhs()[0]) {
                    set.insert(rule.lhs().clone());
                }
            }
        }

        LeftCorners { set }
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.set.contains(symbol)
    }

    pub fn len(&self) -> usize { self.set.len() }

    pub fn is_empty(&self) -> bool { self.set.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item=&Symbol> { self.set.iter() }
}
