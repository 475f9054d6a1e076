use crate::chart::{Chart, EntryId};
use crate::grammar::{Grammar, Symbol};
use crate::PcfgError;

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests_for_tree;

/// A parse tree. Leaves are terminals; every inner node is labelled with the
/// lhs of the rule that produced its children.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Tree {
    Leaf(Symbol),
    Node { label: Symbol, children: Vec<Tree> },
}

const NONTERM_BRACKETS: (char, char) = ('(', ')');

impl std::fmt::Display for Tree {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tree::Leaf(s) => write!(w, "{}", s),
            Tree::Node { label, children } => {
                let bd = NONTERM_BRACKETS;
                write!(w, "{b}{NT}", b=bd.0, NT=label)?;
                for child in children {
                    write!(w, " {}", child)?;
                }
                write!(w, "{d}", d=bd.1)
            }
        }
    }
}

impl Tree {
    pub fn label(&self) -> &Symbol {
        match self {
            Tree::Leaf(s) => s,
            Tree::Node { label, .. } => label,
        }
    }

    pub fn leaves(&self) -> Vec<&str> {
        let mut accum = Vec::new();
        self.collect_leaves(&mut accum);
        accum
    }

    fn collect_leaves<'a>(&'a self, accum: &mut Vec<&'a str>) {
        match self {
            Tree::Leaf(s) => accum.push(s.as_str()),
            Tree::Node { children, .. } => {
                for c in children {
                    c.collect_leaves(accum);
                }
            }
        }
    }

    /// Rebuilds the tree rooted at the complete entry `id` by following its
    /// backpointers.
    pub fn from_chart(grammar: &Grammar, chart: &Chart, id: EntryId) -> Result<Tree, PcfgError> {
        let entry = chart.entry(id);
        let rule = grammar.rule(entry.rule());

        // The horizontal chain runs right to left, one entry per matched
        // symbol.
        let mut chain = Vec::with_capacity(rule.rhs().len());
        let mut cursor = Some(id);
        while let Some(c) = cursor {
            chain.push(c);
            cursor = chart.entry(c).horiz();
        }
        chain.reverse();

        if chain.len() != rule.rhs().len() {
            return Err(PcfgError::InternalInvariantViolation(format!(
                "backpointer chain of length {} for `{}`", chain.len(), rule)));
        }

        let mut children = Vec::with_capacity(chain.len());
        for (c, symbol) in chain.into_iter().zip(rule.rhs()) {
            match chart.entry(c).vert() {
                None => children.push(Tree::Leaf(symbol.clone())),
                Some(sub) => children.push(Tree::from_chart(grammar, chart, sub)?),
            }
        }

        Ok(Tree::Node { label: rule.lhs().clone(), children })
    }
}
