// This is actually defined at `crate::tree::tests_for_tree`

use crate::tree::*;
use crate::chart::{Chart, Entry, EntryId, Origin};
use crate::grammar::RuleId;
use crate::tests::*;
use crate::PcfgError;

fn leaf(s: &str) -> Tree { Tree::Leaf(s.into()) }

fn node(label: &str, children: Vec<Tree>) -> Tree {
    Tree::Node { label: label.into(), children }
}

#[test]
fn bracketed_rendering() {
    let t = node("ROOT", vec![node("NP", vec![leaf("the"), leaf("man")]), node("VP", vec![leaf("ate")])]);
    assert_eq!(t.to_string(), "(ROOT (NP the man) (VP ate))");
    assert_eq!(leaf("ate").to_string(), "ate");
    assert_eq!(t.leaves(), vec!["the", "man", "ate"]);
    assert_eq!(t.label().as_str(), "ROOT");
}

#[test]
fn rebuilt_from_hand_made_chart() {
    // rules: 0 ROOT --> NP VP, 1 NP --> Papa, 2 NP --> the man, 3 VP --> ate
    let g = grammar(PAPA);
    let mut chart = Chart::new(2);
    let np = chart.enqueue(Entry { progress: 1, ..Entry::new(RuleId(1), 0, 1.0) }, 1, Origin::Scan).id().unwrap();
    let root_1 = chart.enqueue(Entry { progress: 1, vert: Some(np), ..Entry::new(RuleId(0), 0, 1.0) }, 1, Origin::Attach).id().unwrap();
    let vp = chart.enqueue(Entry { progress: 1, ..Entry::new(RuleId(3), 1, 0.0) }, 2, Origin::Scan).id().unwrap();
    let root_2 = chart.enqueue(Entry { progress: 2, horiz: Some(root_1), vert: Some(vp), ..Entry::new(RuleId(0), 0, 1.0) }, 2, Origin::Attach).id().unwrap();

    let t = Tree::from_chart(&g, &chart, root_2).unwrap();
    assert_eq!(t, node("ROOT", vec![node("NP", vec![leaf("Papa")]), node("VP", vec![leaf("ate")])]));
}

#[test]
fn broken_chain_is_an_invariant_violation() {
    let g = grammar(PAPA);
    let mut chart = Chart::new(2);
    // `NP --> the man .` without the entry for `NP --> the . man` behind it
    let id = chart.enqueue(Entry { progress: 2, ..Entry::new(RuleId(2), 0, 1.0) }, 2, Origin::Scan).id().unwrap();
    assert_eq!(id, EntryId { column: 2, row: 0 });
    assert!(matches!(Tree::from_chart(&g, &chart, id), Err(PcfgError::InternalInvariantViolation(_))));
}
