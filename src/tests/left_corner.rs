// This is actually defined at `crate::left_corner::tests_for_left_corner`

use crate::left_corner::*;
use crate::tests::*;

fn sorted(lc: &LeftCorners) -> Vec<&str> {
    let mut v: Vec<&str> = lc.iter().map(|s| s.as_str()).collect();
    v.sort();
    v
}

#[test]
fn word_is_its_own_left_corner() {
    let g = grammar(PAPA);
    let lc = LeftCorners::of(&g, "zebra");
    assert_eq!(sorted(&lc), vec!["zebra"]);
}

#[test]
fn closure_climbs_through_first_symbols() {
    let g = grammar(PAPA);
    assert_eq!(sorted(&LeftCorners::of(&g, "Papa")), vec!["NP", "Papa", "ROOT"]);
    assert_eq!(sorted(&LeftCorners::of(&g, "the")), vec!["NP", "ROOT", "the"]);
    // `man` is never first in a right-hand side
    assert_eq!(sorted(&LeftCorners::of(&g, "man")), vec!["man"]);
    assert_eq!(sorted(&LeftCorners::of(&g, "ate")), vec!["VP", "ate"]);
}

#[test]
fn closure_needs_more_than_one_sweep() {
    // each sweep visits the rules top to bottom, so A is only found after B,
    // and B after C
    let g = grammar("1.0 A B x\n1.0 B C\n1.0 C c\n");
    let lc = LeftCorners::of(&g, "c");
    assert_eq!(sorted(&lc), vec!["A", "B", "C", "c"]);
    assert_eq!(lc.len(), 4);
}

#[test]
fn recursive_rules_terminate() {
    let g = grammar("1.0 A A a\n0.5 A B\n1.0 B A\n0.5 B b\n");
    assert_eq!(sorted(&LeftCorners::of(&g, "b")), vec!["A", "B", "b"]);
    assert_eq!(sorted(&LeftCorners::of(&g, "a")), vec!["a"]);
}
