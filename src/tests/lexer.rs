// This is actually defined at `crate::lexer::tests_for_lexer`

use crate::lexer::*;

fn lex(s: &str) -> Vec<(usize, Tok<'_>)> {
    Lexer::new(s).map(|r| r.map(|(l, tok, _)| (l, tok)).unwrap()).collect()
}

#[test]
fn lexing_basics() {
    assert!(lex("").is_empty());
    assert_eq!(lex("1 A a"), vec![(1, Tok::Word("1")), (1, Tok::Word("A")), (1, Tok::Word("a")), (1, Tok::Eol)]);
    assert_eq!(lex("\t0.5  NP\tthe man  \n"),
               vec![(1, Tok::Word("0.5")), (1, Tok::Word("NP")), (1, Tok::Word("the")),
                    (1, Tok::Word("man")), (1, Tok::Eol)]);
}

#[test]
fn lines_are_numbered_from_one_and_short_ones_vanish() {
    let toks = lex("\n1 A a\nab\r\n   \n1 B b\r\n");
    let lines: Vec<usize> = toks.iter().map(|(l, _)| *l).collect();
    assert_eq!(lines, vec![2, 2, 2, 2, 5, 5, 5, 5]);
    assert!(toks.iter().all(|(_, t)| *t != Tok::Word("ab")));
}
