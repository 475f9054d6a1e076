use crate::grammar::Rule;
use crate::Symbol;

fn write_symbols(w: &mut std::fmt::Formatter, symbols: &[Symbol]) -> std::fmt::Result {
    for s in symbols {
        write!(w, " {}", s)?;
    }
    Ok(())
}

impl std::fmt::Display for Rule {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{} -->", self.lhs)?;
        write_symbols(w, &self.rhs)
    }
}

/// A rule with a period marking how much of its right-hand side has been
/// matched, e.g. `NP --> the . man`.
pub struct Dotted<'a> { pub rule: &'a Rule, pub progress: usize }

impl<'a> std::fmt::Display for Dotted<'a> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        // clamp so that a bogus progress still renders something useful
        let (done, todo) = self.rule.rhs.split_at(self.progress.min(self.rule.rhs.len()));
        write!(w, "{} -->", self.rule.lhs)?;
        write_symbols(w, done)?;
        write!(w, " .")?;
        write_symbols(w, todo)
    }
}

#[cfg(test)]
mod tests {
    use crate::Grammar;
    use super::Dotted;

    #[test]
    fn dotted_rules() {
        let g: Grammar = "0.5 NP the man".parse().unwrap();
        let rule = &g.rules()[0];
        assert_eq!(rule.to_string(), "NP --> the man");
        assert_eq!(Dotted { rule, progress: 0 }.to_string(), "NP --> . the man");
        assert_eq!(Dotted { rule, progress: 1 }.to_string(), "NP --> the . man");
        assert_eq!(Dotted { rule, progress: 2 }.to_string(), "NP --> the man .");
    }
}
