use crate::earley::BestParse;

/// The text printed for one sentence.
pub trait Rendered {
    fn rendered(&self) -> String;
}

impl Rendered for BestParse {
    fn rendered(&self) -> String {
        // `{:?}` keeps the fractional part of whole numbers: `1.0`, not `1`
        format!("{}\n{:?}", self.tree, self.weight)
    }
}

impl Rendered for Option<BestParse> {
    fn rendered(&self) -> String {
        match self {
            Some(best) => best.rendered(),
            None => "NONE".to_string(),
        }
    }
}
