use crate::Loc;

/// A written type annotation, as it appears in the source. The checker
/// resolves these to semantic types; unknown names resolve leniently.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeSource {
    /// `num`, `arr<num>`, `MyNs:Thing`, ...
    Named {
        name: String,
        inner: Option<Box<TypeSource>>,
        loc: Loc,
    },
    /// `@(num, str) => bool`
    Fn {
        params: Vec<TypeSource>,
        result: Box<TypeSource>,
        loc: Loc,
    },
}

impl TypeSource {
    pub fn loc(&self) -> Loc {
        match self {
            TypeSource::Named { loc, .. } => *loc,
            TypeSource::Fn { loc, .. } => *loc,
        }
    }
}
