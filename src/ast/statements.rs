use crate::Loc;

use super::{Expression, Node, TypeSource};

/// `#[name]` or `#[name value]`; a bare attribute carries `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Expression,
    pub loc: Loc,
}

/// `:: Name { ... }`. Member definitions are also mirrored into the parent
/// scope under `Name:member`.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub name: String,
    pub members: Vec<Node>,
    pub loc: Loc,
}

/// `### name { ... }` metadata; the value is restricted to static
/// expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    pub name: Option<String>,
    pub value: Expression,
    pub loc: Loc,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let` (immutable) or `var` (mutable) definition.
    Def {
        name: String,
        var_type: Option<TypeSource>,
        expr: Expression,
        is_mut: bool,
        attrs: Vec<Attribute>,
        loc: Loc,
    },
    Assign {
        dest: Expression,
        expr: Expression,
        loc: Loc,
    },
    AddAssign {
        dest: Expression,
        expr: Expression,
        loc: Loc,
    },
    SubAssign {
        dest: Expression,
        expr: Expression,
        loc: Loc,
    },
    Return {
        expr: Expression,
        loc: Loc,
    },
    Each {
        var_name: String,
        items: Expression,
        body: Box<Node>,
        loc: Loc,
    },
    /// `for (let i, n) body`, `for (let i = a, b) body` or `for n body`.
    For {
        var_name: Option<String>,
        from: Option<Expression>,
        to: Option<Expression>,
        times: Option<Expression>,
        body: Box<Node>,
        loc: Loc,
    },
    Loop {
        statements: Vec<Node>,
        loc: Loc,
    },
    Break {
        loc: Loc,
    },
    Continue {
        loc: Loc,
    },
}

impl Statement {
    pub fn loc(&self) -> Loc {
        match self {
            Statement::Def { loc, .. }
            | Statement::Assign { loc, .. }
            | Statement::AddAssign { loc, .. }
            | Statement::SubAssign { loc, .. }
            | Statement::Return { loc, .. }
            | Statement::Each { loc, .. }
            | Statement::For { loc, .. }
            | Statement::Loop { loc, .. }
            | Statement::Break { loc }
            | Statement::Continue { loc } => *loc,
        }
    }
}
