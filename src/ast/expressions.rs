use crate::Loc;

use super::{Node, TypeSource};

/// A function parameter. Optionality exists only for builtin signatures,
/// not in the surface grammar, so it lives in the type domain instead.
#[derive(Debug, Clone, PartialEq)]
pub struct FnParam {
    pub name: String,
    pub param_type: Option<TypeSource>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Null {
        loc: Loc,
    },
    Bool {
        value: bool,
        loc: Loc,
    },
    Num {
        value: f64,
        loc: Loc,
    },
    Str {
        value: String,
        loc: Loc,
    },
    /// A backtick template. String runs appear as `Str` elements.
    Tmpl {
        tmpl: Vec<Expression>,
        loc: Loc,
    },
    /// Object literal; field order is source order.
    Obj {
        value: Vec<(String, Expression)>,
        loc: Loc,
    },
    Arr {
        value: Vec<Expression>,
        loc: Loc,
    },
    /// A variable or namespaced reference; namespaced names are stored
    /// colon-joined (`Core:add`).
    Identifier {
        name: String,
        loc: Loc,
    },
    Fn {
        params: Vec<FnParam>,
        ret_type: Option<TypeSource>,
        children: Vec<Node>,
        loc: Loc,
    },
    Call {
        target: Box<Expression>,
        args: Vec<Expression>,
        loc: Loc,
    },
    Index {
        target: Box<Expression>,
        index: Box<Expression>,
        loc: Loc,
    },
    Prop {
        target: Box<Expression>,
        name: String,
        loc: Loc,
    },
    Not {
        expr: Box<Expression>,
        loc: Loc,
    },
    And {
        left: Box<Expression>,
        right: Box<Expression>,
        loc: Loc,
    },
    Or {
        left: Box<Expression>,
        right: Box<Expression>,
        loc: Loc,
    },
    If {
        cond: Box<Expression>,
        then: Box<Node>,
        elseif: Vec<(Expression, Node)>,
        else_branch: Option<Box<Node>>,
        loc: Loc,
    },
    Match {
        about: Box<Expression>,
        qs: Vec<(Expression, Node)>,
        default: Option<Box<Node>>,
        loc: Loc,
    },
    /// `eval { ... }`
    Block {
        statements: Vec<Node>,
        loc: Loc,
    },
    Exists {
        identifier: Box<Expression>,
        loc: Loc,
    },
}

impl Expression {
    pub fn loc(&self) -> Loc {
        match self {
            Expression::Null { loc }
            | Expression::Bool { loc, .. }
            | Expression::Num { loc, .. }
            | Expression::Str { loc, .. }
            | Expression::Tmpl { loc, .. }
            | Expression::Obj { loc, .. }
            | Expression::Arr { loc, .. }
            | Expression::Identifier { loc, .. }
            | Expression::Fn { loc, .. }
            | Expression::Call { loc, .. }
            | Expression::Index { loc, .. }
            | Expression::Prop { loc, .. }
            | Expression::Not { loc, .. }
            | Expression::And { loc, .. }
            | Expression::Or { loc, .. }
            | Expression::If { loc, .. }
            | Expression::Match { loc, .. }
            | Expression::Block { loc, .. }
            | Expression::Exists { loc, .. } => *loc,
        }
    }

    /// The placeholder the parser substitutes when an expression is missing.
    pub fn missing(loc: Loc) -> Expression {
        Expression::Identifier {
            name: String::new(),
            loc,
        }
    }

    /// A call to a namespaced builtin, used when desugaring operators.
    pub fn builtin_call(name: &str, args: Vec<Expression>, loc: Loc) -> Expression {
        Expression::Call {
            target: Box::new(Expression::Identifier {
                name: String::from(name),
                loc,
            }),
            args,
            loc,
        }
    }
}
