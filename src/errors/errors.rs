use thiserror::Error;

use crate::Loc;

/// A recoverable syntax error. The parser pushes these into a caller-supplied
/// sink and keeps going with a placeholder node.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    loc: Loc,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, loc: Loc) -> Self {
        SyntaxError { kind, loc }
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn loc(&self) -> Loc {
        self.loc
    }

    /// Message-catalog path, `"syntax.<MessageId>"`.
    pub fn message_path(&self) -> String {
        format!("syntax.{}", self.kind.name())
    }

    /// Positional arguments for the message catalog.
    pub fn message_args(&self) -> Vec<String> {
        match &self.kind {
            SyntaxErrorKind::MissingKeyword { keyword } => vec![keyword.clone()],
            SyntaxErrorKind::MissingBracket { bracket } => vec![bracket.clone()],
            _ => vec![],
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("attributes can only be attached to definitions")]
    InvalidAttribute,
    #[error("unexpected token")]
    UnExpectedToken,
    #[error("multiple statements cannot be placed on a single line")]
    MultipleStatementsOnSingleLine,
    #[error("if statement needs a then clause")]
    MissingThenClause,
    #[error("if statement needs a condition")]
    MissingCondition,
    #[error("separator expected")]
    SeparatorExpected,
    #[error("this operator only applies to number literals")]
    NonNumericSign,
    #[error("spaces cannot be used inside a reference")]
    CanNotUseSpacesInReference,
    #[error("identifier expected")]
    MissingIdentifier,
    #[error("type expected")]
    MissingType,
    #[error("parameter list expected")]
    MissingParams,
    #[error("function body expected")]
    MissingFunctionBody,
    #[error("expression expected")]
    MissingExpr,
    #[error("`{keyword}` keyword expected")]
    MissingKeyword { keyword: String },
    #[error("code block expected")]
    MissingBody,
    #[error("`{bracket}` expected")]
    MissingBracket { bracket: String },
    #[error("attribute expected")]
    MissingAttribute,
    #[error("line break expected")]
    MissingLineBreak,
    #[error("statement expected")]
    MissingStatement,
}

impl SyntaxErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            SyntaxErrorKind::InvalidAttribute => "InvalidAttribute",
            SyntaxErrorKind::UnExpectedToken => "UnExpectedToken",
            SyntaxErrorKind::MultipleStatementsOnSingleLine => "MultipleStatementsOnSingleLine",
            SyntaxErrorKind::MissingThenClause => "MissingThenClause",
            SyntaxErrorKind::MissingCondition => "MissingCondition",
            SyntaxErrorKind::SeparatorExpected => "SeparatorExpected",
            SyntaxErrorKind::NonNumericSign => "NonNumericSign",
            SyntaxErrorKind::CanNotUseSpacesInReference => "CanNotUseSpacesInReference",
            SyntaxErrorKind::MissingIdentifier => "MissingIdentifier",
            SyntaxErrorKind::MissingType => "MissingType",
            SyntaxErrorKind::MissingParams => "MissingParams",
            SyntaxErrorKind::MissingFunctionBody => "MissingFunctionBody",
            SyntaxErrorKind::MissingExpr => "MissingExpr",
            SyntaxErrorKind::MissingKeyword { .. } => "MissingKeyword",
            SyntaxErrorKind::MissingBody => "MissingBody",
            SyntaxErrorKind::MissingBracket { .. } => "MissingBracket",
            SyntaxErrorKind::MissingAttribute => "MissingAttribute",
            SyntaxErrorKind::MissingLineBreak => "MissingLineBreak",
            SyntaxErrorKind::MissingStatement => "MissingStatement",
        }
    }
}

/// A type error collected by the checker. Never fatal: the checker
/// substitutes a fallback type and keeps walking.
#[derive(Debug, Clone)]
pub struct TypeError {
    kind: TypeErrorKind,
    loc: Loc,
}

impl TypeError {
    pub fn new(kind: TypeErrorKind, loc: Loc) -> Self {
        TypeError { kind, loc }
    }

    pub fn kind(&self) -> &TypeErrorKind {
        &self.kind
    }

    pub fn loc(&self) -> Loc {
        self.loc
    }

    /// Message-catalog path, `"typing.<MessageId>"`.
    pub fn message_path(&self) -> String {
        format!("typing.{}", self.kind.name())
    }

    /// Positional arguments for the message catalog.
    pub fn message_args(&self) -> Vec<String> {
        match &self.kind {
            TypeErrorKind::AlreadyDeclaredVariable { name } => vec![name.clone()],
            TypeErrorKind::NotAssignableType { dest, value } => {
                vec![dest.clone(), value.clone()]
            }
            TypeErrorKind::CanNotCall { target } => vec![target.clone()],
            TypeErrorKind::MissingArgument { pos, expect } => {
                vec![pos.to_string(), expect.clone()]
            }
            TypeErrorKind::InvalidArgument { pos, expect, but } => {
                vec![pos.to_string(), expect.clone(), but.clone()]
            }
            TypeErrorKind::CanNotAssignToImmutableVariable { name } => vec![name.clone()],
            TypeErrorKind::CanNotReadProperty { target, name } => {
                vec![target.clone(), name.clone()]
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeErrorKind {
    #[error("variable `{name}` is already declared")]
    AlreadyDeclaredVariable { name: String },
    #[error("`{value}` is not assignable to type `{dest}`")]
    NotAssignableType { dest: String, value: String },
    #[error("type `{target}` is not callable")]
    CanNotCall { target: String },
    #[error("argument {pos} of type `{expect}` is missing")]
    MissingArgument { pos: usize, expect: String },
    #[error("argument {pos} expects type `{expect}`, but `{but}` was given")]
    InvalidArgument {
        pos: usize,
        expect: String,
        but: String,
    },
    #[error("variable `{name}` is immutable and cannot be assigned")]
    CanNotAssignToImmutableVariable { name: String },
    #[error("property `{name}` cannot be read from type `{target}`")]
    CanNotReadProperty { target: String, name: String },
}

impl TypeErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            TypeErrorKind::AlreadyDeclaredVariable { .. } => "AlreadyDeclaredVariable",
            TypeErrorKind::NotAssignableType { .. } => "NotAssignableType",
            TypeErrorKind::CanNotCall { .. } => "CanNotCall",
            TypeErrorKind::MissingArgument { .. } => "MissingArgument",
            TypeErrorKind::InvalidArgument { .. } => "InvalidArgument",
            TypeErrorKind::CanNotAssignToImmutableVariable { .. } => {
                "CanNotAssignToImmutableVariable"
            }
            TypeErrorKind::CanNotReadProperty { .. } => "CanNotReadProperty",
        }
    }
}

/// A non-recoverable syntax error. These are raised only where no safe
/// placeholder exists (ambiguous separator sequences, unterminated lexemes)
/// and are caught at the outermost run boundary.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct FatalSyntaxError {
    pub message: String,
    pub loc: Loc,
}

impl FatalSyntaxError {
    pub fn new(message: impl Into<String>, loc: Loc) -> Self {
        FatalSyntaxError {
            message: message.into(),
            loc,
        }
    }

    pub fn multiple_statements(loc: Loc) -> Self {
        FatalSyntaxError::new(
            "Multiple statements cannot be placed on a single line.",
            loc,
        )
    }

    pub fn separator_expected(loc: Loc) -> Self {
        FatalSyntaxError::new("separator expected", loc)
    }
}
