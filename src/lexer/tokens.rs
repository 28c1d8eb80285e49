use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Loc;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("null", TokenKind::NullKeyword);
        map.insert("true", TokenKind::TrueKeyword);
        map.insert("false", TokenKind::FalseKeyword);
        map.insert("let", TokenKind::LetKeyword);
        map.insert("var", TokenKind::VarKeyword);
        map.insert("if", TokenKind::IfKeyword);
        map.insert("elif", TokenKind::ElifKeyword);
        map.insert("else", TokenKind::ElseKeyword);
        map.insert("match", TokenKind::MatchKeyword);
        map.insert("case", TokenKind::CaseKeyword);
        map.insert("default", TokenKind::DefaultKeyword);
        map.insert("each", TokenKind::EachKeyword);
        map.insert("for", TokenKind::ForKeyword);
        map.insert("loop", TokenKind::LoopKeyword);
        map.insert("break", TokenKind::BreakKeyword);
        map.insert("continue", TokenKind::ContinueKeyword);
        map.insert("return", TokenKind::ReturnKeyword);
        map.insert("eval", TokenKind::EvalKeyword);
        map.insert("exists", TokenKind::ExistsKeyword);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    NewLine,
    Identifier,
    NumberLiteral,
    StringLiteral,

    /// A backtick template. Its pieces live in `Token::children`.
    Template,
    TemplateStringElement,
    /// An embedded `{expr}` fragment; its own `children` is a full token
    /// sequence (EOF-terminated) to be parsed as an expression.
    TemplateExprElement,

    // Symbols
    At,         // @
    Not,        // !
    Sharp3,     // ###
    OpenSharpBracket, // #[
    Percent,    // %
    And2,       // &&
    Or2,        // ||
    OpenParen,
    CloseParen,
    Asterisk,   // *
    Plus,       // +
    PlusEq,     // +=
    Comma,
    Minus,      // -
    MinusEq,    // -=
    Dot,
    Slash,      // /
    Colon,
    Colon2,     // ::
    SemiColon,
    Out,        // <:
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,         // =
    Eq2,        // ==
    NotEq,      // !=
    Arrow,      // =>
    OpenBracket,
    CloseBracket,
    BackSlash,
    Hat,        // ^
    OpenBrace,
    CloseBrace,

    // Reserved words
    NullKeyword,
    TrueKeyword,
    FalseKeyword,
    LetKeyword,
    VarKeyword,
    IfKeyword,
    ElifKeyword,
    ElseKeyword,
    MatchKeyword,
    CaseKeyword,
    DefaultKeyword,
    EachKeyword,
    ForKeyword,
    LoopKeyword,
    BreakKeyword,
    ContinueKeyword,
    ReturnKeyword,
    EvalKeyword,
    ExistsKeyword,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub loc: Loc,
    /// Whether a space, tab, or comment sits directly before this token.
    /// The parser uses it to tell a call `f(` from a new statement `f (`.
    pub has_left_spacing: bool,
    /// Nested token sequences, only populated for template tokens.
    pub children: Option<Vec<Token>>,
}

impl Token {
    pub fn eof(loc: Loc) -> Token {
        Token {
            kind: TokenKind::Eof,
            value: String::from("EOF"),
            loc,
            has_left_spacing: false,
            children: None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, value: {} }}", self.kind, self.value)
    }
}
