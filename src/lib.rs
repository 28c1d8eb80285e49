#![allow(clippy::module_inception)]

//! Front end of the AiScript toolchain for editor integration.
//!
//! The pipeline is: source text -> lexer -> token stream -> parser ->
//! (syntax tree, syntax-error list) -> type checker -> type-error list.
//! Both error lists are turned into diagnostics at the run boundary
//! ([`diagnostics::Analyzer`]); an editor layer re-runs the whole pipeline
//! on every edit and renders the result inline.
//!
//! The parser recovers from every error it can describe: it substitutes a
//! placeholder node and keeps going, so the checker always receives a
//! structurally complete tree. Only a handful of separator ambiguities are
//! fatal, and those are caught at the run boundary and reported as a single
//! diagnostic.

pub mod ast;
pub mod diagnostics;
pub mod errors;
pub mod i18n;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod typing;

extern crate regex;

/// A 1-based source position. The editor protocol wants 0-based positions;
/// that translation happens in [`diagnostics`], nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loc {
    pub line: u32,
    pub column: u32,
}

impl Loc {
    pub fn new(line: u32, column: u32) -> Self {
        Loc { line, column }
    }

    /// Best-effort location for errors that carry none.
    pub fn start() -> Self {
        Loc { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::Loc;

    #[test]
    fn test_loc_display() {
        assert_eq!(Loc::new(3, 14).to_string(), "3:14");
        assert_eq!(Loc::start().to_string(), "1:1");
    }
}
