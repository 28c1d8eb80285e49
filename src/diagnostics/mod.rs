//! The run boundary: source text in, editor diagnostics out.
//!
//! Every run starts from a fresh copy of the builtin global scope, so
//! narrowing and declarations from one run never leak into the next.
//! Positions are translated from the analyzer's 1-based locations to the
//! editor protocol's 0-based point ranges here and nowhere else.

use crate::{
    errors::errors::{FatalSyntaxError, SyntaxError, TypeError},
    i18n::I18n,
    lexer::lexer::tokenize,
    parser::parse,
    typing::{checker::TypeChecker, std::create_global_scope},
    Loc,
};

#[cfg(test)]
mod tests;

pub const SOURCE_PARSER: &str = "aiscript-parser";
pub const SOURCE_TYPING: &str = "aiscript-typing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// A 0-based editor protocol position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// A zero-width range at the given analyzer location.
    fn point(loc: Loc) -> Range {
        let position = Position {
            line: loc.line.saturating_sub(1),
            character: loc.column.saturating_sub(1),
        };
        Range {
            start: position,
            end: position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub range: Range,
    pub source: String,
}

pub struct Analyzer {
    global_scope: crate::typing::scope::Scope,
    i18n: I18n,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new()
    }
}

impl Analyzer {
    pub fn new() -> Analyzer {
        Analyzer {
            global_scope: create_global_scope(),
            i18n: I18n::default(),
        }
    }

    /// Runs the whole pipeline over one document.
    ///
    /// # Arguments
    /// * `source` - The full document text.
    ///
    /// # Returns
    /// Every diagnostic for the document, parser findings first. A fatal
    /// error collapses the run to a single diagnostic.
    pub fn diagnose(&self, source: &str) -> Vec<Diagnostic> {
        let tokens = match tokenize(String::from(source)) {
            Ok(tokens) => tokens,
            Err(fatal) => return vec![self.fatal_diagnostic(&fatal)],
        };

        let (nodes, syntax_errors) = match parse(tokens) {
            Ok(parsed) => parsed,
            Err(fatal) => return vec![self.fatal_diagnostic(&fatal)],
        };

        let checker = TypeChecker::new(self.global_scope.copy());

        // The pre-pass installs forward references; its findings are
        // duplicates of what the full pass reports, so they are dropped.
        checker.pre_run_block(&nodes, &checker.global_scope);

        let mut type_errors: Vec<TypeError> = vec![];
        checker.run_block(&nodes, &checker.global_scope, &mut type_errors);

        let mut diagnostics: Vec<Diagnostic> = vec![];
        for error in &syntax_errors {
            diagnostics.push(self.syntax_diagnostic(error));
        }
        for error in &type_errors {
            diagnostics.push(self.type_diagnostic(error));
        }
        diagnostics
    }

    fn syntax_diagnostic(&self, error: &SyntaxError) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.i18n.localize_syntax_error(error),
            range: Range::point(error.loc()),
            source: String::from(SOURCE_PARSER),
        }
    }

    fn type_diagnostic(&self, error: &TypeError) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.i18n.localize_type_error(error),
            range: Range::point(error.loc()),
            source: String::from(SOURCE_TYPING),
        }
    }

    fn fatal_diagnostic(&self, fatal: &FatalSyntaxError) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: fatal.message.clone(),
            range: Range::point(fatal.loc),
            source: String::from(SOURCE_PARSER),
        }
    }
}
