//! Utility macros for the analyzer.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLiteral, "42".to_string(), loc, spaced);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $loc:expr, $spacing:expr) => {
        Token {
            kind: $kind,
            value: $value,
            loc: $loc,
            has_left_spacing: $spacing,
            children: None,
        }
    };
}

/// Creates a default lexer handler for simple single-token patterns.
///
/// Generates a handler function that pushes a token with the given kind and
/// literal value at the current location and advances past it.
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let loc = lexer.loc();
            let spacing = lexer.take_left_spacing();
            lexer.push(MK_TOKEN!($kind, String::from($value), loc, spacing));
            lexer.advance_str($value);
        }
    };
}
