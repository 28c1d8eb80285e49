//! Lexer module for tokenizing AiScript source code.
//!
//! The lexer walks the source with a table of anchored regex patterns, first
//! match wins. Simple symbols use the default handler macro; strings and
//! backtick templates use custom handlers. Templates produce a single token
//! whose `children` hold their string and expression pieces.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
