//! Parser module for AiScript source code.
//!
//! The parser consumes an EOF-terminated token sequence and produces a
//! syntax tree plus a list of recoverable syntax errors. Wherever a piece
//! of syntax is missing it reports the error, substitutes a placeholder
//! node, and keeps going, so a tree always comes out. Only separator
//! ambiguities where no safe placeholder exists abort the whole parse.

pub mod common;
pub mod expr;
pub mod stmt;
pub mod stream;
pub mod toplevel;

#[cfg(test)]
mod tests;

use crate::{
    ast::Node,
    errors::errors::{FatalSyntaxError, SyntaxError},
    lexer::tokens::Token,
};

use self::{stream::TokenStream, toplevel::parse_top_level};

/// Parses a whole document.
///
/// # Arguments
/// * `tokens` - An EOF-terminated token sequence from the lexer.
///
/// # Returns
/// The top-level nodes and every recoverable error found along the way, or
/// the fatal error that aborted the parse.
pub fn parse(tokens: Vec<Token>) -> Result<(Vec<Node>, Vec<SyntaxError>), FatalSyntaxError> {
    let mut stream = TokenStream::new(tokens);
    let mut errors: Vec<SyntaxError> = vec![];
    let nodes = parse_top_level(&mut stream, &mut errors)?;
    Ok((nodes, errors))
}
