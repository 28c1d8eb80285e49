//! Error types for the analyzer.
//!
//! This module defines the error taxonomy shared by the parser and the type
//! checker:
//!
//! - Recoverable syntax errors with source locations
//! - Type errors with kind-specific payloads
//! - The narrow fatal-error type raised where no safe recovery exists
//!
//! Every error knows its message-catalog path and positional arguments, so
//! localization stays out of the core.

pub mod errors;

#[cfg(test)]
mod tests;
