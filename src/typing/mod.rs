//! Structural typing for the checked language: the type algebra, scopes,
//! the builtin global scope, and the checker itself.

pub mod checker;
pub mod scope;
pub mod std;
pub mod type_value;

#[cfg(test)]
mod tests;
