use crate::{
    errors::errors::FatalSyntaxError,
    lexer::tokens::{Token, TokenKind},
    Loc,
};

/// A cursor over an EOF-terminated token sequence. The cursor saturates at
/// the EOF token, so looking past the end is always safe.
pub struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        assert!(!tokens.is_empty());
        TokenStream { tokens, index: 0 }
    }

    pub fn token(&self) -> &Token {
        &self.tokens[self.index]
    }

    pub fn kind(&self) -> TokenKind {
        self.token().kind
    }

    pub fn loc(&self) -> Loc {
        self.token().loc
    }

    pub fn value(&self) -> &str {
        &self.token().value
    }

    pub fn has_left_spacing(&self) -> bool {
        self.token().has_left_spacing
    }

    pub fn next(&mut self) {
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
    }

    pub fn lookahead(&self, offset: usize) -> &Token {
        let i = (self.index + offset).min(self.tokens.len() - 1);
        &self.tokens[i]
    }

    /// Asserts the current token kind without consuming it.
    pub fn expect(&self, kind: TokenKind) -> Result<(), FatalSyntaxError> {
        if self.kind() != kind {
            return Err(FatalSyntaxError::new(
                format!("unexpected token: {}", self.kind()),
                self.loc(),
            ));
        }
        Ok(())
    }

    /// Asserts the current token kind and consumes it.
    pub fn next_with(&mut self, kind: TokenKind) -> Result<(), FatalSyntaxError> {
        self.expect(kind)?;
        self.next();
        Ok(())
    }
}
