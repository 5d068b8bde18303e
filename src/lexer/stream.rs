//! Cursor over a tokenized source, handed to the parser.
//!
//! The stream never moves past its trailing `EOF` token: once reached,
//! `advance` keeps returning it.

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct TokenStream {
    /// The list of tokens, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl TokenStream {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        TokenStream { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the token `n` places ahead, or `EOF` past the end.
    pub fn peek_nth(&self, n: usize) -> &Token {
        let index = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    pub fn current_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::EOF
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consumes the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of `kind` or fails with `UnexpectedToken`.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        let token = self.peek();
        if token.kind != kind {
            let found = if token.lexeme.is_empty() {
                token.kind.to_string()
            } else {
                token.lexeme.clone()
            };

            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: kind.to_string(),
                    found,
                },
                token.span.start.clone(),
            ));
        }

        Ok(self.advance().clone())
    }

    /// Tokens not yet consumed, including the trailing `EOF`.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.pos..]
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}
