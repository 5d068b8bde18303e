use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    escape::decode_escapes,
    grammar::{Category, Grammar, GrammarVariant},
    symbols::{precedence_of, Keyword, Punctuation},
    tokens::{LiteralValue, Token, TokenKind},
};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^\\s+").unwrap();
}

type CategoryHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

struct Lexer<'a> {
    grammar: &'static Grammar,
    tokens: Vec<Token>,
    source: &'a str,
    cursor: Position,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str, file: Option<String>, variant: GrammarVariant) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Arc::from(file)
        } else {
            Arc::from("shell")
        };

        Lexer {
            grammar: Grammar::get(variant),
            tokens: vec![],
            source,
            cursor: Position::start(file_name),
        }
    }

    fn advance(&mut self, matched: &str) {
        self.cursor.advance(matched);
    }

    fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, at = %token.span.start, "token");
        self.tokens.push(token);
    }

    fn position(&self) -> Position {
        self.cursor.clone()
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.cursor.offset..]
    }

    fn at_eof(&self) -> bool {
        self.cursor.offset >= self.source.len()
    }

    /// Consumes `matched` and returns the span it covered.
    fn consume(&mut self, matched: &str) -> Span {
        let start = self.position();
        self.advance(matched);
        Span {
            start,
            end: self.position(),
        }
    }

    fn scan(&mut self) -> Result<(), Error> {
        while !self.at_eof() {
            if let Some(whitespace) = WHITESPACE.find(self.remainder()) {
                self.advance(whitespace.as_str());
                continue;
            }

            match self.grammar.match_at(self.remainder()) {
                Some((category, matched)) => handler_for(category)(self, matched)?,
                None => return Err(self.unmatched()),
            }
        }

        let end = self.position();
        self.push(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span {
                start: end.clone(),
                end
            }
        ));
        Ok(())
    }

    /// Error for a cursor position no category accepts.
    fn unmatched(&self) -> Error {
        let error = match self.at() {
            Some(quote @ ('\'' | '"')) => ErrorImpl::UnterminatedStringLiteral { quote },
            Some(character) => ErrorImpl::UnrecognizedCharacter { character },
            None => ErrorImpl::UnrecognizedCharacter { character: '\0' },
        };
        Error::new(error, self.position())
    }
}

fn handler_for(category: Category) -> CategoryHandler {
    match category {
        Category::Comment => skip_handler,
        Category::Identifier => symbol_handler,
        Category::Punctuation => punctuation_handler,
        Category::Number => number_handler,
        Category::String => string_handler,
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance(matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let span = lexer.consume(matched);

    let token = match Keyword::from_lexeme(matched) {
        Some(keyword) => MK_TOKEN!(
            TokenKind::Keyword(keyword),
            String::from(matched),
            span,
            precedence: keyword.precedence()
        ),
        None => MK_TOKEN!(TokenKind::Identifier, String::from(matched), span),
    };

    lexer.push(token);
    Ok(())
}

fn punctuation_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let Some(punctuation) = Punctuation::from_lexeme(matched) else {
        let character = matched.chars().next().unwrap_or('\0');
        return Err(Error::new(
            ErrorImpl::UnrecognizedCharacter { character },
            lexer.position(),
        ));
    };

    let span = lexer.consume(matched);
    lexer.push(MK_TOKEN!(
        TokenKind::Punctuation(punctuation),
        String::from(matched),
        span,
        precedence: precedence_of(matched)
    ));
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let value = if matched.contains('.') {
        matched.parse::<f64>().ok().map(LiteralValue::Float)
    } else {
        matched.parse::<i64>().ok().map(LiteralValue::Integer)
    };

    let Some(value) = value else {
        return Err(Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            lexer.position(),
        ));
    };

    let span = lexer.consume(matched);
    lexer.push(MK_TOKEN!(TokenKind::Number, String::from(matched), span, value: value));
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    // Both delimiters are single-byte quotes.
    let inner = &matched[1..matched.len() - 1];

    let decoded = decode_escapes(inner).map_err(|invalid| {
        let mut position = lexer.position();
        position.advance(&matched[..1 + invalid.offset]);
        Error::new(
            ErrorImpl::InvalidEscapeSequence {
                sequence: invalid.sequence,
            },
            position,
        )
    })?;

    let span = lexer.consume(matched);
    lexer.push(MK_TOKEN!(
        TokenKind::String,
        String::from(matched),
        span,
        value: LiteralValue::String(decoded)
    ));
    Ok(())
}

/// Tokenizes `source` read from `file` (or typed at the shell when `None`).
///
/// The returned stream always ends with a single `EOF` token. Comments and
/// whitespace produce no tokens. Any lexical error aborts the whole call;
/// no partial stream is returned.
pub fn tokenize_file(
    source: &str,
    file: Option<String>,
    variant: GrammarVariant,
) -> Result<Vec<Token>, Error> {
    debug!(grammar = ?variant, bytes = source.len(), "tokenizing");

    let mut lex = Lexer::new(source, file, variant);

    if let Err(error) = lex.scan() {
        debug!(
            error = error.get_error_name(),
            at = %error.get_position(),
            "tokenizing failed"
        );
        return Err(error);
    }

    debug!(tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}

pub fn tokenize(source: &str, variant: GrammarVariant) -> Result<Vec<Token>, Error> {
    tokenize_file(source, None, variant)
}
