use std::fmt::Display;

use thiserror::Error;

use crate::{
    diagnostics::{message, Diagnostic, Locale},
    line_at_offset, Position,
};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
            ErrorImpl::UnterminatedStringLiteral { .. } => "UnterminatedStringLiteral",
            ErrorImpl::InvalidEscapeSequence { .. } => "InvalidEscapeSequence",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn message(&self, locale: Locale) -> String {
        self.internal_error.message(locale)
    }

    /// Formats the error with the offending source line and a caret.
    ///
    /// ```text
    /// Error: UnrecognizedCharacter (Unexpected character '#')
    /// -> main.ht
    ///    |
    /// 20 | let a = #;
    ///    | --------^
    /// ```
    pub fn render(&self, source: &str, locale: Locale) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Error: {} ({})\n",
            self.get_error_name(),
            self.message(locale)
        ));
        out.push_str(&format!("-> {}\n", self.position.file));

        let Some((line, line_text, line_pos)) =
            line_at_offset(source, self.position.offset)
        else {
            return out;
        };

        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        out.push_str(&format!("{:>padding$}\n", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

        let column = line_text
            .get(..line_pos)
            .map(|before| before.chars().count())
            .unwrap_or(0);
        let arrows = column.saturating_sub(removed_whitespace) + 1;

        out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
        out
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    UnrecognizedCharacter { character: char },
    UnterminatedStringLiteral { quote: char },
    InvalidEscapeSequence { sequence: String },
    NumberParseError { token: String },
    UnexpectedToken { expected: String, found: String },
}

impl ErrorImpl {
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            ErrorImpl::UnrecognizedCharacter { .. } => Diagnostic::UnrecognizedCharacter,
            ErrorImpl::UnterminatedStringLiteral { .. } => Diagnostic::UnterminatedString,
            ErrorImpl::InvalidEscapeSequence { .. } => Diagnostic::InvalidEscape,
            ErrorImpl::NumberParseError { .. } => Diagnostic::NumberOutOfRange,
            ErrorImpl::UnexpectedToken { .. } => Diagnostic::Expected,
        }
    }

    pub fn message(&self, locale: Locale) -> String {
        match self {
            ErrorImpl::UnrecognizedCharacter { character } => {
                message(locale, self.diagnostic(), &[character])
            }
            ErrorImpl::UnterminatedStringLiteral { quote } => {
                message(locale, self.diagnostic(), &[quote])
            }
            ErrorImpl::InvalidEscapeSequence { sequence } => {
                message(locale, self.diagnostic(), &[sequence])
            }
            ErrorImpl::NumberParseError { token } => message(locale, self.diagnostic(), &[token]),
            ErrorImpl::UnexpectedToken { expected, found } => {
                message(locale, self.diagnostic(), &[expected, found])
            }
        }
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message(Locale::default()))
    }
}
