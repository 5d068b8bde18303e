//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::diagnostics::Locale;
use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;
use std::sync::Arc;

fn position(offset: usize, line: u32, column: u32) -> Position {
    Position {
        offset,
        line,
        column,
        file: Arc::from("test.ht"),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '@' },
        position(10, 1, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognizedCharacter");
    assert_eq!(error.get_position().offset, 10);
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::UnterminatedStringLiteral { quote: '"' }, "UnterminatedStringLiteral"),
        (
            ErrorImpl::InvalidEscapeSequence {
                sequence: "\\t".to_string(),
            },
            "InvalidEscapeSequence",
        ),
        (
            ErrorImpl::NumberParseError {
                token: "99999999999999999999".to_string(),
            },
            "NumberParseError",
        ),
        (
            ErrorImpl::UnexpectedToken {
                expected: ")".to_string(),
                found: ";".to_string(),
            },
            "UnexpectedToken",
        ),
    ];

    for (error_impl, name) in cases {
        let error = Error::new(error_impl, Position::null());
        assert_eq!(error.get_error_name(), name);
    }
}

#[test]
fn test_error_display_uses_catalog() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '#' },
        Position::null(),
    );
    assert_eq!(error.to_string(), "Unexpected character '#'");

    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ")".to_string(),
            found: "end of file".to_string(),
        },
        Position::null(),
    );
    assert_eq!(error.to_string(), ") expected, get end of file");
}

#[test]
fn test_error_message_localized() {
    let error = Error::new(
        ErrorImpl::UnterminatedStringLiteral { quote: '\'' },
        Position::null(),
    );

    assert_eq!(
        error.message(Locale::EnUs),
        "Unterminated string literal, missing closing '"
    );
    assert_eq!(error.message(Locale::ZhHans), "字符串字面量未结束，缺少结尾的 '");
}

#[test]
fn test_error_render() {
    let source = "var x = @";
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '@' },
        position(8, 1, 9),
    );

    assert_eq!(
        error.render(source, Locale::EnUs),
        "Error: UnrecognizedCharacter (Unexpected character '@')\n\
         -> test.ht\n  |\n\
         1 | var x = @\n  | --------^\n"
    );
}

#[test]
fn test_error_render_strips_indentation() {
    let source = "fun main() {\n    print(#)\n}\n";
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '#' },
        position(23, 2, 11),
    );

    let rendered = error.render(source, Locale::EnUs);
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines[3], "2 | print(#)");
    assert_eq!(lines[4], "  | ------^");
}

#[test]
fn test_error_render_out_of_range_position() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '@' },
        position(100, 1, 1),
    );

    assert_eq!(
        error.render("x", Locale::EnUs),
        "Error: UnrecognizedCharacter (Unexpected character '@')\n-> test.ht\n"
    );
}
