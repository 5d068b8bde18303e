//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's raw source text
/// * `$span` - The source span
/// * `value: $value` - Optional decoded literal value
/// * `precedence: $precedence` - Optional `Option<OperatorInfo>`
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span, value: LiteralValue::Integer(42));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            value: None,
            precedence: None,
            span: $span,
        }
    };
    ($kind:expr, $lexeme:expr, $span:expr, value: $value:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            value: Some($value),
            precedence: None,
            span: $span,
        }
    };
    ($kind:expr, $lexeme:expr, $span:expr, precedence: $precedence:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            value: None,
            precedence: $precedence,
            span: $span,
        }
    };
}
