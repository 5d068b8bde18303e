//! Lexical analysis for Hetu source text.
//!
//! This module turns a script file or a single command line into a stream of
//! classified tokens. It handles:
//!
//! - The ordered pattern grammars for scripts and command lines
//! - Recognition of keywords, identifiers, literals and punctuation
//! - Escape decoding of string literals
//! - Operator precedence metadata for the parser
//! - Token position tracking for error reporting
//!
//! Comments are consumed and never reach the token stream.

pub mod escape;
pub mod grammar;
pub mod lexer;
pub mod stream;
pub mod symbols;
pub mod tokens;
