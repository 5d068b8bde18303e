#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A location in a source buffer.
///
/// `offset` is a byte offset, `line` and `column` are 1-based and count
/// characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
    pub file: Arc<str>,
}

impl Position {
    pub fn null() -> Self {
        Position::start(Arc::from("<null>"))
    }

    pub fn start(file: Arc<str>) -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
            file,
        }
    }

    /// Moves past `text`, which must start at this position.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte `offset`.
///
/// Returns the 1-based line number, the line text (including its newline, if
/// any) and the byte offset of `offset` within that line. An offset equal to
/// the source length resolves to the end of the last line.
pub fn line_at_offset(source: &str, offset: usize) -> Option<(usize, String, usize)> {
    if offset > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            let line_pos = offset - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
        last_line = line;
    }

    if source.is_empty() || last_line.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last_line.to_string(), last_line.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::line_at_offset;

    const SOURCE: &str = "Hello, world!\nfun main() {\n\nTesting { }\n";

    #[test]
    fn test_line_at_offset() {
        let (line_number, line, line_pos) = line_at_offset(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = line_at_offset(SOURCE, 36).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_line_at_offset_end_of_source() {
        assert_eq!(line_at_offset("", 0), Some((1, String::new(), 0)));
        assert_eq!(line_at_offset("ab", 2), Some((1, String::from("ab"), 2)));
        assert_eq!(line_at_offset("ab\n", 3), Some((2, String::new(), 0)));
        assert_eq!(line_at_offset("ab", 3), None);
    }
}
