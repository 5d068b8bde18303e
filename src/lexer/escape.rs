/// A backslash sequence the decoder does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEscape {
    pub sequence: String,
    /// Byte offset of the backslash within the raw, still-escaped text.
    pub offset: usize,
}

/// Decodes the inner text of a string literal in one left-to-right pass.
///
/// Recognized escapes are `\\`, `\n`, `\'` and `\"`. Each escape is consumed
/// whole before scanning continues, so `\\n` decodes to a backslash followed
/// by `n`, never to a newline.
pub fn decode_escapes(raw: &str) -> Result<String, InvalidEscape> {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((index, ch)) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some((_, '\\')) => result.push('\\'),
            Some((_, 'n')) => result.push('\n'),
            Some((_, '\'')) => result.push('\''),
            Some((_, '"')) => result.push('"'),
            Some((_, other)) => {
                return Err(InvalidEscape {
                    sequence: format!("\\{}", other),
                    offset: index,
                })
            }
            None => {
                return Err(InvalidEscape {
                    sequence: String::from("\\"),
                    offset: index,
                })
            }
        }
    }

    Ok(result)
}
