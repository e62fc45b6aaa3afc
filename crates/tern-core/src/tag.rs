//! Struct tag parsing.
//!
//! Tags use the conventional `key:"value" other:"value"` layout. Values are
//! double-quoted string literals with backslash escapes.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("tag value is not a quoted string")]
    NotQuoted,

    #[error("unterminated escape sequence")]
    UnterminatedEscape,

    #[error("invalid escape `\\{0}`")]
    InvalidEscape(char),

    #[error("invalid code point {0:#x}")]
    InvalidCodePoint(u32),
}

/// Find the value for `key` in a struct tag.
///
/// Returns `None` when the key is absent, when the tag is malformed before
/// the key is reached, or when the key's value does not unquote.
pub fn lookup(tag: &str, key: &str) -> Option<String> {
    let mut rest = tag;
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            return None;
        }

        // Key runs up to the colon; a space or quote before it is a syntax error.
        let bytes = rest.as_bytes();
        let mut i = 0;
        while i < bytes.len() && !matches!(bytes[i], b' ' | b':' | b'"') {
            i += 1;
        }
        if i + 1 >= bytes.len() || bytes[i] != b':' || bytes[i + 1] != b'"' {
            return None;
        }
        let name = &rest[..i];
        rest = &rest[i + 1..];

        // Scan the quoted value.
        let bytes = rest.as_bytes();
        let mut j = 1;
        while j < bytes.len() && bytes[j] != b'"' {
            if bytes[j] == b'\\' {
                j += 1;
            }
            j += 1;
        }
        if j >= bytes.len() {
            return None;
        }
        let quoted = &rest[..=j];
        rest = &rest[j + 1..];

        if name == key {
            return unquote(quoted).ok();
        }
    }
}

/// Interpret a double-quoted string literal.
///
/// Narrower than the source language's unquoting: `\xHH` yields the code
/// point U+00HH rather than a raw byte, and octal escapes are rejected.
pub fn unquote(quoted: &str) -> Result<String, TagError> {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(TagError::NotQuoted)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(TagError::NotQuoted),
            '\\' => {
                let esc = chars.next().ok_or(TagError::UnterminatedEscape)?;
                match esc {
                    'a' => out.push('\x07'),
                    'b' => out.push('\x08'),
                    'f' => out.push('\x0c'),
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    'v' => out.push('\x0b'),
                    '\\' | '"' => out.push(esc),
                    'x' => out.push(hex_escape(&mut chars, 2)?),
                    'u' => out.push(hex_escape(&mut chars, 4)?),
                    'U' => out.push(hex_escape(&mut chars, 8)?),
                    other => return Err(TagError::InvalidEscape(other)),
                }
            }
            c => out.push(c),
        }
    }
    Ok(out)
}

fn hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Result<char, TagError> {
    let mut value = 0u32;
    for _ in 0..digits {
        let c = chars.next().ok_or(TagError::UnterminatedEscape)?;
        let d = c.to_digit(16).ok_or(TagError::InvalidEscape(c))?;
        value = value * 16 + d;
    }
    char::from_u32(value).ok_or(TagError::InvalidCodePoint(value))
}
