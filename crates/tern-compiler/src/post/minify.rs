use crate::emit::{MARKER_LEN, POS_MARKER};

/// Strip whitespace and block comments that do not affect meaning.
///
/// A whitespace byte survives only between two identifier characters or
/// where removing it would fuse two tokens (`+ +`, `- -`, `/ /`, `/ *`).
/// String literals and position markers are copied verbatim. A stripped
/// comment leaves one space under the same rule.
/// Applying the pass twice gives the same result as applying it once.
pub fn minify(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut previous = 0u8;
    let mut i = 0;

    while i < input.len() {
        let b = input[i];
        match b {
            POS_MARKER => {
                let end = (i + MARKER_LEN).min(input.len());
                out.extend_from_slice(&input[i..end]);
                i = end;
                continue;
            }
            b' ' | b'\t' | b'\n' | b'\r' => {
                let next = peek(input, i + 1);
                if !keeps_apart(previous, next) {
                    i += 1;
                    continue;
                }
            }
            b'"' | b'\'' => {
                let end = string_end(input, i);
                out.extend_from_slice(&input[i..end]);
                previous = b;
                i = end;
                continue;
            }
            b'/' if input.get(i + 1) == Some(&b'*') => {
                i = match find(&input[i + 2..], b"*/") {
                    Some(at) => i + 2 + at + 2,
                    None => input.len(),
                };
                if keeps_apart(previous, peek(input, i)) {
                    out.push(b' ');
                    previous = b' ';
                }
                continue;
            }
            _ => {}
        }
        out.push(b);
        previous = b;
        i += 1;
    }

    out
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn keeps_apart(previous: u8, next: u8) -> bool {
    if is_ident_byte(previous) && is_ident_byte(next) {
        return true;
    }
    matches!(
        (previous, next),
        (b'+', b'+') | (b'-', b'-') | (b'/', b'/') | (b'/', b'*')
    )
}

/// Next byte at or after `i` that is not part of a position marker.
fn peek(input: &[u8], mut i: usize) -> u8 {
    while input.get(i) == Some(&POS_MARKER) {
        i += MARKER_LEN;
    }
    input.get(i).copied().unwrap_or(0)
}

/// End (exclusive) of the string literal opening at `start`.
fn string_end(input: &[u8], start: usize) -> usize {
    let quote = input[start];
    let mut i = start + 1;
    while i < input.len() {
        match input[i] {
            b'\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    input.len()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
