/// Encode bytes as a double-quoted target string literal.
///
/// Control characters use their short escapes where one exists; any other
/// byte outside printable ASCII becomes `\xHH` with uppercase hex digits.
/// Non-ASCII text is therefore encoded byte by byte, the way the source
/// language stores strings.
pub fn encode_string(s: impl AsRef<[u8]>) -> String {
    let bytes = s.as_ref();
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        match b {
            0x08 => out.push_str("\\b"),
            0x0c => out.push_str("\\f"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x0b => out.push_str("\\v"),
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02X}")),
        }
    }
    out.push('"');
    out
}
