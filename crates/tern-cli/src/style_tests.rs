use crate::style::{Role, Style};

#[test]
fn plain_style_passes_text_through() {
    assert_eq!(Style::PLAIN.paint(Role::Offset, 42).to_string(), "42");
}

#[test]
fn enabled_style_wraps_in_escape_codes() {
    let style = Style::new(true);
    assert_eq!(style.paint(Role::Meta, "1:1").to_string(), "\x1b[2m1:1\x1b[0m");
    assert_eq!(style.paint(Role::Literal, "\"a\"").to_string(), "\x1b[32m\"a\"\x1b[0m");
}
