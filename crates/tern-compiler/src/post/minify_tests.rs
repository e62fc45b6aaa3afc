use indoc::indoc;

use super::minify;

fn minify_str(input: &str) -> String {
    String::from_utf8(minify(input.as_bytes())).unwrap()
}

#[test]
fn strips_insignificant_whitespace() {
    assert_eq!(minify_str("foo ; bar"), "foo;bar");
    assert_eq!(minify_str("x = y + 1;"), "x=y+1;");
}

#[test]
fn keeps_space_between_identifiers() {
    assert_eq!(minify_str("var  x = new   T();"), "var x=new T();");
    assert_eq!(minify_str("return $pkg;"), "return $pkg;");
}

#[test]
fn keeps_space_that_separates_operators() {
    assert_eq!(minify_str("a + +b"), "a+ +b");
    assert_eq!(minify_str("a - -b"), "a- -b");
    assert_eq!(minify_str("a / /re/.x"), "a/ /re/.x");
    assert_eq!(minify_str("x = a -/* c */-b;"), "x=a- -b;");
    assert_eq!(minify_str("x = a +/**/+b;"), "x=a+ +b;");
}

#[test]
fn string_literals_are_untouched() {
    assert_eq!(minify_str(r#"x = "a  b /* c */";"#), r#"x="a  b /* c */";"#);
    assert_eq!(minify_str(r#"y = 'it\'s  ok';"#), r#"y='it\'s  ok';"#);
    assert_eq!(minify_str(r#"z = "\"  \"" ;"#), r#"z="\"  \"";"#);
}

#[test]
fn strips_block_comments() {
    assert_eq!(minify_str("a = /* note */ b;"), "a=b;");
    assert_eq!(minify_str("return/**/x;"), "return x;");
}

#[test]
fn multiline_function() {
    let input = indoc! {"
        function f(a, b) {
        \tvar x;
        \tx = a + b;
        \treturn x;
        }
    "};
    insta::assert_snapshot!(minify_str(input), @"function f(a,b){var x;x=a+b;return x;}");
}

#[test]
fn markers_are_copied_and_skipped() {
    let input = b"var \x08\x00\x00\x00\x2ax;";
    assert_eq!(minify(input), b"var \x08\x00\x00\x00\x2ax;".to_vec());

    // The marker itself may contain whitespace and quote bytes.
    let input = b"a \x08\x00\x00\x20\x22 = b;";
    assert_eq!(minify(input), b"a\x08\x00\x00\x20\x22=b;".to_vec());
}

#[test]
fn truncated_input_does_not_panic() {
    assert_eq!(minify(b"x = \"open"), b"x=\"open".to_vec());
    assert_eq!(minify(b"a /* open"), b"a".to_vec());
    assert_eq!(minify(b"a \x08\x00"), b"a\x08\x00".to_vec());
}

#[test]
fn idempotent() {
    let inputs = [
        "var  x = new   T();",
        "a + +b - -c",
        "a/* c */b",
        "x = a -/* c */-b;",
        "x = a +/**/+b /**/ - /**/ -c;",
        "f( \"s  s\" , 'q' ) ;\n\tg();",
    ];
    for input in inputs {
        let once = minify(input.as_bytes());
        assert_eq!(minify(&once), once, "input: {input:?}");
    }
}
