use indoc::indoc;
use tern_core::Universe;

use crate::test_utils::{TestUniverse, text};
use crate::{Config, UnitContext};

#[test]
fn printf_indents_and_terminates_lines() {
    let u = TestUniverse::new();
    let mut unit = u.unit();

    unit.printf(format_args!("var {} = {};", "x", 1));
    unit.indent(|unit| {
        unit.printf(format_args!("if (x) {{"));
        unit.indent(|unit| unit.printf(format_args!("y();")));
        unit.printf(format_args!("}}"));
    });

    assert_eq!(text(unit.output()), "var x = 1;\n\tif (x) {\n\t\ty();\n\t}\n");
}

#[test]
fn write_is_raw() {
    let u = TestUniverse::new();
    let mut unit = u.unit();
    unit.indent(|unit| unit.write("a"));
    unit.write(b"b");
    assert_eq!(unit.output(), b"ab");
}

#[test]
fn print_cond_picks_branch() {
    let u = TestUniverse::new();
    let mut unit = u.unit();
    unit.print_cond(true, "yes();", "no();");
    unit.print_cond(false, "yes();", "no();");
    unit.print_cond(false, "f(/* x */);", "g();");
    assert_eq!(
        text(unit.output()),
        "yes();\n/* yes(); */ no();\n/* f(/* x <star>/); */ g();\n"
    );
}

#[test]
fn position_marker_precedes_next_write() {
    let u = TestUniverse::new();
    let mut unit = u.unit();
    unit.set_pos(0x0102_0304);
    unit.write("a");
    unit.write("b");
    assert_eq!(unit.output(), b"\x08\x01\x02\x03\x04ab");
}

#[test]
fn last_position_wins_before_a_write() {
    let u = TestUniverse::new();
    let mut unit = u.unit();
    unit.set_pos(1);
    unit.set_pos(2);
    unit.printf(format_args!("x;"));
    unit.set_pos(3);
    unit.printf(format_args!("y;"));
    assert_eq!(text(unit.output()), "<@2>x;\n<@3>y;\n");
}

#[test]
fn positions_can_be_disabled() {
    let u = Universe::new("p");
    let mut unit = UnitContext::new(&u, Config::new().positions(false));
    unit.set_pos(7);
    unit.write("a");
    assert_eq!(unit.output(), b"a");
}

#[test]
fn catch_output_returns_captured_and_restores() {
    let u = TestUniverse::new();
    let mut unit = u.unit();
    unit.printf(format_args!("before;"));

    let caught = unit.catch_output(1, |unit| {
        unit.printf(format_args!("inner;"));
    });

    unit.printf(format_args!("after;"));
    assert_eq!(text(&caught), "\tinner;\n");
    assert_eq!(text(unit.output()), "before;\nafter;\n");
}

#[test]
fn catch_output_flushes_trailing_position() {
    let u = TestUniverse::new();
    let mut unit = u.unit();
    let caught = unit.catch_output(0, |unit| {
        unit.write("x");
        unit.set_pos(9);
    });
    assert_eq!(text(&caught), "x<@9>");
    assert!(unit.output().is_empty());
}

#[test]
fn delayed_output_follows_next_line() {
    let u = TestUniverse::new();
    let mut unit = u.unit();
    unit.delayed(|unit| unit.printf(format_args!("cleanup();")));
    unit.printf(format_args!("body();"));
    unit.printf(format_args!("rest();"));

    assert_eq!(
        text(unit.output()),
        indoc! {"
            body();
            cleanup();
            rest();
        "}
    );
}

#[test]
fn nested_frames_have_separate_output() {
    let u = TestUniverse::new();
    let mut unit = u.unit();
    unit.printf(format_args!("outer;"));
    let ((), func) = unit.with_func(|unit| {
        unit.indent(|unit| unit.printf(format_args!("inner;")));
    });
    assert_eq!(text(&func.code), "\tinner;\n");
    assert_eq!(text(unit.output()), "outer;\n");
}

#[test]
fn nested_frame_inherits_indentation() {
    let u = TestUniverse::new();
    let mut unit = u.unit();
    let ((), func) = unit.indent(|unit| {
        unit.with_func(|unit| unit.printf(format_args!("x;")))
    });
    assert_eq!(text(&func.code), "\tx;\n");
}
