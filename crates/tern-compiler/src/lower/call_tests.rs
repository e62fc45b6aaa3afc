use indoc::indoc;
use tern_core::{BasicKind, Constant, Signature, StructType, Type};

use crate::Operand;
use crate::test_utils::{EchoTranslator, TestUniverse, text};

fn int() -> Type {
    Type::basic(BasicKind::Int)
}

fn string() -> Type {
    Type::basic(BasicKind::String)
}

#[test]
fn one_argument_per_parameter() {
    let mut u = TestUniverse::new();
    let args = vec![u.operand(int()), u.operand(string())];
    let mut unit = u.unit();

    let sig = Signature::new(vec![int(), string()], vec![]);
    let out = unit.translate_args(&mut EchoTranslator, &sig, &args, false, false);
    assert_eq!(out, vec!["e0", "e1"]);
    assert!(unit.output().is_empty());
}

#[test]
fn cloning_is_forwarded() {
    let mut u = TestUniverse::new();
    let point = u.named("Point", Type::Struct(StructType::default()));
    let args = vec![u.operand(point.clone())];
    let mut unit = u.unit();

    let sig = Signature::new(vec![point], vec![]);
    let out = unit.translate_args(&mut EchoTranslator, &sig, &args, false, true);
    assert_eq!(out, vec!["$clone(e0, Point)"]);
}

#[test]
fn tuple_argument_is_spilled() {
    let mut u = TestUniverse::new();
    let args = vec![u.operand(Type::Tuple(vec![int(), string()]))];
    let mut unit = u.unit();

    let sig = Signature::new(vec![int(), string()], vec![]);
    let out = unit.translate_args(&mut EchoTranslator, &sig, &args, false, false);
    assert_eq!(out, vec!["_tuple[0]", "_tuple[1]"]);
    assert_eq!(text(unit.output()), "_tuple = e0;\n");
}

#[test]
fn blocking_argument_preserves_order() {
    let mut u = TestUniverse::new();
    let args = vec![
        u.operand(int()),
        u.blocking(int()),
        u.constant(int(), Constant::Int(3)),
    ];
    let mut unit = u.unit();

    let sig = Signature::new(vec![int(), int(), int()], vec![]);
    let out = unit.translate_args(&mut EchoTranslator, &sig, &args, false, false);
    assert_eq!(out, vec!["_arg", "_arg$1", "e2"]);
    assert_eq!(
        text(unit.output()),
        indoc! {"
            _arg = e0;
            _arg$1 = e1;
        "}
    );
}

#[test]
fn leading_blocking_argument_needs_no_temporaries() {
    let mut u = TestUniverse::new();
    let args = vec![u.blocking(int()), u.operand(int())];
    let mut unit = u.unit();

    let sig = Signature::new(vec![int(), int()], vec![]);
    let out = unit.translate_args(&mut EchoTranslator, &sig, &args, false, false);
    assert_eq!(out, vec!["e0", "e1"]);
    assert!(unit.output().is_empty());
}

#[test]
fn variadic_tail_is_packed() {
    let mut u = TestUniverse::new();
    let args = vec![u.operand(string()), u.operand(int()), u.operand(int())];
    let mut unit = u.unit();

    let sig = Signature::new(vec![string(), Type::slice(int())], vec![]).variadic();
    let out = unit.translate_args(&mut EchoTranslator, &sig, &args, false, false);
    assert_eq!(out, vec!["e0", "new sliceType([e1, e2])"]);

    let out = unit.translate_args(&mut EchoTranslator, &sig, &args[..1], false, false);
    assert_eq!(out, vec!["e0", "new sliceType([])"]);
}

#[test]
fn spread_call_passes_slice_through() {
    let mut u = TestUniverse::new();
    let args = vec![u.operand(string()), u.operand(Type::slice(int()))];
    let mut unit = u.unit();

    let sig = Signature::new(vec![string(), Type::slice(int())], vec![]).variadic();
    let out = unit.translate_args(&mut EchoTranslator, &sig, &args, true, false);
    assert_eq!(out, vec!["e0", "e1"]);
}

#[test]
fn spilled_tuple_feeds_variadic() {
    let mut u = TestUniverse::new();
    let args = vec![u.operand(Type::Tuple(vec![int(), int(), int()]))];
    let mut unit = u.unit();

    let sig = Signature::new(vec![Type::slice(int())], vec![]).variadic();
    let out = unit.translate_args(&mut EchoTranslator, &sig, &args, false, false);
    assert_eq!(out, vec!["new sliceType([_tuple[0], _tuple[1], _tuple[2]])"]);
}

#[test]
fn synthetic_operands_are_spilled_like_expressions() {
    let mut u = TestUniverse::new();
    let blocking = u.blocking(int());
    let mut unit = u.unit();

    let args = vec![Operand::synthetic("cached", int()), blocking];
    let sig = Signature::new(vec![int(), int()], vec![]);
    let out = unit.translate_args(&mut EchoTranslator, &sig, &args, false, false);
    assert_eq!(out, vec!["_arg", "_arg$1"]);
    assert_eq!(text(unit.output()), "_arg = cached;\n_arg$1 = e0;\n");
}
