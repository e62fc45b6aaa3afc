use crate::{BasicKind, ChanDir, Field, InterfaceType, Method, Signature, StructType, Type};

#[test]
fn aliases_fold_into_sized_kinds() {
    assert_eq!(BasicKind::from_name("byte"), Some(BasicKind::Uint8));
    assert_eq!(BasicKind::from_name("rune"), Some(BasicKind::Int32));
    assert_eq!(BasicKind::from_name("uint8"), Some(BasicKind::Uint8));
    assert_eq!(BasicKind::from_name("bogus"), None);
}

#[test]
fn name_roundtrips_through_from_name() {
    for kind in [
        BasicKind::Bool,
        BasicKind::Int64,
        BasicKind::Uintptr,
        BasicKind::Complex64,
        BasicKind::UnsafePointer,
        BasicKind::UntypedNil,
    ] {
        assert_eq!(BasicKind::from_name(kind.name()), Some(kind));
    }
}

#[test]
fn kind_classes() {
    assert!(BasicKind::Int64.is_64bit());
    assert!(BasicKind::Uint64.is_64bit());
    assert!(!BasicKind::Int.is_64bit());
    assert!(BasicKind::Uintptr.is_unsigned());
    assert!(BasicKind::UntypedRune.is_integer());
    assert!(BasicKind::Complex64.is_numeric());
    assert!(!BasicKind::String.is_numeric());
    assert!(!BasicKind::UntypedNil.is_numeric());
    assert!(BasicKind::UntypedFloat.is_float());
}

#[test]
fn untyped_defaults() {
    assert_eq!(BasicKind::UntypedRune.default_kind(), BasicKind::Int32);
    assert_eq!(BasicKind::UntypedFloat.default_kind(), BasicKind::Float64);
    assert_eq!(BasicKind::UntypedNil.default_kind(), BasicKind::UntypedNil);
    assert_eq!(BasicKind::Int8.default_kind(), BasicKind::Int8);
}

#[test]
fn structural_equality() {
    let a = Type::map(Type::Basic(BasicKind::String), Type::slice(Type::Basic(BasicKind::Int)));
    let b = Type::map(Type::Basic(BasicKind::String), Type::slice(Type::Basic(BasicKind::Int)));
    assert_eq!(a, b);

    let c = Type::chan(Type::Basic(BasicKind::Int), ChanDir::SendOnly);
    let d = Type::chan(Type::Basic(BasicKind::Int), ChanDir::RecvOnly);
    assert_ne!(c, d);
}

#[test]
fn struct_identity_includes_tags() {
    let plain = StructType::new("p", vec![Field::new("X", Type::Basic(BasicKind::Int))]);
    let tagged = StructType::new(
        "p",
        vec![Field::new("X", Type::Basic(BasicKind::Int)).tag(r#"js:"x""#)],
    );
    assert_ne!(Type::Struct(plain), Type::Struct(tagged));
}

#[test]
fn exported_struct_identity_ignores_package() {
    use std::collections::HashSet;

    let x = || vec![Field::new("X", Type::basic(BasicKind::Int))];
    let a = Type::Struct(StructType::new("example.com/a", x()));
    let b = Type::Struct(StructType::new("example.com/b", x()));
    assert_eq!(a, b);
    assert_eq!(HashSet::from([a, b]).len(), 1);
}

#[test]
fn unexported_members_qualify_identity() {
    let y = || vec![Field::new("y", Type::basic(BasicKind::Int))];
    assert_ne!(
        StructType::new("example.com/a", y()),
        StructType::new("example.com/b", y())
    );
    assert_eq!(
        StructType::new("example.com/a", y()),
        StructType::new("example.com/a", y())
    );

    let iface = |pkg: &str, name: &str| InterfaceType {
        pkg: pkg.to_string(),
        methods: vec![Method {
            name: name.to_string(),
            sig: Signature::default(),
        }],
    };
    assert_eq!(iface("example.com/a", "Close"), iface("example.com/b", "Close"));
    assert_ne!(iface("example.com/a", "close"), iface("example.com/b", "close"));
}
