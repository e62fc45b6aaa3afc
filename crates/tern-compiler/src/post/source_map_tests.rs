use super::{Mapping, extract_positions};
use crate::Error;

#[test]
fn strips_markers_and_records_locations() {
    let stream = b"\x08\x00\x00\x00\x0ax = 1;\n\ty = \x08\x00\x00\x01\x00f();\n";
    let map = extract_positions(stream).unwrap();

    assert_eq!(map.code, "x = 1;\n\ty = f();\n");
    assert_eq!(
        map.mappings,
        vec![
            Mapping {
                line: 0,
                column: 0,
                offset: 10
            },
            Mapping {
                line: 1,
                column: 5,
                offset: 256
            },
        ]
    );
}

#[test]
fn stream_without_markers() {
    let map = extract_positions(b"plain();").unwrap();
    assert_eq!(map.code, "plain();");
    assert!(map.mappings.is_empty());
}

#[test]
fn truncated_marker_is_an_error() {
    let err = extract_positions(b"abc\x08\x00\x01").unwrap_err();
    assert!(matches!(err, Error::TruncatedMarker(3)));
    insta::assert_snapshot!(err.to_string(), @"truncated position marker at byte 3");
}

#[test]
fn serializes_to_json() {
    let map = extract_positions(b"\x08\x00\x00\x00\x07a;").unwrap();
    let json = serde_json::to_string(&map).unwrap();
    insta::assert_snapshot!(json, @r#"{"code":"a;","mappings":[{"line":0,"column":0,"offset":7}]}"#);
}
