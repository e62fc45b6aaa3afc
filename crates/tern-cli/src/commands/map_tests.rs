use std::fs;

use tern_compiler::post::extract_positions;
use super::map::{MapArgs, execute, render_table};
use crate::style::Style;

const STREAM: &[u8] = b"\x08\x00\x00\x00\x0cf();\ng(\x08\x00\x00\x00\x20x);\n";

#[test]
fn table_lists_mappings() {
    let map = extract_positions(STREAM).unwrap();
    insta::assert_snapshot!(render_table(&map, Style::PLAIN), @r"
    f();
    g(x);

    2 mappings
    1:1 -> 12
    2:3 -> 32
    ");
}

#[test]
fn json_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("out.bin");
    let output = dir.path().join("map.json");
    fs::write(&input, STREAM).unwrap();

    execute(&MapArgs {
        input,
        output: Some(output.clone()),
        json: true,
        color: false,
    })
    .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
    assert_eq!(json["code"], "f();\ng(x);\n");
    assert_eq!(json["mappings"][1]["line"], 1);
    assert_eq!(json["mappings"][1]["column"], 2);
    assert_eq!(json["mappings"][1]["offset"], 32);
}

#[test]
fn truncated_marker_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.bin");
    fs::write(&input, b"x;\x08\x00").unwrap();

    let err = execute(&MapArgs {
        input,
        output: None,
        json: false,
        color: false,
    })
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"truncated position marker at byte 2");
}

#[test]
fn colored_table_styles_offsets() {
    let map = extract_positions(STREAM).unwrap();
    let table = render_table(&map, Style::new(true));
    assert!(table.contains("\x1b[34m12\x1b[0m"));
    assert!(table.starts_with("f();\n"));
}
