use std::fmt::Write as _;
use std::path::PathBuf;

use tern_compiler::post::{SourceMap, extract_positions};

use super::{CommandError, fail, read_input, write_output};
use crate::style::{Role, Style};

pub struct MapArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: MapArgs) {
    if let Err(err) = execute(&args) {
        fail(err);
    }
}

pub fn execute(args: &MapArgs) -> Result<(), CommandError> {
    let stream = read_input(&args.input)?;
    let map = extract_positions(&stream)?;
    let rendered = if args.json {
        let mut json = serde_json::to_string_pretty(&map)?;
        json.push('\n');
        json
    } else {
        render_table(&map, Style::new(args.color))
    };
    write_output(args.output.as_deref(), rendered.as_bytes())
}

/// Clean code followed by one `line:column -> offset` row per mapping.
pub fn render_table(map: &SourceMap, style: Style) -> String {
    let mut out = map.code.clone();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');

    let count = format!("{} mappings", map.mappings.len());
    let _ = writeln!(out, "{}", style.paint(Role::Meta, count));
    for m in &map.mappings {
        let coords = format!("{}:{}", m.line + 1, m.column + 1);
        let _ = writeln!(
            out,
            "{} -> {}",
            style.paint(Role::Meta, coords),
            style.paint(Role::Offset, m.offset)
        );
    }
    out
}
