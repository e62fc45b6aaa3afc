//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tern")
        .about("Inspect and post-process emitted code streams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(minify_command())
        .subcommand(map_command())
        .subcommand(quote_command())
}

/// Strip insignificant whitespace and comments from an emitted stream.
pub fn minify_command() -> Command {
    Command::new("minify")
        .about("Minify an emitted code stream, keeping position markers")
        .after_help(
            r#"EXAMPLES:
  tern minify out.bin                 # print minified stream
  tern minify out.bin -o out.min.bin  # write to a file
  cat out.bin | tern minify           # read stdin"#,
        )
        .arg(input_arg())
        .arg(output_arg())
}

/// Extract position markers into a mapping table.
pub fn map_command() -> Command {
    Command::new("map")
        .about("Show the positions recorded in an emitted code stream")
        .after_help(
            r#"EXAMPLES:
  tern map out.bin                    # clean code and mapping table
  tern map out.bin --json             # {code, mappings}"#,
        )
        .arg(input_arg())
        .arg(output_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Encode text as a target string literal.
pub fn quote_command() -> Command {
    Command::new("quote")
        .about("Print the string literal encoding of TEXT")
        .arg(text_arg())
        .arg(color_arg())
}
