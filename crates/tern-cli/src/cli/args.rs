//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Emitted stream to read (positional, `-` for stdin).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .default_value("-")
        .help("Emitted code stream (`-` reads stdin)")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write to FILE instead of stdout")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

/// Text to encode (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .required(true)
        .help("Text to encode")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
