//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::map::MapArgs;
use crate::commands::minify::MinifyArgs;
use crate::commands::quote::QuoteArgs;

pub struct MinifyParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

impl MinifyParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: input_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<MinifyParams> for MinifyArgs {
    fn from(p: MinifyParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
        }
    }
}

pub struct MapParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub color: ColorChoice,
}

impl MapParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: input_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<MapParams> for MapArgs {
    fn from(p: MapParams) -> Self {
        // Never write escape codes into a file.
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            input: p.input,
            output: p.output,
            json: p.json,
            color,
        }
    }
}

pub struct QuoteParams {
    pub text: String,
    pub color: ColorChoice,
}

impl QuoteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            text: m.get_one::<String>("text").cloned().unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<QuoteParams> for QuoteArgs {
    fn from(p: QuoteParams) -> Self {
        Self {
            text: p.text,
            color: p.color.should_colorize(),
        }
    }
}

fn input_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
