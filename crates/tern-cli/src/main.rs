mod cli;
mod commands;
mod style;

#[cfg(test)]
mod style_tests;

use cli::{MapParams, MinifyParams, QuoteParams, build_cli};

fn main() {
    env_logger::init();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("minify", m)) => {
            let params = MinifyParams::from_matches(m);
            commands::minify::run(params.into());
        }
        Some(("map", m)) => {
            let params = MapParams::from_matches(m);
            commands::map::run(params.into());
        }
        Some(("quote", m)) => {
            let params = QuoteParams::from_matches(m);
            commands::quote::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
