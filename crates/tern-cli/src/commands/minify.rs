use std::path::PathBuf;

use super::{CommandError, fail, read_input, write_output};

pub struct MinifyArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

pub fn run(args: MinifyArgs) {
    if let Err(err) = execute(&args) {
        fail(err);
    }
}

pub fn execute(args: &MinifyArgs) -> Result<(), CommandError> {
    let stream = read_input(&args.input)?;
    let minified = tern_compiler::post::minify(&stream);
    log::info!("minified {} -> {} bytes", stream.len(), minified.len());
    write_output(args.output.as_deref(), &minified)
}
