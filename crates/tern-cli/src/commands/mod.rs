pub mod map;
pub mod minify;
pub mod quote;

#[cfg(test)]
mod map_tests;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Stream(#[from] tern_compiler::Error),

    #[error("cannot serialize: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a whole file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>, CommandError> {
    let result = if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes).map(|_| bytes)
    } else {
        std::fs::read(path)
    };
    let bytes = result.map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Write to a file, or stdout when no file is given.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), CommandError> {
    let (result, shown) = match path {
        Some(path) => (std::fs::write(path, bytes), path),
        None => (std::io::stdout().write_all(bytes), Path::new("<stdout>")),
    };
    result.map_err(|source| CommandError::Write {
        path: shown.to_path_buf(),
        source,
    })
}

/// Print the error and exit with status 1.
pub fn fail(err: CommandError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
