//! Position-marker extraction.
//!
//! Turns an emitted byte stream into clean text plus the generated
//! location each source position was attached to.

use serde::Serialize;
use tern_core::Pos;

use crate::emit::{MARKER_LEN, POS_MARKER};
use crate::{Error, Result};

/// A source position attached to a generated location.
///
/// Lines and columns are zero-based; columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mapping {
    pub line: u32,
    pub column: u32,
    pub offset: Pos,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceMap {
    /// The stream with every marker removed.
    pub code: String,
    pub mappings: Vec<Mapping>,
}

/// Split a stream into marker-free text and its position mappings.
pub fn extract_positions(stream: &[u8]) -> Result<SourceMap> {
    let mut code = Vec::with_capacity(stream.len());
    let mut mappings = Vec::new();
    let mut line = 0u32;
    let mut column = 0u32;
    let mut i = 0;

    while i < stream.len() {
        let b = stream[i];
        if b == POS_MARKER {
            let bytes: [u8; 4] = stream
                .get(i + 1..i + MARKER_LEN)
                .and_then(|s| s.try_into().ok())
                .ok_or(Error::TruncatedMarker(i))?;
            mappings.push(Mapping {
                line,
                column,
                offset: Pos::from_be_bytes(bytes),
            });
            i += MARKER_LEN;
            continue;
        }

        code.push(b);
        if b == b'\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
        i += 1;
    }

    Ok(SourceMap {
        code: String::from_utf8_lossy(&code).into_owned(),
        mappings,
    })
}
