//! tern compiler: type-directed code emission for a prototype-based target.
//!
//! This crate is the layer between the front-end's typed program and the
//! emitted target text:
//! - `emit` - byte-stream writer, indentation, captured and delayed output
//! - `naming` - collision-free and minified identifier allocation
//! - `descriptor` - canonical runtime type descriptors
//! - `lower` - zero values, map keys, externalization, selectors, call arguments
//! - `post` - literal encoding, minification, index guards, marker extraction
//! - `diagnostics` - soft errors collected for batch reporting

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod emit;
mod invariants;
pub mod lower;
pub mod naming;
pub mod post;
mod translate;
mod unit;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod emit_tests;

pub use config::Config;
pub use diagnostics::{DiagnosticKind, Diagnostics, SoftError, SourceReport, Span};
pub use translate::{ExprTranslator, Operand};
pub use unit::{Dependency, FuncOutput, UnitContext, UnitOutput};

/// Errors surfaced by a finished unit or by stream post-processing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The unit recorded soft errors; none of its output is published.
    #[error("unit compilation failed with {} errors", .0.len())]
    UnitFailed(Diagnostics),

    /// A debug marker was cut short by the end of the stream.
    #[error("truncated position marker at byte {0}")]
    TruncatedMarker(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
