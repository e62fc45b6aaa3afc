//! Post-processing of emitted text.

mod literal;
mod minify;
mod range_check;
mod source_map;

#[cfg(test)]
mod minify_tests;
#[cfg(test)]
mod source_map_tests;

pub use literal::encode_string;
pub use minify::minify;
pub use range_check::range_check;
pub use source_map::{Mapping, SourceMap, extract_positions};
