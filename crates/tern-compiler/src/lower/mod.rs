//! Expression lowering helpers.
//!
//! Small type-directed rewrites the statement and expression translators
//! share: zero values, map keys, externalization, selector paths, call
//! arguments and captured-variable boxing.

mod call;
mod escape;
mod selection;
mod values;

#[cfg(test)]
mod call_tests;

pub use escape::EscapeSnapshot;
pub use selection::{Selection, SelectionPath};
pub use values::{float_key, js_number_to_string};
