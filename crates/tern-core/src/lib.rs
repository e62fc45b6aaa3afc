#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Front-end data model for tern.
//!
//! The code generator never parses or type-checks. It consumes:
//! - **Types**: a closed variant over the source language's type shapes
//! - **Objects**: declared names with their package and scope
//! - **Oracles**: read-only fact tables (`TypeOracle`, `EscapeOracle`)

mod object;
mod oracle;
pub mod tag;
mod types;

#[cfg(test)]
mod types_tests;

pub use object::{Constant, ExprId, NodeId, ObjId, ObjKind, Object, Pos, is_exported};
pub use oracle::{EscapeOracle, TypeOracle, Universe};
pub use tag::TagError;
pub use types::{
    BasicKind, ChanDir, Field, InterfaceType, Method, Signature, StructType, Type,
};
