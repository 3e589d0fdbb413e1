#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Language-independent building blocks for tsq.
//!
//! - [`json`]: offset-preserving JSON syntax tree
//! - [`node_types`]: descriptor extraction from tree-sitter `node-types.json`
//! - [`SchemaIndex`]: text-keyed LRU cache over descriptor extraction
//! - [`LineIndex`]: byte offset ↔ editor position mapping

pub mod json;
pub mod line_index;
pub mod node_types;

mod index;

#[cfg(test)]
mod line_index_tests;
#[cfg(test)]
mod node_types_tests;

pub use index::{CacheStats, DEFAULT_CAPACITY, IndexResult, SchemaIndex};
pub use json::{JsonError, JsonErrorKind};
pub use line_index::{LineIndex, Position, Range};
pub use node_types::{Annotated, AnnotatedNode, SchemaError, index_node_types};
