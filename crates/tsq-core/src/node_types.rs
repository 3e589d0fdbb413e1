//! Descriptor extraction from tree-sitter `node-types.json` files.
//!
//! Only `type` and `named` are extracted from each element; `fields`,
//! `children` and `subtypes` are left alone. Elements that lack either
//! property, or carry it with the wrong value type, are dropped without
//! failing the whole file.

use rowan::{TextRange, TextSize};
use serde::Serialize;

use crate::json::{self, JsonError, JsonKind, JsonNode};

/// A value together with the byte span of the property it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotated<T> {
    pub value: T,
    pub offset: usize,
    pub length: usize,
}

impl<T> Annotated<T> {
    pub fn range(&self) -> TextRange {
        span(self.offset, self.length)
    }
}

/// One element of a node-types array.
///
/// `offset`/`length` span the whole element object. The spans of `ty` and
/// `named` cover the complete `"key": value` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedNode {
    #[serde(rename = "type")]
    pub ty: Annotated<String>,
    pub named: Annotated<bool>,
    pub offset: usize,
    pub length: usize,
}

impl AnnotatedNode {
    pub fn range(&self) -> TextRange {
        span(self.offset, self.length)
    }

    pub fn type_range(&self) -> TextRange {
        self.ty.range()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid JSON: {0}")]
    Json(#[from] JsonError),
    #[error("root node must be an array")]
    RootNotArray,
    #[error("root array has no elements")]
    EmptyArray,
}

/// Extracts one descriptor per well-formed element, in source order.
pub fn index_node_types(text: &str) -> Result<Vec<AnnotatedNode>, SchemaError> {
    let root = json::parse_tree(text)?;
    if root.kind != JsonKind::Array {
        return Err(SchemaError::RootNotArray);
    }
    if root.children.is_empty() {
        return Err(SchemaError::EmptyArray);
    }

    let mut nodes = Vec::with_capacity(root.children.len());
    for element in &root.children {
        match annotate(element) {
            Some(node) => nodes.push(node),
            None => tracing::trace!(offset = element.offset, "dropping malformed node-types element"),
        }
    }
    Ok(nodes)
}

fn annotate(element: &JsonNode) -> Option<AnnotatedNode> {
    let type_prop = element.property("type")?;
    let named_prop = element.property("named")?;
    let ty = type_prop.value_node()?.as_str()?;
    let named = named_prop.value_node()?.as_bool()?;

    Some(AnnotatedNode {
        ty: Annotated {
            value: ty.to_owned(),
            offset: type_prop.offset,
            length: type_prop.length,
        },
        named: Annotated {
            value: named,
            offset: named_prop.offset,
            length: named_prop.length,
        },
        offset: element.offset,
        length: element.length,
    })
}

fn span(offset: usize, length: usize) -> TextRange {
    TextRange::at(TextSize::from(offset as u32), TextSize::from(length as u32))
}
