//! Outline and go-to-definition for `node-types.json` documents.
//!
//! Both work off the shared [`SchemaIndex`] and project descriptor offsets
//! through the document's own [`LineIndex`].

use std::collections::HashMap;
use std::sync::Arc;

use rowan::TextRange;
use serde::Serialize;
use tsq_core::{AnnotatedNode, LineIndex, Range, SchemaIndex};

use crate::diagnostics::serialize_span;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineSymbol {
    /// The node type, e.g. `identifier` or `(`.
    pub name: String,
    /// `Named` or `Anonymous`.
    pub detail: &'static str,
    /// Whole element object.
    pub range: Range,
    /// The `"type": ...` property.
    pub selection_range: Range,
}

/// One symbol per descriptor; a file with structural errors has no outline.
pub fn outline(index: &mut SchemaIndex, text: &str) -> Vec<OutlineSymbol> {
    let Ok(nodes) = index.get_or_compute(text) else {
        return Vec::new();
    };
    let line_index = LineIndex::new(text);
    nodes.iter().map(|node| outline_symbol(node, &line_index)).collect()
}

fn outline_symbol(node: &AnnotatedNode, line_index: &LineIndex) -> OutlineSymbol {
    OutlineSymbol {
        name: node.ty.value.clone(),
        detail: if node.named.value { "Named" } else { "Anonymous" },
        range: line_index.range(node.range()),
        selection_range: line_index.range(node.type_range()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    #[serde(serialize_with = "serialize_span")]
    pub span: TextRange,
    pub range: Range,
}

/// Maps node type names to their descriptors.
///
/// The table is derived from one index result and rebuilt only when a lookup
/// sees a different result allocation.
#[derive(Debug, Default)]
pub struct DefinitionTable {
    source: Option<Arc<[AnnotatedNode]>>,
    by_type: HashMap<String, usize>,
    generation: u64,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the table has been derived.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rebuilds from `nodes` unless it is the allocation already in use.
    /// Returns whether a rebuild happened.
    pub fn refresh(&mut self, nodes: &Arc<[AnnotatedNode]>) -> bool {
        if self
            .source
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, nodes))
        {
            return false;
        }

        self.by_type.clear();
        for (i, node) in nodes.iter().enumerate() {
            // later duplicates win
            self.by_type.insert(node.ty.value.clone(), i);
        }
        self.source = Some(Arc::clone(nodes));
        self.generation += 1;
        true
    }

    pub fn get(&self, ty: &str) -> Option<&AnnotatedNode> {
        let nodes = self.source.as_ref()?;
        nodes.get(*self.by_type.get(ty)?)
    }

    /// Definition of the word at `offset`: the full element that declares it.
    pub fn definition(&mut self, index: &mut SchemaIndex, text: &str, offset: usize) -> Option<Location> {
        let (_, word) = word_at(text, offset)?;
        let nodes = index.get_or_compute(text).ok()?;
        self.refresh(&nodes);
        let node = self.get(word)?;
        let line_index = LineIndex::new(text);
        Some(Location {
            span: node.range(),
            range: line_index.range(node.range()),
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word of alphanumerics and `_` touching `offset`, with its start offset.
pub fn word_at(text: &str, offset: usize) -> Option<(usize, &str)> {
    if offset > text.len() || !text.is_char_boundary(offset) {
        return None;
    }

    let start = text[..offset]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word_char(c))
        .last()
        .map_or(offset, |(i, _)| i);
    let end = text[offset..]
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(text.len(), |(i, _)| offset + i);

    (start < end).then(|| (start, &text[start..end]))
}
