//! Offset-preserving JSON syntax tree.
//!
//! Unlike a value deserializer, every node remembers the byte span it was
//! parsed from, so consumers can point back into the source document.
//!
//! ```
//! use tsq_core::json::{self, JsonKind};
//!
//! let root = json::parse_tree(r#"[{"type": "identifier"}]"#).unwrap();
//! assert_eq!(root.kind, JsonKind::Array);
//! assert_eq!(root.children[0].offset, 1);
//! ```

mod lexer;
mod parser;

use rowan::{TextRange, TextSize};

pub use lexer::{Token, TokenKind, lex, unescape};

/// Maximum nesting of arrays and objects.
pub const MAX_DEPTH: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Object,
    Array,
    /// `"key": value`. Children are `[key, value]`.
    Property,
    String,
    Number,
    Boolean,
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsonScalar {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsonNode {
    pub kind: JsonKind,
    pub offset: usize,
    pub length: usize,
    pub children: Vec<JsonNode>,
    /// Decoded value for scalar nodes, `None` for containers and properties.
    pub value: Option<JsonScalar>,
}

impl JsonNode {
    pub(crate) fn container(kind: JsonKind, offset: usize, end: usize, children: Vec<Self>) -> Self {
        Self {
            kind,
            offset,
            length: end - offset,
            children,
            value: None,
        }
    }

    pub(crate) fn scalar(kind: JsonKind, span: TextRange, value: JsonScalar) -> Self {
        Self {
            kind,
            offset: span.start().into(),
            length: span.len().into(),
            children: Vec::new(),
            value: Some(value),
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn range(&self) -> TextRange {
        TextRange::at(
            TextSize::from(self.offset as u32),
            TextSize::from(self.length as u32),
        )
    }

    /// First property of an object whose key equals `key`.
    pub fn property(&self, key: &str) -> Option<&JsonNode> {
        if self.kind != JsonKind::Object {
            return None;
        }
        self.children
            .iter()
            .find(|prop| prop.key().and_then(JsonNode::as_str) == Some(key))
    }

    /// Key node of a property.
    pub fn key(&self) -> Option<&JsonNode> {
        match self.kind {
            JsonKind::Property => self.children.first(),
            _ => None,
        }
    }

    /// Value node of a property.
    pub fn value_node(&self) -> Option<&JsonNode> {
        match self.kind {
            JsonKind::Property => self.children.get(1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Some(JsonScalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Some(JsonScalar::Boolean(b)) => Some(b),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JsonErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid character")]
    InvalidCharacter,
    #[error("expected a value")]
    ExpectedValue,
    #[error("expected `:`")]
    ExpectedColon,
    #[error("expected `,` or `{0}`")]
    ExpectedCommaOr(char),
    #[error("expected a property name")]
    ExpectedPropertyName,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("unexpected content after the root value")]
    TrailingContent,
    #[error("nesting too deep")]
    TooDeep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct JsonError {
    pub kind: JsonErrorKind,
    pub offset: usize,
}

impl JsonError {
    pub(crate) fn new(kind: JsonErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// Parses a complete JSON document into an offset-annotated tree.
pub fn parse_tree(source: &str) -> Result<JsonNode, JsonError> {
    parser::Parser::new(source).parse()
}
