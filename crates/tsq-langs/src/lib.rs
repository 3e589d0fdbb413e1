#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Built-in tree-sitter grammars.
//!
//! Grammars are linked in at build time, one cargo feature per language.
//! [`GrammarCache`] hands out one shared [`Grammar`] per [`LanguageId`].

use std::fmt;

pub use arborium_tree_sitter as tree_sitter;

use tree_sitter::{Language, Parser, Query, QueryError, QueryErrorKind, Tree};

pub mod builtin;
mod cache;


pub use builtin::{LanguageId, built_in};
pub use cache::GrammarCache;

#[derive(Debug, thiserror::Error)]
pub enum LangError {
    #[error("unsupported language `{0}`")]
    Unsupported(String),
    #[error("grammar for `{0}` is not built in")]
    NotBuiltIn(LanguageId),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("incompatible grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("parser produced no tree")]
    ParseFailed,
}

/// Query compilation failure, positioned in the query source.
///
/// `offset` is a byte offset into the compiled text, absent when the failure
/// is not tied to a location (grammar ABI mismatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCompileError {
    pub offset: Option<usize>,
    pub message: String,
}

impl fmt::Display for QueryCompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for QueryCompileError {}

impl From<QueryError> for QueryCompileError {
    fn from(err: QueryError) -> Self {
        let offset = Some(err.offset);
        // tree-sitter quotes the offending name
        let name = err.message.trim_matches('"');
        let (offset, message) = match err.kind {
            QueryErrorKind::Syntax => (offset, "Invalid syntax".to_owned()),
            QueryErrorKind::NodeType => (offset, format!("Invalid node type `{name}`")),
            QueryErrorKind::Field => (offset, format!("Invalid field name `{name}`")),
            QueryErrorKind::Capture => (offset, format!("Invalid capture name `{name}`")),
            QueryErrorKind::Predicate => (offset, format!("Invalid predicate: {}", err.message)),
            QueryErrorKind::Structure => (offset, "Impossible pattern".to_owned()),
            QueryErrorKind::Language => (None, err.message),
            #[allow(unreachable_patterns)]
            _ => (offset, err.message),
        };
        Self { offset, message }
    }
}

/// Loaded grammar: parse documents and compile queries for one language.
#[derive(Debug)]
pub struct Grammar {
    id: LanguageId,
    language: Language,
}

impl Grammar {
    pub fn load(id: LanguageId) -> Result<Self, LangError> {
        let language = id.ts_language().ok_or(LangError::NotBuiltIn(id))?;
        Ok(Self { id, language })
    }

    pub fn id(&self) -> LanguageId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn parse(&self, text: &str) -> Result<Tree, GrammarError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        parser.parse(text, None).ok_or(GrammarError::ParseFailed)
    }

    pub fn compile_query(&self, source: &str) -> Result<Query, QueryCompileError> {
        Query::new(&self.language, source).map_err(QueryCompileError::from)
    }
}
