//! tsq: validation and navigation for tree-sitter queries.
//!
//! # Example
//!
//! ```
//! use tsq_lib::DiagnosticsEngine;
//!
//! let source = ";; python\n(function_definition name: (identifier) @name)\n";
//!
//! let mut engine = DiagnosticsEngine::new();
//! let diagnostics = engine.check_document("scm", source).unwrap().unwrap_or_default();
//! eprintln!("{}", diagnostics.printer().source(source).render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod embedded;
pub mod engine;
pub mod navigation;
pub mod query_file;
pub mod service;
pub mod traverse;
pub mod tree_printer;

#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod traverse_tests;

pub use diagnostics::{Diagnostic, Diagnostics, DiagnosticsPrinter, Severity};
pub use engine::{DiagnosticsEngine, DocumentKind, sanitize_message};
pub use navigation::{DefinitionTable, Location, OutlineSymbol, outline, word_at};
pub use service::{DiagnosticsService, PassTicket};
pub use traverse::traverse;
pub use tree_printer::{DEFAULT_INDENT_WIDTH, PrintOptions, print_tree};

use tsq_langs::{LangError, LanguageId, QueryCompileError};

/// Failures that abort a pass. Query compile errors in the checked document
/// are not among them; those become diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lang(#[from] LangError),

    #[error("embedded site query failed to compile for `{language}`: {source}")]
    HostQuery {
        language: LanguageId,
        source: QueryCompileError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
