//! Diagnostics produced by query validation.

mod printer;


use std::fmt;

use rowan::TextRange;
use serde::{Serialize, Serializer};
use tsq_core::{LineIndex, Range};

pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Byte span in the document.
    #[serde(serialize_with = "serialize_span")]
    pub span: TextRange,
    /// Editor range (UTF-16 columns) of `span`.
    pub range: Range,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn error(span: TextRange, index: &LineIndex, message: impl Into<String>) -> Self {
        Self {
            span,
            range: index.range(span),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Error spanning from `start` to the end of its line.
    pub fn to_line_end(start: usize, index: &LineIndex, message: impl Into<String>) -> Self {
        let start = start.min(index.len());
        let end = index.line_end_of(start).max(start);
        Self::error(text_range(start, end), index, message)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.severity,
            self.range.start.line + 1,
            self.range.start.character + 1,
            self.message
        )
    }
}

/// Per-document diagnostics, in the order they were reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub(crate) fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new((start as u32).into(), (end as u32).into())
}

pub(crate) fn serialize_span<S: Serializer>(span: &TextRange, serializer: S) -> Result<S::Ok, S::Error> {
    (u32::from(span.start())..u32::from(span.end())).serialize(serializer)
}
