//! Per-document diagnostics state driven by an editor host.
//!
//! Every edit or focus change runs a full pass. A pass captures the document
//! version when it starts; its result is published only if the document is
//! still open at that same version. Versions come from one service-wide
//! counter, so reopening a document never reuses a version.

use std::collections::HashMap;

use crate::Result;
use crate::diagnostics::Diagnostics;
use crate::engine::DiagnosticsEngine;

#[derive(Debug)]
struct Document {
    language_id: String,
    text: String,
    version: u64,
    published: Option<Diagnostics>,
}

/// Identifies the document state a pass was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassTicket {
    pub uri: String,
    pub version: u64,
}

#[derive(Debug, Default)]
pub struct DiagnosticsService {
    engine: DiagnosticsEngine,
    documents: HashMap<String, Document>,
    next_version: u64,
}

impl DiagnosticsService {
    pub fn new(engine: DiagnosticsEngine) -> Self {
        Self {
            engine,
            documents: HashMap::new(),
            next_version: 0,
        }
    }

    pub fn engine(&self) -> &DiagnosticsEngine {
        &self.engine
    }

    /// Opens (or reopens) a document. Reopening replaces the previous state.
    pub fn open(&mut self, uri: &str, language_id: &str, text: impl Into<String>) {
        let version = self.bump_version();
        self.documents.insert(
            uri.to_owned(),
            Document {
                language_id: language_id.to_owned(),
                text: text.into(),
                version,
                published: None,
            },
        );
        self.run_pass(uri);
    }

    /// Replaces the text of an open document. Unknown documents are ignored.
    pub fn change(&mut self, uri: &str, text: impl Into<String>) {
        if !self.documents.contains_key(uri) {
            return;
        }
        let version = self.bump_version();
        if let Some(doc) = self.documents.get_mut(uri) {
            doc.text = text.into();
            doc.version = version;
        }
        self.run_pass(uri);
    }

    /// Re-runs a pass on the current text.
    pub fn focus(&mut self, uri: &str) {
        self.run_pass(uri);
    }

    /// Drops the document and everything published for it.
    pub fn close(&mut self, uri: &str) {
        self.documents.remove(uri);
    }

    pub fn diagnostics(&self, uri: &str) -> Option<&Diagnostics> {
        self.documents.get(uri)?.published.as_ref()
    }

    pub fn version(&self, uri: &str) -> Option<u64> {
        self.documents.get(uri).map(|doc| doc.version)
    }

    pub fn begin_pass(&self, uri: &str) -> Option<PassTicket> {
        let doc = self.documents.get(uri)?;
        Some(PassTicket {
            uri: uri.to_owned(),
            version: doc.version,
        })
    }

    /// Computes diagnostics for the document state named by `ticket`.
    pub fn compute(&mut self, ticket: &PassTicket) -> Result<Option<Diagnostics>> {
        let Some(doc) = self.documents.get(&ticket.uri) else {
            return Ok(None);
        };
        self.engine.check_document(&doc.language_id, &doc.text)
    }

    /// Stores a pass result. Returns `false` when it was discarded: the
    /// document closed or moved past the ticket's version, or the pass failed.
    pub fn publish(&mut self, ticket: &PassTicket, result: Result<Option<Diagnostics>>) -> bool {
        let Some(doc) = self.documents.get_mut(&ticket.uri) else {
            tracing::debug!(uri = %ticket.uri, "discarding diagnostics for closed document");
            return false;
        };
        if doc.version != ticket.version {
            tracing::debug!(
                uri = %ticket.uri,
                pass = ticket.version,
                current = doc.version,
                "discarding stale diagnostics"
            );
            return false;
        }

        match result {
            Ok(Some(diagnostics)) => {
                doc.published = Some(diagnostics);
                true
            }
            Ok(None) => false,
            Err(err) => {
                tracing::error!(uri = %ticket.uri, %err, "diagnostics pass failed");
                false
            }
        }
    }

    fn bump_version(&mut self) -> u64 {
        let version = self.next_version;
        self.next_version += 1;
        version
    }

    fn run_pass(&mut self, uri: &str) {
        let Some(ticket) = self.begin_pass(uri) else {
            return;
        };
        let result = self.compute(&ticket);
        self.publish(&ticket, result);
    }
}
