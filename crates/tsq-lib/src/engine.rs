//! Diagnostics passes over host sources and standalone query files.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tsq_core::LineIndex;
use tsq_langs::{Grammar, GrammarCache, LangError, LanguageId};

use crate::Result;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::embedded::{EmbeddedQuerySite, HostQuery};
use crate::query_file;

static OFFSET_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" at offset (\d+)").expect("valid regex"));
static TRAILING_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\.\.$").expect("valid regex"));

/// What a diagnostics pass does with a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Source that may embed query literals, parsed with this grammar.
    Host(LanguageId),
    /// Standalone query file with a `;; <language>` directive.
    QueryFile,
}

impl DocumentKind {
    /// Maps an editor language id; other ids are not handled.
    pub fn from_editor_id(editor_id: &str) -> Option<Self> {
        match editor_id.to_ascii_lowercase().as_str() {
            "javascript" | "javascriptreact" => Some(Self::Host(LanguageId::JavaScript)),
            "typescript" => Some(Self::Host(LanguageId::TypeScript)),
            "typescriptreact" => Some(Self::Host(LanguageId::Tsx)),
            "scm" | "query" => Some(Self::QueryFile),
            _ => None,
        }
    }
}

/// Owns the grammar cache and the per-host compiled site queries.
#[derive(Debug, Default)]
pub struct DiagnosticsEngine {
    grammars: GrammarCache,
    host_queries: HashMap<LanguageId, Arc<HostQuery>>,
}

impl DiagnosticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grammars(grammars: GrammarCache) -> Self {
        Self {
            grammars,
            host_queries: HashMap::new(),
        }
    }

    pub fn grammars(&self) -> &GrammarCache {
        &self.grammars
    }

    pub fn grammars_mut(&mut self) -> &mut GrammarCache {
        &mut self.grammars
    }

    /// Runs a full pass. `None` means the document kind is not handled.
    pub fn check_document(&mut self, editor_id: &str, text: &str) -> Result<Option<Diagnostics>> {
        let diagnostics = match DocumentKind::from_editor_id(editor_id) {
            Some(DocumentKind::Host(host)) => self.check_embedded(host, text)?,
            Some(DocumentKind::QueryFile) => self.check_query_file(text)?,
            None => return Ok(None),
        };
        Ok(Some(diagnostics))
    }

    /// Validates every embedded query literal in a host source.
    pub fn check_embedded(&mut self, host: LanguageId, text: &str) -> Result<Diagnostics> {
        let host_query = self.host_query(host)?;
        let grammar = self.grammars.get(host)?;
        let tree = grammar.parse(text).map_err(LangError::from)?;
        let sites = host_query.sites(tree.root_node(), text);

        if sites.is_empty() {
            return Ok(Diagnostics::new());
        }
        Ok(check_sites(&sites, text, |id| self.grammars.get(id)))
    }

    /// Validates a standalone query file against the grammar named by its
    /// directive line. Without a supported directive there is nothing to check.
    pub fn check_query_file(&mut self, text: &str) -> Result<Diagnostics> {
        let mut diagnostics = Diagnostics::new();
        let Some(name) = query_file::directive_language(text) else {
            return Ok(diagnostics);
        };
        let Some(target) = LanguageId::from_name(name) else {
            tracing::debug!(name, "query file targets an unsupported language");
            return Ok(diagnostics);
        };

        let grammar = self.grammars.get(target)?;
        if let Err(err) = grammar.compile_query(text) {
            let index = LineIndex::new(text);
            diagnostics.push(query_file::error_diagnostic(&err, &index));
        }
        Ok(diagnostics)
    }

    fn host_query(&mut self, host: LanguageId) -> Result<Arc<HostQuery>> {
        if let Some(query) = self.host_queries.get(&host) {
            return Ok(Arc::clone(query));
        }
        let grammar = self.grammars.get(host)?;
        let query = Arc::new(HostQuery::new(&grammar)?);
        tracing::debug!(language = %host, "compiled embedded site query");
        self.host_queries.insert(host, Arc::clone(&query));
        Ok(query)
    }
}

/// Compiles each site against its target grammar. A site whose language is
/// unknown or whose grammar cannot be loaded is skipped; the rest still report.
pub(crate) fn check_sites<F>(
    sites: &[EmbeddedQuerySite<'_>],
    text: &str,
    mut grammar_for: F,
) -> Diagnostics
where
    F: FnMut(LanguageId) -> std::result::Result<Arc<Grammar>, LangError>,
{
    let mut diagnostics = Diagnostics::new();
    let index = LineIndex::new(text);
    for site in sites {
        let Some(target) = site.target(text) else {
            tracing::warn!(name = site.target_name(text), "skipping embedded query with unknown language");
            continue;
        };
        let target_grammar = match grammar_for(target) {
            Ok(grammar) => grammar,
            Err(err) => {
                tracing::warn!(language = %target, %err, "skipping embedded query, grammar unavailable");
                continue;
            }
        };
        let Err(err) = target_grammar.compile_query(site.query_source(text)) else {
            continue;
        };
        let start = site.content_offset() + err.offset.unwrap_or(0);
        diagnostics.push(Diagnostic::to_line_end(
            start,
            &index,
            sanitize_message(&err.message),
        ));
    }
    diagnostics
}

/// Strips every ` at offset N` and a trailing `...` from a compiler message.
pub fn sanitize_message(message: &str) -> String {
    let without_offsets = OFFSET_SUFFIX.replace_all(message, "");
    TRAILING_ELLIPSIS.replace(&without_offsets, "").into_owned()
}

/// Offset recovered from an ` at offset N` fragment of a message.
pub(crate) fn offset_in_message(message: &str) -> Option<usize> {
    OFFSET_SUFFIX
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
