//! Query literals embedded in JavaScript and TypeScript sources.
//!
//! A site looks like ``treeSitterQuery.rust(`(identifier) @id`)`` or the
//! tagged form ``treeSitterQuery.rust`(identifier) @id` ``. The member name
//! selects the grammar the literal is compiled against.

use std::fmt::Write;

use streaming_iterator::StreamingIterator;
use tsq_langs::tree_sitter::{Node, Query, QueryCursor};
use tsq_langs::{Grammar, LanguageId, QueryCompileError};

use crate::{Error, Result};

pub const SITE_IDENTIFIER: &str = "treeSitterQuery";

const CALL: &str = "call_expression";
const IDENTIFIER: &str = "identifier";
const TARGET_LANGUAGE: &str = "target_language";
const LITERAL: &str = "query_src_with_quotes";

/// Source of the query that finds embedded sites in a host document.
pub fn host_query_source() -> String {
    let mut languages = String::new();
    for id in LanguageId::ALL {
        write!(languages, " \"{id}\"").expect("String write never fails");
    }

    let callee = format!(
        "function: (member_expression
    object: (identifier) @{IDENTIFIER}
    property: (property_identifier) @{TARGET_LANGUAGE})
  (#eq? @{IDENTIFIER} \"{SITE_IDENTIFIER}\")
  (#any-of? @{TARGET_LANGUAGE}{languages})"
    );

    format!(
        "(call_expression
  {callee}
  arguments: (arguments . (template_string) @{LITERAL} .)) @{CALL}

(call_expression
  {callee}
  arguments: (template_string) @{LITERAL}) @{CALL}
"
    )
}

/// Compiled host query with its capture roles resolved by name.
#[derive(Debug)]
pub struct HostQuery {
    query: Query,
    call: u32,
    target_language: u32,
    literal: u32,
}

impl HostQuery {
    pub fn new(host: &Grammar) -> Result<Self> {
        let source = host_query_source();
        let query = host.compile_query(&source).map_err(|source| Error::HostQuery {
            language: host.id(),
            source,
        })?;

        let role = |name: &str| {
            query
                .capture_index_for_name(name)
                .ok_or_else(|| Error::HostQuery {
                    language: host.id(),
                    source: QueryCompileError {
                        offset: None,
                        message: format!("missing capture `{name}`"),
                    },
                })
        };
        let call = role(CALL)?;
        let target_language = role(TARGET_LANGUAGE)?;
        let literal = role(LITERAL)?;

        Ok(Self {
            query,
            call,
            target_language,
            literal,
        })
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Sites under `root`, ordered by call position (start ascending, then
    /// outer calls before the calls they contain).
    pub fn sites<'tree>(&self, root: Node<'tree>, text: &str) -> Vec<EmbeddedQuerySite<'tree>> {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, root, text.as_bytes());
        let mut sites = Vec::new();

        while let Some(m) = matches.next() {
            let mut call = None;
            let mut target_language = None;
            let mut literal = None;
            for capture in m.captures {
                if capture.index == self.call {
                    call = Some(capture.node);
                } else if capture.index == self.target_language {
                    target_language = Some(capture.node);
                } else if capture.index == self.literal {
                    literal = Some(capture.node);
                }
            }

            match (call, target_language, literal) {
                (Some(call), Some(target_language), Some(literal)) => {
                    sites.push(EmbeddedQuerySite {
                        call,
                        target_language,
                        literal,
                    });
                }
                _ => tracing::warn!(pattern = m.pattern_index, "skipping incomplete embedded query match"),
            }
        }

        sites.sort_by(|a, b| {
            a.call
                .start_byte()
                .cmp(&b.call.start_byte())
                .then_with(|| b.call.end_byte().cmp(&a.call.end_byte()))
        });
        sites
    }
}

/// One located query literal. Valid only for the tree it was found in.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedQuerySite<'tree> {
    pub call: Node<'tree>,
    pub target_language: Node<'tree>,
    /// The template literal, delimiters included.
    pub literal: Node<'tree>,
}

impl EmbeddedQuerySite<'_> {
    /// Member name, e.g. `rust`.
    pub fn target_name<'t>(&self, text: &'t str) -> &'t str {
        &text[self.target_language.byte_range()]
    }

    pub fn target(&self, text: &str) -> Option<LanguageId> {
        LanguageId::from_name(self.target_name(text))
    }

    /// Offset of the first byte after the opening delimiter.
    pub fn content_offset(&self) -> usize {
        self.literal.start_byte() + 1
    }

    /// Literal text with its first and last characters stripped.
    pub fn query_source<'t>(&self, text: &'t str) -> &'t str {
        let raw = &text[self.literal.byte_range()];
        let mut chars = raw.chars();
        chars.next();
        chars.next_back();
        chars.as_str()
    }
}
