#![cfg(all(
    feature = "lang-javascript",
    feature = "lang-typescript",
    feature = "lang-python",
    feature = "lang-rust"
))]

use indoc::indoc;
use tsq_core::Position;
use std::sync::Arc;

use tsq_langs::{Grammar, LangError, LanguageId};

use crate::diagnostics::text_range;
use crate::embedded::HostQuery;
use crate::engine::{DiagnosticsEngine, DocumentKind, check_sites, sanitize_message};

fn compile_offset(lang: LanguageId, query: &str) -> usize {
    Grammar::load(lang)
        .unwrap()
        .compile_query(query)
        .unwrap_err()
        .offset
        .unwrap()
}

#[test]
fn editor_ids_map_to_document_kinds() {
    assert_eq!(
        DocumentKind::from_editor_id("typescriptreact"),
        Some(DocumentKind::Host(LanguageId::Tsx))
    );
    assert_eq!(
        DocumentKind::from_editor_id("javascriptreact"),
        Some(DocumentKind::Host(LanguageId::JavaScript))
    );
    assert_eq!(DocumentKind::from_editor_id("scm"), Some(DocumentKind::QueryFile));
    assert_eq!(DocumentKind::from_editor_id("query"), Some(DocumentKind::QueryFile));
    assert_eq!(DocumentKind::from_editor_id("python"), None);
}

#[test]
fn unhandled_documents_yield_none() {
    let mut engine = DiagnosticsEngine::new();
    assert_eq!(engine.check_document("markdown", "# hi").unwrap(), None);
    assert!(engine.grammars().loaded().is_empty());
}

#[test]
fn unbalanced_embedded_query() {
    let text = "const q = treeSitterQuery.rust(`(identifier`);\nconst other = 1;\n";
    let mut engine = DiagnosticsEngine::new();
    let diagnostics = engine.check_document("typescript", text).unwrap().unwrap();

    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics.as_slice()[0];
    let literal_start = text.find('`').unwrap();
    let expected = literal_start + 1 + compile_offset(LanguageId::Rust, "(identifier");
    let line_end = text.find('\n').unwrap();

    assert_eq!(diag.span, text_range(expected, line_end));
    assert_eq!(diag.range.start, Position::new(0, expected as u32));
    assert_eq!(diag.range.end, Position::new(0, line_end as u32));
    assert_eq!(diag.message, "Invalid syntax");
}

#[test]
fn valid_embedded_query() {
    let text = "treeSitterQuery.python(`(function_definition name: (identifier) @name)`);";
    let mut engine = DiagnosticsEngine::new();
    let diagnostics = engine.check_document("javascript", text).unwrap().unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn multiple_sites_report_in_document_order() {
    let text = indoc! {r#"
        treeSitterQuery.python(`(not_a_python_node)`);
        treeSitterQuery.rust(`(identifier) @ok`);
        treeSitterQuery.rust(`(function_item bogus: (identifier))`);
    "#};
    let mut engine = DiagnosticsEngine::new();
    let diagnostics = engine.check_document("typescript", text).unwrap().unwrap();

    let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        ["Invalid node type `not_a_python_node`", "Invalid field name `bogus`"]
    );
    assert_eq!(diagnostics.as_slice()[0].range.start, Position::new(0, 25));
    assert_eq!(diagnostics.as_slice()[1].range.start.line, 2);
}

#[test]
fn unavailable_grammar_skips_only_its_sites() {
    let text = indoc! {r#"
        treeSitterQuery.python(`(not_a_python_node)`);
        treeSitterQuery.rust(`(function_item bogus: (identifier))`);
        treeSitterQuery.python(`(`);
    "#};
    let host = Grammar::load(LanguageId::TypeScript).unwrap();
    let host_query = HostQuery::new(&host).unwrap();
    let tree = host.parse(text).unwrap();
    let sites = host_query.sites(tree.root_node(), text);
    assert_eq!(sites.len(), 3);

    let mut requested = Vec::new();
    let diagnostics = check_sites(&sites, text, |id| {
        requested.push(id);
        match id {
            LanguageId::Python => Err(LangError::NotBuiltIn(id)),
            _ => Grammar::load(id).map(Arc::new),
        }
    });

    let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, ["Invalid field name `bogus`"]);
    assert_eq!(diagnostics.as_slice()[0].range.start.line, 1);
    assert_eq!(
        requested,
        [LanguageId::Python, LanguageId::Rust, LanguageId::Python]
    );
}

#[test]
fn embedded_ranges_count_utf16_columns() {
    let text = "/* ü */ treeSitterQuery.python(`(nope)`);";
    let mut engine = DiagnosticsEngine::new();
    let diagnostics = engine.check_document("javascript", text).unwrap().unwrap();

    let diag = &diagnostics.as_slice()[0];
    let node_name = text.find("nope").unwrap();
    assert_eq!(usize::from(diag.span.start()), node_name);
    // `ü` is two bytes but one UTF-16 unit
    assert_eq!(diag.range.start, Position::new(0, node_name as u32 - 1));
}

#[test]
fn host_query_and_grammars_are_reused() {
    let text = "treeSitterQuery.python(`(identifier)`);";
    let mut engine = DiagnosticsEngine::new();
    engine.check_document("javascript", text).unwrap();
    engine.check_document("javascriptreact", text).unwrap();

    assert_eq!(
        engine.grammars().loaded(),
        vec![LanguageId::Python, LanguageId::JavaScript]
    );
}

#[test]
fn query_file_valid() {
    let text = indoc! {"
        ;; python
        (function_definition name: (identifier) @name)
    "};
    let mut engine = DiagnosticsEngine::new();
    let diagnostics = engine.check_document("scm", text).unwrap().unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn query_file_unsupported_language_loads_nothing() {
    let text = ";; brainfuck\n(((";
    let mut engine = DiagnosticsEngine::new();
    let diagnostics = engine.check_document("scm", text).unwrap().unwrap();

    assert!(diagnostics.is_empty());
    assert!(engine.grammars().loaded().is_empty());
}

#[test]
fn query_file_without_directive() {
    let mut engine = DiagnosticsEngine::new();
    let diagnostics = engine.check_document("scm", "(((").unwrap().unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn query_file_invalid_node_type() {
    let text = ";; Python\n(not_a_node)\n";
    let mut engine = DiagnosticsEngine::new();
    let diagnostics = engine.check_document("scm", text).unwrap().unwrap();

    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics.as_slice()[0];
    assert_eq!(diag.message, "Invalid node type `not_a_node`");
    assert_eq!(diag.span, text_range(11, 22));
    assert_eq!(diag.range.start, Position::new(1, 1));
    assert_eq!(diag.range.end, Position::new(1, 12));
}

#[test]
fn query_file_syntax_error_uses_compiler_offset() {
    let text = ";; python\n(function_definition\n";
    let mut engine = DiagnosticsEngine::new();
    let diagnostics = engine.check_document("query", text).unwrap().unwrap();

    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics.as_slice()[0];
    let expected = compile_offset(LanguageId::Python, text);
    assert_eq!(usize::from(diag.span.start()), expected);
}

#[test]
fn passes_are_idempotent() {
    let text = "treeSitterQuery.rust(`(identifier`);\ntreeSitterQuery.rust(`(nope)`);";
    let mut engine = DiagnosticsEngine::new();
    let first = engine.check_document("typescript", text).unwrap();
    let second = engine.check_document("typescript", text).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.map(|d| d.len()), Some(2));
}

#[test]
fn sanitizes_compiler_messages() {
    assert_eq!(sanitize_message("Bad syntax at offset 12: `(a`..."), "Bad syntax: `(a`");
    assert_eq!(sanitize_message("a at offset 1 b at offset 22"), "a b");
    assert_eq!(sanitize_message("kept... in the middle"), "kept... in the middle");
    assert_eq!(sanitize_message("Invalid syntax"), "Invalid syntax");
}
