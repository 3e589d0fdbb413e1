use std::path::PathBuf;

use tsq_lib::{Diagnostics, DiagnosticsEngine};

use super::lang_resolver::resolve_document_kind;
use super::source_loader::{display_name, load_text};
use super::{fail, print_json};

pub struct CheckArgs {
    pub path: PathBuf,
    pub lang: Option<String>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let editor_id = resolve_document_kind(args.lang.as_deref(), &args.path).unwrap_or_else(|msg| fail(msg));
    let text = load_text(&args.path).unwrap_or_else(|err| fail(err));

    let mut engine = DiagnosticsEngine::new();
    let diagnostics = match engine.check_document(&editor_id, &text) {
        Ok(diagnostics) => diagnostics.unwrap_or_default(),
        Err(err) => fail(err),
    };
    tracing::debug!(count = diagnostics.len(), "checked {}", args.path.display());

    if args.json {
        print_json(&diagnostics);
    } else if !diagnostics.is_empty() {
        let name = display_name(&args.path);
        eprint!("{}", render(&diagnostics, &text, &name, args.color));
    }

    // silent on success
    if !diagnostics.is_empty() {
        std::process::exit(1);
    }
}

fn render(diagnostics: &Diagnostics, text: &str, name: &str, color: bool) -> String {
    let mut out = diagnostics
        .printer()
        .source(text)
        .path(name)
        .colored(color)
        .render();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
