use std::fmt::Write;
use std::path::PathBuf;

use tsq_core::SchemaIndex;
use tsq_lib::{OutlineSymbol, outline};

use super::source_loader::load_text;
use super::{fail, print_json};

pub struct OutlineArgs {
    pub path: PathBuf,
    pub json: bool,
}

pub fn run(args: OutlineArgs) {
    let text = load_text(&args.path).unwrap_or_else(|err| fail(err));

    let mut index = SchemaIndex::new();
    // an unusable file has an empty outline; say why instead
    if let Err(err) = index.get_or_compute(&text) {
        fail(format!("{}: {err}", args.path.display()));
    }
    let symbols = outline(&mut index, &text);

    if args.json {
        print_json(&symbols);
    } else {
        print!("{}", render_text(&symbols));
    }
}

/// One line per symbol: `line:column  name  (detail)`, one-based.
pub fn render_text(symbols: &[OutlineSymbol]) -> String {
    let mut out = String::new();
    for symbol in symbols {
        let start = symbol.selection_range.start;
        writeln!(
            out,
            "{}:{}  {}  ({})",
            start.line + 1,
            start.character + 1,
            symbol.name,
            symbol.detail
        )
        .expect("String write never fails");
    }
    out
}
