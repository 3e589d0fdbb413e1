use std::path::PathBuf;

use tsq_langs::Grammar;
use tsq_lib::{PrintOptions, print_tree};

use super::fail;
use super::lang_resolver::resolve_language;
use super::source_loader::load_text;

pub struct TreeArgs {
    pub path: PathBuf,
    pub lang: Option<String>,
    pub raw: bool,
    pub indent: usize,
}

pub fn run(args: TreeArgs) {
    let lang = resolve_language(args.lang.as_deref(), &args.path).unwrap_or_else(|msg| fail(msg));
    let text = load_text(&args.path).unwrap_or_else(|err| fail(err));

    let grammar = Grammar::load(lang).unwrap_or_else(|err| fail(err));
    let tree = grammar.parse(&text).unwrap_or_else(|err| fail(err));
    if tree.root_node().has_error() {
        tracing::warn!(language = %lang, "source has syntax errors");
    }

    let options = PrintOptions {
        only_named: !args.raw,
        indent_width: args.indent,
    };
    print!("{}", print_tree(tree.root_node(), options));
}
