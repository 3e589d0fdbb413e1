//! Textual dump of a syntax tree, one node per line.
//!
//! ```text
//! program [0, 0] - [0, 10]
//!     lexical_declaration [0, 0] - [0, 10]
//!         variable_declarator [0, 4] - [0, 9]
//!             name: identifier [0, 4] - [0, 5]
//! ```

use std::fmt::Write;

use tsq_langs::tree_sitter::Node;

use crate::traverse::traverse;

/// Spaces per depth level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Skip anonymous nodes such as punctuation and keywords.
    pub only_named: bool,
    pub indent_width: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            only_named: true,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl PrintOptions {
    pub fn raw() -> Self {
        Self {
            only_named: false,
            ..Self::default()
        }
    }
}

/// Renders the tree under `root`; every line ends with `\n`.
pub fn print_tree(root: Node<'_>, options: PrintOptions) -> String {
    let mut out = String::new();
    traverse(root, |cursor, depth| {
        let node = cursor.node();
        if options.only_named && !node.is_named() {
            return;
        }
        let start = node.start_position();
        let end = node.end_position();
        let indent = depth * options.indent_width;
        let field = cursor
            .field_name()
            .map(|name| format!("{name}: "))
            .unwrap_or_default();
        writeln!(
            out,
            "{:indent$}{field}{} [{}, {}] - [{}, {}]",
            "",
            node.kind(),
            start.row,
            start.column,
            end.row,
            end.column,
        )
        .expect("String write never fails");
    });
    out
}
