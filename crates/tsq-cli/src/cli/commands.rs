//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tsq")
        .about("Check tree-sitter queries and inspect grammar node types")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(tree_command())
        .subcommand(outline_command())
        .subcommand(definition_command())
        .subcommand(langs_command())
}

/// Report query diagnostics for a host source or a standalone query file.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Report query diagnostics for a file")
        .override_usage(
            "\
  tsq check <FILE>
  tsq check <FILE> -l <LANG>",
        )
        .after_help(
            r#"EXAMPLES:
  tsq check queries.ts                # embedded treeSitterQuery literals
  tsq check highlights.scm            # standalone file with a `;; <lang>` line
  tsq check - -l typescript           # from stdin
  tsq check app.js --format json      # diagnostics as JSON"#,
        )
        .arg(file_arg())
        .arg(lang_arg())
        .arg(format_arg())
        .arg(color_arg())
}

/// Print the parse tree of a source file.
pub fn tree_command() -> Command {
    Command::new("tree")
        .about("Print the parse tree of a source file")
        .after_help(
            r#"EXAMPLES:
  tsq tree app.py                     # named nodes only
  tsq tree app.py --raw               # include anonymous nodes
  tsq tree - -l rust --indent 2       # from stdin"#,
        )
        .arg(source_arg())
        .arg(lang_arg())
        .arg(raw_arg())
        .arg(indent_arg())
}

/// List the descriptors of a node-types.json file.
pub fn outline_command() -> Command {
    Command::new("outline")
        .about("List node type descriptors")
        .arg(node_types_arg())
        .arg(format_arg())
}

/// Locate the descriptor of the node type under a position.
pub fn definition_command() -> Command {
    Command::new("definition")
        .about("Find the descriptor of the node type under the cursor")
        .after_help(
            r#"EXAMPLES:
  tsq definition node-types.json --line 12 --column 16"#,
        )
        .arg(node_types_arg())
        .arg(line_arg())
        .arg(column_arg())
        .arg(format_arg())
}

/// List supported languages.
pub fn langs_command() -> Command {
    Command::new("langs")
        .about("List supported languages")
        .arg(format_arg())
}
