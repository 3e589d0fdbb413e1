//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be composed
//! into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Document to check (positional).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("File to read (use \"-\" for stdin)")
}

/// Source file to parse (positional).
pub fn source_arg() -> Arg {
    Arg::new("file")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Source file to parse (use \"-\" for stdin)")
}

/// A `node-types.json` file (positional).
pub fn node_types_arg() -> Arg {
    Arg::new("file")
        .value_name("NODE_TYPES_JSON")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Grammar node-types.json file (use \"-\" for stdin)")
}

/// Language flag (-l/--lang).
pub fn lang_arg() -> Arg {
    Arg::new("lang")
        .short('l')
        .long("lang")
        .value_name("LANG")
        .help("Language id (inferred from extension if not specified)")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Include anonymous nodes (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include anonymous nodes (literals, punctuation)")
}

/// Spaces per depth level (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("4")
        .value_parser(value_parser!(usize))
        .help("Spaces per nesting level")
}

/// Zero-based line (--line).
pub fn line_arg() -> Arg {
    Arg::new("line")
        .long("line")
        .value_name("LINE")
        .required(true)
        .value_parser(value_parser!(u32))
        .help("Zero-based line of the cursor")
}

/// Zero-based UTF-16 column (--column).
pub fn column_arg() -> Arg {
    Arg::new("column")
        .long("column")
        .value_name("COLUMN")
        .required(true)
        .value_parser(value_parser!(u32))
        .help("Zero-based UTF-16 column of the cursor")
}
