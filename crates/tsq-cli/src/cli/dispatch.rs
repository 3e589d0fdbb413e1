//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use tsq_lib::DEFAULT_INDENT_WIDTH;

use super::{ColorChoice, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::definition::DefinitionArgs;
use crate::commands::langs::LangsArgs;
use crate::commands::outline::OutlineArgs;
use crate::commands::tree::TreeArgs;

pub struct CheckParams {
    pub path: PathBuf,
    pub lang: Option<String>,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: parse_path(m),
            lang: m.get_one::<String>("lang").cloned(),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            path: p.path,
            lang: p.lang,
            json: p.format == OutputFormat::Json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TreeParams {
    pub path: PathBuf,
    pub lang: Option<String>,
    pub raw: bool,
    pub indent: usize,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: parse_path(m),
            lang: m.get_one::<String>("lang").cloned(),
            raw: m.get_flag("raw"),
            indent: m.get_one::<usize>("indent").copied().unwrap_or(DEFAULT_INDENT_WIDTH),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            path: p.path,
            lang: p.lang,
            raw: p.raw,
            indent: p.indent,
        }
    }
}

pub struct OutlineParams {
    pub path: PathBuf,
    pub format: OutputFormat,
}

impl OutlineParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: parse_path(m),
            format: parse_format(m),
        }
    }
}

impl From<OutlineParams> for OutlineArgs {
    fn from(p: OutlineParams) -> Self {
        Self {
            path: p.path,
            json: p.format == OutputFormat::Json,
        }
    }
}

pub struct DefinitionParams {
    pub path: PathBuf,
    pub line: u32,
    pub column: u32,
    pub format: OutputFormat,
}

impl DefinitionParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: parse_path(m),
            line: m.get_one::<u32>("line").copied().unwrap_or_default(),
            column: m.get_one::<u32>("column").copied().unwrap_or_default(),
            format: parse_format(m),
        }
    }
}

impl From<DefinitionParams> for DefinitionArgs {
    fn from(p: DefinitionParams) -> Self {
        Self {
            path: p.path,
            line: p.line,
            column: p.column,
            json: p.format == OutputFormat::Json,
        }
    }
}

pub struct LangsParams {
    pub format: OutputFormat,
}

impl LangsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            format: parse_format(m),
        }
    }
}

impl From<LangsParams> for LangsArgs {
    fn from(p: LangsParams) -> Self {
        Self {
            json: p.format == OutputFormat::Json,
        }
    }
}

/// Required positional; clap rejects the command line before this runs.
fn parse_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("file").cloned().unwrap_or_default()
}

/// Parse --format flag into OutputFormat.
fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
