use std::path::PathBuf;

use tsq_core::{LineIndex, Position, SchemaIndex};
use tsq_lib::{DefinitionTable, Location};

use super::source_loader::load_text;
use super::{fail, print_json};

pub struct DefinitionArgs {
    pub path: PathBuf,
    pub line: u32,
    pub column: u32,
    pub json: bool,
}

pub fn run(args: DefinitionArgs) {
    let text = load_text(&args.path).unwrap_or_else(|err| fail(err));

    let Some(location) = find(&text, Position::new(args.line, args.column)) else {
        fail(format!("no definition at {}:{}", args.line, args.column));
    };

    if args.json {
        print_json(&location);
    } else {
        println!("{}", format_location(&location));
    }
}

/// Definition for a zero-based editor position.
pub fn find(text: &str, position: Position) -> Option<Location> {
    let offset = LineIndex::new(text).offset(position)?;
    let mut index = SchemaIndex::new();
    DefinitionTable::new().definition(&mut index, text, offset)
}

/// Zero-based `line:column-line:column`, the convention of the input flags.
pub fn format_location(location: &Location) -> String {
    let Location { range, .. } = location;
    format!(
        "{}:{}-{}:{}",
        range.start.line, range.start.character, range.end.line, range.end.character
    )
}
