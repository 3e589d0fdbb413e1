use std::fmt::Write;

use serde::Serialize;
use tsq_langs::LanguageId;

use super::print_json;

pub struct LangsArgs {
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct LangEntry {
    pub name: &'static str,
    pub built_in: bool,
}

pub fn run(args: LangsArgs) {
    let entries = entries();
    if args.json {
        print_json(&entries);
    } else {
        print!("{}", render_text(&entries));
    }
}

pub fn entries() -> Vec<LangEntry> {
    LanguageId::ALL
        .iter()
        .map(|id| LangEntry {
            name: id.name(),
            built_in: id.is_built_in(),
        })
        .collect()
}

pub fn render_text(entries: &[LangEntry]) -> String {
    let mut out = format!("Supported languages ({}):\n", entries.len());
    for entry in entries {
        let note = if entry.built_in { "" } else { "  (not built in)" };
        writeln!(out, "  {}{note}", entry.name).expect("String write never fails");
    }
    out
}
