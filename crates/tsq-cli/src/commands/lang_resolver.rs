//! Resolves what a file is from `-l/--lang` or its extension.

use std::path::Path;

use tsq_langs::LanguageId;
use tsq_lib::DocumentKind;

use super::source_loader::is_stdin;

/// Editor id for `tsq check`: explicit flag first, else the file extension.
pub fn resolve_document_kind(explicit: Option<&str>, path: &Path) -> Result<String, String> {
    if let Some(id) = explicit {
        return match DocumentKind::from_editor_id(id) {
            Some(_) => Ok(id.to_owned()),
            None => Err(format!(
                "cannot check '{id}' documents; expected javascript, javascriptreact, typescript, typescriptreact or scm"
            )),
        };
    }

    if is_stdin(path) {
        return Err("-l/--lang is required (cannot infer from stdin)".to_owned());
    }

    let ext = extension(path)
        .ok_or_else(|| format!("cannot infer document kind of '{}', use -l/--lang", path.display()))?;
    editor_id_for_extension(ext)
        .map(str::to_owned)
        .ok_or_else(|| format!("cannot infer document kind from extension '.{ext}', use -l/--lang"))
}

/// Editor ids of the documents `tsq check` handles.
pub fn editor_id_for_extension(ext: &str) -> Option<&'static str> {
    let id = match ext.to_ascii_lowercase().as_str() {
        "scm" => "scm",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        _ => return None,
    };
    Some(id)
}

/// Grammar for `tsq tree`: explicit flag first, else the file extension.
pub fn resolve_language(explicit: Option<&str>, path: &Path) -> Result<LanguageId, String> {
    if let Some(name) = explicit {
        return LanguageId::from_editor_id(name).ok_or_else(|| {
            let mut msg = format!("unknown language: '{name}'");
            if let Some(suggestion) = suggest_language(name) {
                msg.push_str(&format!("\n\nDid you mean '{suggestion}'?"));
            }
            msg.push_str("\n\nRun 'tsq langs' for the full list.");
            msg
        });
    }

    if is_stdin(path) {
        return Err("-l/--lang is required (cannot infer from stdin)".to_owned());
    }

    let ext = extension(path)
        .ok_or_else(|| format!("cannot infer language of '{}', use -l/--lang", path.display()))?;
    language_for_extension(ext)
        .ok_or_else(|| format!("cannot infer language from extension '.{ext}', use -l/--lang"))
}

pub fn language_for_extension(ext: &str) -> Option<LanguageId> {
    let id = match ext.to_ascii_lowercase().as_str() {
        "py" | "pyi" => LanguageId::Python,
        "js" | "mjs" | "cjs" | "jsx" => LanguageId::JavaScript,
        "ts" | "mts" | "cts" => LanguageId::TypeScript,
        "tsx" => LanguageId::Tsx,
        "go" => LanguageId::Go,
        "rb" => LanguageId::Ruby,
        "cs" => LanguageId::CSharp,
        "cc" | "cpp" | "cxx" | "hh" | "hpp" | "hxx" => LanguageId::Cpp,
        "java" => LanguageId::Java,
        "rs" => LanguageId::Rust,
        "php" => LanguageId::Php,
        _ => return None,
    };
    Some(id)
}

/// Suggest a similar language name for typos.
pub fn suggest_language(input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();
    LanguageId::ALL
        .iter()
        .map(|id| (id.name(), levenshtein(id.name(), &input)))
        .filter(|&(_, distance)| distance <= 2)
        .min_by_key(|&(_, distance)| distance)
        .map(|(name, _)| name)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
