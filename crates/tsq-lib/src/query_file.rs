//! Standalone query files.
//!
//! The first non-blank line names the target grammar:
//!
//! ```scheme
//! ;; python
//! (function_definition name: (identifier) @name)
//! ```
//!
//! The whole file is compiled as-is; the directive is an ordinary comment in
//! query syntax, so compiler offsets are already document offsets.

use tsq_core::LineIndex;
use tsq_langs::QueryCompileError;

use crate::diagnostics::{Diagnostic, text_range};
use crate::engine::{offset_in_message, sanitize_message};

/// Raw language name from a `;; <name>` directive on the first non-blank line.
pub fn directive_language(text: &str) -> Option<&str> {
    let line = text.lines().map(str::trim).find(|line| !line.is_empty())?;
    let name = line.strip_prefix(";;")?.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some(name)
}

/// Positions a compile error: at the reported offset, else at an offset
/// recovered from the message, else over the whole document.
pub fn error_diagnostic(err: &QueryCompileError, index: &LineIndex) -> Diagnostic {
    let message = sanitize_message(&err.message);
    match err.offset.or_else(|| offset_in_message(&err.message)) {
        Some(start) => Diagnostic::to_line_end(start, index, message),
        None => {
            let last_line = index.line_count() - 1;
            let end = index.line_end(last_line).unwrap_or(index.len());
            Diagnostic::error(text_range(0, end), index, message)
        }
    }
}
