//! Byte offset ↔ editor position mapping.
//!
//! Offsets are UTF-8 byte offsets, which is what tree-sitter reports.
//! `Position::character` counts UTF-16 code units, as editors do.
//! Building the index is O(n); lookups are O(log lines).

use rowan::TextRange;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A character whose UTF-8 and UTF-16 widths differ.
#[derive(Debug, Clone, Copy)]
struct WideChar {
    offset: usize,
    len_utf8: u8,
    len_utf16: u8,
}

#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    /// End of each line's content, before `\n`, `\r\n` or `\r`.
    line_ends: Vec<usize>,
    wide_chars: Vec<WideChar>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut line_ends = Vec::new();
        let mut wide_chars = Vec::new();

        let bytes = text.as_bytes();
        for (offset, ch) in text.char_indices() {
            if ch == '\n' {
                let end = if offset > 0 && bytes[offset - 1] == b'\r' {
                    offset - 1
                } else {
                    offset
                };
                line_ends.push(end);
                line_starts.push(offset + 1);
            } else if ch == '\r' {
                // a lone `\r` ends a line; `\r\n` is handled at the `\n`
                if bytes.get(offset + 1) != Some(&b'\n') {
                    line_ends.push(offset);
                    line_starts.push(offset + 1);
                }
            } else if !ch.is_ascii() {
                wide_chars.push(WideChar {
                    offset,
                    len_utf8: ch.len_utf8() as u8,
                    len_utf16: ch.len_utf16() as u8,
                });
            }
        }
        line_ends.push(text.len());

        Self {
            line_starts,
            line_ends,
            wide_chars,
            len: text.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Zero-based line containing `offset`. Offsets past the end clamp.
    pub fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.len);
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }

    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Byte offset where the content of `line` ends, excluding the line break.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        self.line_ends.get(line).copied()
    }

    /// End of the line that contains `offset`.
    pub fn line_end_of(&self, offset: usize) -> usize {
        self.line_ends[self.line_of(offset)]
    }

    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = self.line_of(offset);
        let line_start = self.line_starts[line];

        let mut character = offset - line_start;
        for wide in self.wide_chars_between(line_start, offset) {
            let consumed = (offset - wide.offset).min(wide.len_utf8 as usize);
            character -= consumed;
            if consumed == wide.len_utf8 as usize {
                character += wide.len_utf16 as usize;
            }
        }

        Position::new(line as u32, character as u32)
    }

    pub fn range(&self, range: TextRange) -> Range {
        Range::new(
            self.position(range.start().into()),
            self.position(range.end().into()),
        )
    }

    /// Inverse of [`position`](Self::position).
    ///
    /// Returns `None` for a line past the end; a column past the end of the
    /// line clamps to the line end.
    pub fn offset(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        let line_start = self.line_start(line)?;
        let line_end = self.line_ends[line];

        let mut remaining = position.character as usize;
        let mut cursor = line_start;
        for wide in self.wide_chars_between(line_start, line_end) {
            let gap = wide.offset - cursor;
            if remaining <= gap {
                return Some(cursor + remaining);
            }
            remaining -= gap;
            cursor = wide.offset;
            if remaining < wide.len_utf16 as usize {
                return Some(cursor);
            }
            remaining -= wide.len_utf16 as usize;
            cursor += wide.len_utf8 as usize;
        }

        Some((cursor + remaining).min(line_end))
    }

    pub fn end_position(&self) -> Position {
        self.position(self.len)
    }

    fn wide_chars_between(&self, start: usize, end: usize) -> &[WideChar] {
        let lo = self.wide_chars.partition_point(|w| w.offset < start);
        let hi = self.wide_chars.partition_point(|w| w.offset < end);
        &self.wide_chars[lo..hi]
    }
}
