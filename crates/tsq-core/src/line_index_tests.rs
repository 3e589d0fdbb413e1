use rowan::TextRange;

use crate::{LineIndex, Position, Range};

#[test]
fn ascii_positions() {
    let text = "ab\ncd\n";
    let index = LineIndex::new(text);

    assert_eq!(index.line_count(), 3);
    assert_eq!(index.position(0), Position::new(0, 0));
    assert_eq!(index.position(2), Position::new(0, 2));
    assert_eq!(index.position(3), Position::new(1, 0));
    assert_eq!(index.position(4), Position::new(1, 1));
    assert_eq!(index.position(6), Position::new(2, 0));
    assert_eq!(index.end_position(), Position::new(2, 0));
}

#[test]
fn offsets_past_end_clamp() {
    let index = LineIndex::new("abc");
    assert_eq!(index.position(100), Position::new(0, 3));
}

#[test]
fn utf16_columns() {
    // `é` is 2 bytes / 1 unit, `😀` is 4 bytes / 2 units
    let text = "é😀x\ny";
    let index = LineIndex::new(text);

    assert_eq!(index.position(2), Position::new(0, 1));
    assert_eq!(index.position(6), Position::new(0, 3));
    assert_eq!(index.position(7), Position::new(0, 4));
    assert_eq!(index.position(8), Position::new(1, 0));

    assert_eq!(index.offset(Position::new(0, 1)), Some(2));
    assert_eq!(index.offset(Position::new(0, 3)), Some(6));
    assert_eq!(index.offset(Position::new(0, 4)), Some(7));
    assert_eq!(index.offset(Position::new(1, 1)), Some(9));
}

#[test]
fn offset_inside_character_snaps_to_its_start() {
    let index = LineIndex::new("😀");
    assert_eq!(index.position(2), Position::new(0, 0));
    assert_eq!(index.offset(Position::new(0, 1)), Some(0));
}

#[test]
fn offset_clamps_column_and_rejects_line() {
    let index = LineIndex::new("ab\ncd");
    assert_eq!(index.offset(Position::new(0, 10)), Some(2));
    assert_eq!(index.offset(Position::new(5, 0)), None);
}

#[test]
fn line_end_excludes_line_break() {
    let text = "one\r\ntwo\nthree";
    let index = LineIndex::new(text);

    assert_eq!(index.line_end(0), Some(3));
    assert_eq!(index.line_end(1), Some(8));
    assert_eq!(index.line_end(2), Some(text.len()));
    assert_eq!(index.line_end(3), None);
    assert_eq!(index.line_end_of(6), 8);
}

#[test]
fn lone_carriage_return_breaks_lines() {
    let text = "ab\rcd\r\nef\r";
    let index = LineIndex::new(text);

    assert_eq!(index.line_count(), 4);
    assert_eq!(index.position(2), Position::new(0, 2));
    assert_eq!(index.position(3), Position::new(1, 0));
    assert_eq!(index.position(5), Position::new(1, 2));
    assert_eq!(index.position(7), Position::new(2, 0));
    assert_eq!(index.end_position(), Position::new(3, 0));

    assert_eq!(index.line_end(0), Some(2));
    assert_eq!(index.line_end(1), Some(5));
    assert_eq!(index.line_end(2), Some(9));
    assert_eq!(index.line_end(3), Some(text.len()));
    assert_eq!(index.offset(Position::new(1, 1)), Some(4));
    assert_eq!(index.offset(Position::new(0, 10)), Some(2));
}

#[test]
fn range_projection() {
    let index = LineIndex::new("ab\ncd");
    let range = TextRange::new(1.into(), 4.into());
    assert_eq!(
        index.range(range),
        Range::new(Position::new(0, 1), Position::new(1, 1))
    );
}
