//! Depth-first preorder walk over a syntax tree.
//!
//! The walk drives a single [`TreeCursor`] with an explicit depth counter, so
//! arbitrarily deep trees never grow the call stack.

use tsq_langs::tree_sitter::{Node, TreeCursor};

/// Visits every node under (and including) `root` exactly once.
///
/// A node is visited before its descendants, and its subtree is finished
/// before its next sibling. The visitor receives the cursor positioned on the
/// current node plus its depth relative to `root`; it must not move the
/// cursor.
pub fn traverse<'tree>(root: Node<'tree>, mut visit: impl FnMut(&TreeCursor<'tree>, usize)) {
    let mut cursor = root.walk();
    let mut depth = 0usize;

    loop {
        visit(&cursor, depth);

        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }

        loop {
            if depth == 0 {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            cursor.goto_parent();
            depth -= 1;
        }
    }
}
