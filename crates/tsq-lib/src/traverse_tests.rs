#![cfg(feature = "lang-javascript")]

use indoc::indoc;
use tsq_langs::tree_sitter::Node;
use tsq_langs::{Grammar, LanguageId};

use crate::traverse::traverse;
use crate::tree_printer::{DEFAULT_INDENT_WIDTH, PrintOptions, print_tree};

fn js(source: &str) -> tsq_langs::tree_sitter::Tree {
    Grammar::load(LanguageId::JavaScript)
        .unwrap()
        .parse(source)
        .unwrap()
}

#[test]
fn visits_every_node_once_in_preorder() {
    let tree = js("function f(a, b) { return a + b; }\nf(1, 2);");
    let root = tree.root_node();

    let mut visited = Vec::new();
    traverse(root, |cursor, depth| {
        let node = cursor.node();
        visited.push((node.id(), node.start_byte(), node.end_byte(), depth));
    });

    assert_eq!(visited.len(), root.descendant_count());

    let mut ids: Vec<_> = visited.iter().map(|v| v.0).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), visited.len());

    // preorder: a node at depth d+1 is always preceded by its parent at depth d
    assert_eq!(visited[0].3, 0);
    for pair in visited.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        assert!(next.3 <= prev.3 + 1);
        if next.3 == prev.3 + 1 {
            assert!(prev.1 <= next.1 && next.2 <= prev.2);
        }
    }
}

fn recursive_preorder(node: Node<'_>, depth: usize, out: &mut Vec<(usize, usize)>) {
    out.push((node.id(), depth));
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        recursive_preorder(child, depth + 1, out);
    }
}

#[test]
fn matches_recursive_preorder() {
    let tree = js("a; b(c, [d]);\nif (e) { f(); } else g;");
    let root = tree.root_node();

    let mut expected = Vec::new();
    recursive_preorder(root, 0, &mut expected);

    let mut visited = Vec::new();
    traverse(root, |cursor, depth| visited.push((cursor.node().id(), depth)));

    assert_eq!(visited, expected);
}

#[test]
fn does_not_leave_the_starting_subtree() {
    let tree = js("a; b;");
    let first = tree.root_node().child(0).unwrap();

    let mut kinds = Vec::new();
    traverse(first, |cursor, depth| kinds.push((cursor.node().kind(), depth)));

    assert_eq!(
        kinds,
        [("expression_statement", 0), ("identifier", 1), (";", 1)]
    );
}

#[test]
fn deep_trees_do_not_overflow() {
    let source = format!("x = {}1{};", "[".repeat(1000), "]".repeat(1000));
    let tree = js(&source);

    let mut count = 0usize;
    let mut max_depth = 0usize;
    traverse(tree.root_node(), |_, depth| {
        count += 1;
        max_depth = max_depth.max(depth);
    });

    assert_eq!(count, tree.root_node().descendant_count());
    assert!(max_depth > 1000);
}

#[test]
fn print_named_nodes() {
    let tree = js("let x = 1;");
    insta::assert_snapshot!(print_tree(tree.root_node(), PrintOptions::default()), @r"
    program [0, 0] - [0, 10]
        lexical_declaration [0, 0] - [0, 10]
            variable_declarator [0, 4] - [0, 9]
                name: identifier [0, 4] - [0, 5]
                value: number [0, 8] - [0, 9]
    ");
}

#[test]
fn default_indent_is_four_spaces() {
    assert_eq!(PrintOptions::default().indent_width, DEFAULT_INDENT_WIDTH);
    assert_eq!(DEFAULT_INDENT_WIDTH, 4);

    let printed = print_tree(js("x;").root_node(), PrintOptions::default());
    assert!(printed.contains("\n    expression_statement [0, 0] - [0, 2]\n"));
    assert!(printed.contains("\n        identifier [0, 0] - [0, 1]"));
}

#[test]
fn print_raw_nodes_with_custom_indent() {
    let tree = js("x;");
    let options = PrintOptions {
        indent_width: 2,
        ..PrintOptions::raw()
    };
    insta::assert_snapshot!(print_tree(tree.root_node(), options), @r"
    program [0, 0] - [0, 2]
      expression_statement [0, 0] - [0, 2]
        identifier [0, 0] - [0, 1]
        ; [0, 1] - [0, 2]
    ");
}

#[test]
fn print_positions_span_lines() {
    let tree = js(indoc! {"
        f(
          1
        );
    "});
    let printed = print_tree(tree.root_node(), PrintOptions::default());
    assert!(printed.contains("arguments: arguments [0, 1] - [2, 1]"));
}
