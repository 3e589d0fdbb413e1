use indoc::indoc;

use crate::json::JsonErrorKind;
use crate::node_types::{SchemaError, index_node_types};

fn describe(text: &str) -> String {
    let nodes = index_node_types(text).unwrap();
    nodes
        .iter()
        .map(|n| {
            format!(
                "{} named={} | {} | {}",
                n.ty.value,
                n.named.value,
                &text[n.ty.offset..n.ty.offset + n.ty.length],
                &text[n.named.offset..n.named.offset + n.named.length],
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn extracts_type_and_named_with_property_spans() {
    let text = indoc! {r#"
        [
          {"type": "identifier", "named": true},
          {"type": "(", "named": false, "fields": {}}
        ]
    "#};

    insta::assert_snapshot!(describe(text), @r#"
    identifier named=true | "type": "identifier" | "named": true
    ( named=false | "type": "(" | "named": false
    "#);
}

#[test]
fn element_span_reconstructs_source() {
    let text = indoc! {r#"
        [
          {
            "type": "program",
            "named": true,
            "children": {"multiple": true, "required": false, "types": []}
          },
          {"type": "ü", "named": false}
        ]
    "#};

    let nodes = index_node_types(text).unwrap();
    assert_eq!(nodes.len(), 2);
    assert!(text[nodes[0].offset..nodes[0].offset + nodes[0].length].starts_with('{'));
    assert!(text[nodes[0].offset..nodes[0].offset + nodes[0].length].ends_with('}'));
    assert_eq!(
        &text[nodes[1].offset..nodes[1].offset + nodes[1].length],
        r#"{"type": "ü", "named": false}"#
    );
    assert_eq!(usize::from(nodes[1].range().len()), nodes[1].length);
}

#[test]
fn malformed_elements_are_dropped() {
    let text = indoc! {r#"
        [
          {"type": "a", "named": true},
          {"type": "missing_named"},
          {"named": true},
          {"type": 1, "named": true},
          {"type": "b", "named": "yes"},
          "not an object",
          [],
          {"type": "c", "named": false}
        ]
    "#};

    let nodes = index_node_types(text).unwrap();
    let types: Vec<_> = nodes.iter().map(|n| n.ty.value.as_str()).collect();
    assert_eq!(types, ["a", "c"]);
}

#[test]
fn all_malformed_elements_yield_empty_list() {
    let nodes = index_node_types(r#"[1, 2, {"type": "x"}]"#).unwrap();
    assert!(nodes.is_empty());
}

#[test]
fn duplicate_keys_use_first_occurrence() {
    let nodes = index_node_types(r#"[{"type": "first", "named": true, "type": "second"}]"#).unwrap();
    assert_eq!(nodes[0].ty.value, "first");
}

#[test]
fn structural_failures() {
    assert_eq!(index_node_types("{}"), Err(SchemaError::RootNotArray));
    assert_eq!(index_node_types(r#""x""#), Err(SchemaError::RootNotArray));
    assert_eq!(index_node_types(" [ ] "), Err(SchemaError::EmptyArray));

    let Err(SchemaError::Json(err)) = index_node_types(r#"[{"type": "a",}]"#) else {
        panic!("expected a JSON error");
    };
    assert_eq!(err.kind, JsonErrorKind::ExpectedPropertyName);
    assert_eq!(err.offset, 14);
}

#[test]
fn schema_error_display() {
    let err = index_node_types("[").unwrap_err();
    assert_eq!(err.to_string(), "invalid JSON: unexpected end of input at offset 1");
    assert_eq!(SchemaError::RootNotArray.to_string(), "root node must be an array");
}
