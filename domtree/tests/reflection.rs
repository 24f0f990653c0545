use domtree::{DomTree, Element, JsonRenderer, Member, RowState, TreeConfig};
use serde_json::{Value, json};

fn render(value: Value, skip_auto_expand: bool) -> DomTree<Value> {
    let mut tree = DomTree::new(value).with_renderer(JsonRenderer::default());
    tree.render(Element::new("table"), None, skip_auto_expand);
    tree
}

fn summary(tree: &DomTree<Value>) -> Vec<(String, u16, bool)> {
    tree.members()
        .map(|m| (m.name.clone(), m.level, m.has_children))
        .collect()
}

#[test]
fn test_object_scenario() {
    let mut tree = render(json!({"a": {"x": 1}, "b": 2}), true);
    assert_eq!(
        summary(&tree),
        vec![("a".to_string(), 0, true), ("b".to_string(), 0, false)]
    );

    assert!(tree.expand_object(&json!({"x": 1})));
    assert_eq!(
        summary(&tree),
        vec![
            ("a".to_string(), 0, true),
            ("x".to_string(), 1, false),
            ("b".to_string(), 0, false),
        ]
    );
}

#[test]
fn test_reflected_kinds() {
    let tree = render(json!({"o": {}, "l": [], "s": "t", "n": 1, "b": true, "z": null}), true);
    let kinds: Vec<&str> = tree.members().map(|m| m.kind.as_str()).collect();
    assert_eq!(kinds, vec!["object", "array", "string", "number", "boolean", "null"]);
    assert!(tree.members().all(|m| !m.has_children));
}

#[test]
fn test_arrays_enumerate_indices() {
    let tree = render(json!({"list": [10, [20]]}), false);
    assert_eq!(
        summary(&tree),
        vec![
            ("list".to_string(), 0, true),
            ("0".to_string(), 1, false),
            ("1".to_string(), 1, true),
        ]
    );
}

#[test]
fn test_auto_expand_small_array_root() {
    let tree = render(json!([{"k": 1}, 2]), false);
    assert_eq!(tree.row_count(), 3);
}

#[test]
fn test_no_auto_expand_for_long_array_root() {
    let tree = render(json!([{"k": 1}, 2, 3]), false);
    assert_eq!(tree.row_count(), 3);
    assert!(tree.members().all(|m| m.level == 0));
}

#[test]
fn test_auto_expand_threshold_is_configurable() {
    let mut tree = DomTree::new(json!([{"k": 1}, 2, 3]))
        .with_config(TreeConfig::default().with_auto_expand_max_array_len(5));
    tree.render(Element::new("table"), None, false);
    assert_eq!(tree.row_count(), 4);
}

#[test]
fn test_auto_expand_skips_leaf_first_row() {
    let tree = render(json!({"n": 1, "o": {"k": 1}}), false);
    assert_eq!(tree.row_count(), 2);
}

#[test]
fn test_outline() {
    let tree = render(json!({"a": {"x": 1}, "b": "two"}), false);
    assert_eq!(tree.outline(), "▼ a: Object { x }\n    x: 1\n  b: \"two\"");
}

#[test]
fn test_members_hook_overrides_reflection() {
    let mut tree = DomTree::new(json!({"hidden": 1})).with_members_hook(|value: &Value, level| {
        value.get("hidden").map(|_| {
            vec![Member::new("synthetic", level, json!({"inner": true})).with_children(true)]
        })
    });
    tree.render(Element::new("table"), None, false);

    // The hook answers for the root; the child falls through to reflection.
    let names: Vec<_> = tree.members().map(|m| m.name.clone()).collect();
    assert_eq!(names, vec!["synthetic", "inner"]);
}

#[test]
fn test_update_asks_members_hook_for_children() {
    let mut tree = DomTree::new(json!({"a": 1})).with_members_hook(|value: &Value, level| {
        (*value == json!(1)).then(|| vec![Member::new("digit", level, json!("one"))])
    });
    tree.render(Element::new("table"), None, true);
    let a = tree.get_row(&json!(1)).unwrap();
    assert!(!tree.member(a).unwrap().has_children);

    tree.update_object(&json!(1));
    let a = tree.get_row(&json!(1)).unwrap();
    assert!(tree.member(a).unwrap().has_children);
    assert_eq!(tree.toggle_row(a, false), Some(RowState::Expanded));

    // Still open after another update.
    tree.update_object(&json!(1));
    let a = tree.get_row(&json!(1)).unwrap();
    assert_eq!(tree.row_state(a), Some(RowState::Expanded));
    let names: Vec<_> = tree.members().map(|m| m.name.clone()).collect();
    assert_eq!(names, vec!["a", "digit"]);
}

#[test]
fn test_replace_object_in_reflection_mode() {
    let mut tree = render(json!({"a": {"x": 1}, "b": 2}), false);
    let a = tree.get_row(&json!({"x": 1})).unwrap();
    assert_eq!(tree.row_state(a), Some(RowState::Expanded));

    tree.replace_object(&json!({"x": 1}), json!({"x": 1, "y": 2}));

    assert!(tree.member(a).is_none());
    let a = tree.get_row(&json!({"x": 1, "y": 2})).unwrap();
    assert_eq!(tree.row_state(a), Some(RowState::Expanded));
    let names: Vec<_> = tree.members().map(|m| m.name.clone()).collect();
    assert_eq!(names, vec!["a", "x", "y", "b"]);
}

#[test]
fn test_replace_object_becoming_leaf_collapses() {
    let mut tree = render(json!({"a": {"x": 1}, "b": 2}), false);
    tree.replace_object(&json!({"x": 1}), json!(5));

    assert_eq!(
        summary(&tree),
        vec![("a".to_string(), 0, false), ("b".to_string(), 0, false)]
    );
    let a = tree.get_row(&json!(5)).unwrap();
    assert_eq!(tree.row_state(a), Some(RowState::Collapsed));
    assert_eq!(tree.member(a).unwrap().kind, "number");
}

#[test]
fn test_replace_root() {
    let mut tree = render(json!({"a": 1}), false);
    tree.replace_object(&json!({"a": 1}), json!({"p": 1, "q": 2, "r": 3}));
    assert_eq!(tree.row_count(), 3);
    assert_eq!(tree.root(), &json!({"p": 1, "q": 2, "r": 3}));
}
