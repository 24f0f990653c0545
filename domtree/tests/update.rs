mod common;

use common::{GraphProvider, Handle, names, rendered, row};
use domtree::{RowState, TreeEvent};

#[test]
fn test_update_root_remounts_member_list() {
    let provider = GraphProvider::new(&[("root", &["a", "b"]), ("a", &["a1"])]);
    let mut tree = rendered("root", &provider);
    tree.toggle_row(row(&tree, "a"), false);
    assert_eq!(tree.row_count(), 3);

    provider.set_children("root", &["p", "q", "r", "s"]);
    tree.update_object(&Handle("root"));
    assert_eq!(names(&tree), vec!["p", "q", "r", "s"]);

    provider.set_children("root", &["only"]);
    tree.update_object(&Handle("root"));
    assert_eq!(tree.row_count(), 1);
    assert!(tree.drain_events().contains(&TreeEvent::RootUpdate));
}

#[test]
fn test_update_expanded_row_refetches_children() {
    let provider = GraphProvider::new(&[("root", &["a", "b"]), ("a", &["a1", "a2"]), ("a1", &["deep"])]);
    let mut tree = rendered("root", &provider);
    let old = row(&tree, "a");
    tree.toggle_row(old, false);
    tree.toggle_row(row(&tree, "a1"), false);

    provider.set_children("a", &["a3"]);
    tree.update_object(&Handle("a"));

    assert!(tree.member(old).is_none());
    let new = row(&tree, "a");
    assert_ne!(new, old);
    assert_eq!(tree.row_state(new), Some(RowState::Expanded));
    assert_eq!(names(&tree), vec!["a", "a3", "b"]);
    assert_eq!(tree.element().child_elements().len(), 3);
}

#[test]
fn test_update_collapsed_row_stays_collapsed() {
    let provider = GraphProvider::new(&[("root", &["a", "b"]), ("a", &["a1"])]);
    let mut tree = rendered("root", &provider);

    tree.update_object(&Handle("a"));

    assert_eq!(tree.row_state(row(&tree, "a")), Some(RowState::Collapsed));
    assert_eq!(names(&tree), vec!["a", "b"]);
    assert_eq!(provider.fetch_count("a"), 0);
}

#[test]
fn test_update_row_that_lost_children_collapses() {
    let provider = GraphProvider::new(&[("root", &["a", "b"]), ("a", &["a1"])]);
    let mut tree = rendered("root", &provider);
    tree.toggle_row(row(&tree, "a"), false);

    provider.set_children("a", &[]);
    tree.update_object(&Handle("a"));

    let a = row(&tree, "a");
    assert_eq!(tree.row_state(a), Some(RowState::Collapsed));
    assert!(!tree.member(a).unwrap().has_children);
    assert!(!tree.element().child_elements()[0].has_class("hasChildren"));
    assert_eq!(names(&tree), vec!["a", "b"]);
}

#[test]
fn test_update_row_that_gained_children() {
    let provider = GraphProvider::new(&[("root", &["a", "b"])]);
    let mut tree = rendered("root", &provider);
    assert!(!tree.member(row(&tree, "b")).unwrap().has_children);

    provider.set_children("b", &["b1"]);
    tree.update_object(&Handle("b"));

    let b = row(&tree, "b");
    assert!(tree.member(b).unwrap().has_children);
    assert_eq!(tree.toggle_row(b, false), Some(RowState::Expanded));
    assert_eq!(names(&tree), vec!["a", "b", "b1"]);
}

#[test]
fn test_update_preserves_position_and_level() {
    let provider = GraphProvider::new(&[("root", &["a", "b", "c"]), ("b", &["b1", "b2"])]);
    let mut tree = rendered("root", &provider);
    tree.toggle_row(row(&tree, "b"), false);

    tree.update_object(&Handle("b1"));

    assert_eq!(names(&tree), vec!["a", "b", "b1", "b2", "c"]);
    assert_eq!(tree.member(row(&tree, "b1")).unwrap().level, 1);
}

#[test]
fn test_update_faults_are_contained() {
    let provider = GraphProvider::new(&[("root", &["a", "b"]), ("a", &["a1"])]);
    let mut tree = rendered("root", &provider);
    let before = tree.rows();

    tree.update_object(&Handle("missing"));
    assert_eq!(tree.rows(), before);

    provider.fail("a");
    tree.update_object(&Handle("a"));
    assert_eq!(tree.rows(), before);
}

#[test]
fn test_update_pending_row_issues_fresh_fetch() {
    let provider = GraphProvider::new(&[("root", &["slow"])]);
    provider.defer("slow");
    let mut tree = rendered("root", &provider);
    let old = row(&tree, "slow");
    tree.toggle_row(old, false);

    tree.update_object(&Handle("slow"));
    let new = row(&tree, "slow");
    assert_eq!(tree.row_state(new), Some(RowState::Pending));
    assert_eq!(provider.fetch_count("slow"), 2);

    // The first fetch belongs to a row that no longer exists.
    provider.take_resolver("slow").unwrap().resolve(vec![Handle("stale")]);
    tree.poll_pending();
    assert_eq!(names(&tree), vec!["slow"]);

    provider.take_resolver("slow").unwrap().resolve(vec![Handle("fresh")]);
    tree.poll_pending();
    assert_eq!(names(&tree), vec!["slow", "fresh"]);
}
