//! Expanding rows by dotted member path (`a.b.0`).

use domtree::{DomTree, Reflect, RowId};
use log::warn;

/// Expand every row along `path`, starting from the depth-0 rows.
///
/// Returns the row the path ends at, or `None` if a segment matched no
/// visible child.
pub fn expand_path<V: Reflect>(tree: &mut DomTree<V>, path: &str) -> Option<RowId> {
    let mut parent = None;

    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let Some(row) = tree
            .child_rows(parent)
            .into_iter()
            .find(|r| tree.member(*r).is_some_and(|m| m.name == segment))
        else {
            warn!("no member {segment:?} on path {path:?}");
            return None;
        };
        tree.toggle_row(row, true);
        parent = Some(row);
    }

    parent
}
