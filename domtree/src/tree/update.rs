//! Re-rendering rows in place when their values change.

use log::{debug, warn};

use crate::error::TreeError;
use crate::reflect::Reflect;
use crate::row::RowState;

use super::{DomTree, Row, TreeEvent};

impl<V: Reflect> DomTree<V> {
    /// Re-render the row showing `value`.
    ///
    /// For the root, the depth-0 members are fetched again and remounted.
    /// Otherwise the row is replaced by a fresh one, its subtree dropped, and
    /// it is re-expanded if it was open and still has children. Faults are
    /// logged, never returned.
    pub fn update_object(&mut self, value: &V) {
        if let Err(e) = self.try_update_object(value) {
            warn!("{}: update failed: {}", self.id, e);
        }
    }

    /// Swap `old` for `new` (as the root, or in the first row showing it),
    /// then update it.
    pub fn replace_object(&mut self, old: &V, new: V) {
        if *old == self.root {
            self.root = new;
            self.refresh_root();
            return;
        }

        match self.get_row(old).and_then(|row| self.row_index(row)) {
            Some(index) => {
                self.rows[index].member.value = new;
                if let Err(e) = self.update_row(index) {
                    warn!("{}: update failed: {}", self.id, e);
                }
            }
            None => debug!("{}: no row for {:?}", self.id, old),
        }
    }

    fn try_update_object(&mut self, value: &V) -> Result<(), TreeError> {
        if *value == self.root {
            self.refresh_root();
            return Ok(());
        }

        let row = self
            .get_row(value)
            .ok_or_else(|| TreeError::RowNotFound(format!("{value:?}")))?;
        let index = self.row_index(row).ok_or(TreeError::NotMounted(row))?;
        self.update_row(index)
    }

    fn update_row(&mut self, index: usize) -> Result<(), TreeError> {
        let was_open = self.rows[index].state != RowState::Collapsed;
        let level = self.rows[index].member.level + 1;
        let has_children = self.value_has_children(&self.rows[index].member.value, level)?;

        let mut member = self.rows[index].member.clone();
        member.has_children = has_children;
        member.kind = self.value_kind(&member.value);
        member.open = false;

        // Mount the replacement first, then drop the old row with its subtree.
        let id = self.next_row_id();
        self.insert_row(
            index,
            Row {
                id,
                member,
                state: RowState::Collapsed,
            },
        );
        let old = index + 1;
        let end = self.subtree_end(old);
        self.remove_rows(old, end);

        if was_open && has_children {
            self.expand_at(index);
        }
        self.emit(TreeEvent::Update(id));
        Ok(())
    }

    /// Regenerate the depth-0 rows from the current root.
    fn refresh_root(&mut self) {
        self.load_root(false);
        self.emit(TreeEvent::RootUpdate);
    }
}
