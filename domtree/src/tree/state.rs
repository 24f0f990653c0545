//! Rendering and the per-row expand/collapse state machine.

use log::debug;

use crate::element::Element;
use crate::member::Member;
use crate::reflect::Reflect;
use crate::row::{RowState, render_row};

use super::members::MemberFetch;
use super::{DomTree, FetchOwner, Row, RowId, TreeEvent};

impl<V: Reflect> DomTree<V> {
    /// Mount the depth-0 rows into `container`.
    ///
    /// `container`'s children are cleared first. A supplied `input` becomes
    /// the new root. Unless `skip_auto_expand` is set, or the root is
    /// array-like and longer than the configured threshold, the first row is
    /// expanded.
    pub fn render(&mut self, mut container: Element, input: Option<V>, skip_auto_expand: bool) -> &Element {
        if let Some(input) = input {
            self.root = input;
        }

        container.clear_children();
        self.container = container;
        self.rows.clear();

        let auto_expand = !skip_auto_expand
            && !self
                .root
                .array_len()
                .is_some_and(|len| len > self.config.auto_expand_max_array_len);

        self.load_root(auto_expand);
        self.emit(TreeEvent::Render);
        &self.container
    }

    /// Fetch and mount the root's members, replacing every current row.
    pub(crate) fn load_root(&mut self, auto_expand: bool) {
        self.generation += 1;
        self.remove_rows(0, self.rows.len());
        self.auto_expand_owed = false;

        let root = self.root.clone();
        match self.get_members(&root, 0) {
            MemberFetch::Ready(members) => {
                self.mount_members(0, members);
                if auto_expand {
                    self.expand_first_row();
                }
            }
            MemberFetch::Pending(deferred) => {
                debug!("{}: root members pending", self.id);
                self.pending.insert(FetchOwner::Root(self.generation), deferred);
                self.auto_expand_owed = auto_expand;
            }
        }
    }

    pub(crate) fn expand_first_row(&mut self) {
        if let Some(first) = self.rows.first().map(|r| r.id) {
            self.toggle_row(first, true);
        }
    }

    /// Toggle a row's expansion state.
    ///
    /// - collapsed rows with children expand (or go pending);
    /// - expanded rows collapse, unless `force_open` is set;
    /// - pending rows are left alone: the outstanding fetch governs.
    ///
    /// Returns the row's resulting state, or `None` if it is not mounted.
    pub fn toggle_row(&mut self, row: RowId, force_open: bool) -> Option<RowState> {
        let Some(index) = self.row_index(row) else {
            debug!("{}: toggle of unmounted {}", self.id, row);
            return None;
        };

        let state = match self.rows[index].state {
            RowState::Pending => {
                debug!("{}: {} already has a fetch outstanding", self.id, row);
                RowState::Pending
            }
            RowState::Expanded if force_open => RowState::Expanded,
            RowState::Expanded => {
                self.collapse_at(index);
                RowState::Collapsed
            }
            RowState::Collapsed => self.expand_at(index),
        };
        Some(state)
    }

    /// Expand the row showing `member`. Returns false if no row matches.
    pub fn expand_member(&mut self, member: &Member<V>) -> bool {
        match self.get_member_row(member) {
            Some(row) => self.toggle_row(row, true).is_some(),
            None => {
                debug!("{}: no row for member {:?}", self.id, member.name);
                false
            }
        }
    }

    /// Expand the row showing `value`. Returns false if no row matches.
    pub fn expand_object(&mut self, value: &V) -> bool {
        match self.get_row(value) {
            Some(row) => self.toggle_row(row, true).is_some(),
            None => {
                debug!("{}: no row for {:?}", self.id, value);
                false
            }
        }
    }

    /// Collapse the row showing `value` if it is expanded. Returns false if
    /// no row matches.
    pub fn collapse_object(&mut self, value: &V) -> bool {
        let Some(row) = self.get_row(value) else {
            debug!("{}: no row for {:?}", self.id, value);
            return false;
        };
        if self.row_state(row) == Some(RowState::Expanded) {
            self.toggle_row(row, false);
        }
        true
    }

    /// Expand every expandable row above `max_level`, walking the tree
    /// top-down so newly mounted rows are visited too. Rows whose fetch goes
    /// pending are left pending.
    pub fn expand_all(&mut self, max_level: u16) {
        let mut index = 0;
        while index < self.rows.len() {
            let row = &self.rows[index];
            if row.state == RowState::Collapsed && row.member.has_children && row.member.level < max_level {
                self.expand_at(index);
            }
            index += 1;
        }
    }

    pub(crate) fn expand_at(&mut self, index: usize) -> RowState {
        let row = &self.rows[index];
        if !row.member.has_children {
            return RowState::Collapsed;
        }

        let id = row.id;
        let value = row.member.value.clone();
        let level = row.member.level + 1;

        match self.get_members(&value, level) {
            MemberFetch::Ready(members) => {
                self.set_state(index, RowState::Expanded);
                self.mount_members(index + 1, members);
                self.emit(TreeEvent::Expand(id));
                RowState::Expanded
            }
            MemberFetch::Pending(deferred) => {
                self.set_state(index, RowState::Pending);
                self.pending.insert(FetchOwner::Row(id), deferred);
                self.emit(TreeEvent::Pending(id));
                RowState::Pending
            }
        }
    }

    pub(crate) fn collapse_at(&mut self, index: usize) {
        let end = self.subtree_end(index);
        self.remove_rows(index + 1, end);
        self.set_state(index, RowState::Collapsed);
        self.emit(TreeEvent::Collapse(self.rows[index].id));
    }

    pub(crate) fn set_state(&mut self, index: usize, state: RowState) {
        let row = &mut self.rows[index];
        row.state = state;
        row.member.open = state == RowState::Expanded;
        self.rerender(index);
    }

    /// Mount one row per member starting at `at`, in order.
    pub(crate) fn mount_members(&mut self, at: usize, members: Vec<Member<V>>) {
        for (offset, member) in members.into_iter().enumerate() {
            let id = self.next_row_id();
            self.insert_row(
                at + offset,
                Row {
                    id,
                    member,
                    state: RowState::Collapsed,
                },
            );
        }
    }

    pub(crate) fn insert_row(&mut self, index: usize, row: Row<V>) {
        let element = self.render_element(&row);
        self.container.children_mut().insert(index, element);
        self.rows.insert(index, row);
    }

    /// Remove rows `start..end`, discarding their members and any fetch
    /// they were waiting on.
    pub(crate) fn remove_rows(&mut self, start: usize, end: usize) {
        if start < end {
            self.rows.drain(start..end);
            self.container.children_mut().drain(start..end);
        }
        self.prune_pending();
    }

    fn rerender(&mut self, index: usize) {
        let element = self.render_element(&self.rows[index]);
        self.container.children_mut()[index] = element;
    }

    fn render_element(&self, row: &Row<V>) -> Element {
        let rep = self.renderer.rep(&row.member.value);
        render_row(&self.element_id(row.id), &row.member, row.state, rep, &self.config)
    }
}
