//! Click handling and tree events.

use log::debug;

use crate::element::find_element;
use crate::reflect::Reflect;

use super::{DomTree, RowId};

/// Something that happened to the tree, queued for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    /// Depth-0 rows were mounted by a render.
    Render,
    /// Depth-0 rows were regenerated by an update of the root.
    RootUpdate,
    /// Row expanded and its children were mounted.
    Expand(RowId),
    /// Row collapsed, or a pending fetch for it failed.
    Collapse(RowId),
    /// Row is waiting on an asynchronous child fetch.
    Pending(RowId),
    /// Row was replaced in place; the id is the new row's.
    Update(RowId),
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

impl<V: Reflect> DomTree<V> {
    /// Handle a click on the element with `element_id`.
    ///
    /// Clicking a member label toggles its row if the row has children. Any
    /// other click inside the tree is consumed without effect; clicks on
    /// elements outside the tree are ignored.
    pub fn on_click(&mut self, element_id: &str) -> EventResult {
        if let Some(row) = self.label_row(element_id) {
            match self.member(row) {
                Some(member) if member.has_children => {
                    self.toggle_row(row, false);
                }
                Some(_) => {}
                None => debug!("{}: click on stale label {}", self.id, element_id),
            }
            return EventResult::Consumed;
        }

        if find_element(&self.container, element_id).is_some() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}
