//! The lazily expanding object tree.
//!
//! `DomTree<V>` renders one row per visible member of a root value. Rows are
//! expanded on demand: expanding asks the member provider (or, without one,
//! reflection) for the next level and splices the new rows in directly below
//! the parent. Collapsing discards the whole subtree, so re-expanding fetches
//! again.
//!
//! # Example
//!
//! ```
//! use domtree::{DomTree, Element, JsonRenderer};
//! use serde_json::json;
//!
//! let mut tree = DomTree::new(json!({"a": {"x": 1}, "b": 2})).with_renderer(JsonRenderer::default());
//! tree.render(Element::new("table"), None, false);
//!
//! // The first root row is expanded automatically.
//! assert_eq!(tree.outline(), "▼ a: Object { x }\n    x: 1\n  b: 2");
//! ```

mod events;
mod members;
mod pending;
mod state;
mod update;

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

pub use events::{EventResult, TreeEvent};

use crate::config::TreeConfig;
use crate::element::Element;
use crate::member::Member;
use crate::provider::{Deferred, MemberProvider};
use crate::reflect::Reflect;
use crate::rep::{DebugRenderer, ValueRenderer};
use crate::row::RowState;

/// Unique identifier for a tree instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(usize);

impl TreeId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__domtree_{}", self.0)
    }
}

/// Identifies one mounted row. Never reused within a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}", self.0)
    }
}

/// Hook consulted before the provider when fetching members.
///
/// Returning `None` falls through to the provider or reflection.
pub type MembersHook<V> = dyn Fn(&V, u16) -> Option<Vec<Member<V>>>;

/// A mounted row: the member it shows and its expansion state.
#[derive(Debug)]
pub(crate) struct Row<V> {
    pub id: RowId,
    pub member: Member<V>,
    pub state: RowState,
}

/// Who is waiting on an outstanding child fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum FetchOwner {
    /// Depth-0 members of the root, tagged with the render generation.
    Root(u64),
    Row(RowId),
}

/// A lazily expanding tree of members.
///
/// The row list is the source of truth: `rows[i]` always corresponds to the
/// container's `i`-th child element.
pub struct DomTree<V: Reflect> {
    id: TreeId,
    root: V,
    provider: Option<Box<dyn MemberProvider<V>>>,
    renderer: Box<dyn ValueRenderer<V>>,
    members_hook: Option<Box<MembersHook<V>>>,
    config: TreeConfig,

    container: Element,
    rows: Vec<Row<V>>,
    pending: BTreeMap<FetchOwner, Deferred<V>>,
    events: VecDeque<TreeEvent>,

    next_row: u64,
    generation: u64,
    /// Auto-expand still owed to a root fetch that went pending.
    auto_expand_owed: bool,
}

impl<V: Reflect + 'static> DomTree<V> {
    /// Bind a root value in reflection mode. Nothing is rendered yet.
    pub fn new(root: V) -> Self {
        Self {
            id: TreeId::new(),
            root,
            provider: None,
            renderer: Box::new(DebugRenderer::default()),
            members_hook: None,
            config: TreeConfig::default(),
            container: Element::new("table"),
            rows: Vec::new(),
            pending: BTreeMap::new(),
            events: VecDeque::new(),
            next_row: 0,
            generation: 0,
            auto_expand_owed: false,
        }
    }

    /// Bind a root value and a member provider. Nothing is rendered yet.
    pub fn with_provider(root: V, provider: impl MemberProvider<V> + 'static) -> Self {
        let mut tree = Self::new(root);
        tree.provider = Some(Box::new(provider));
        tree
    }
}

impl<V: Reflect> DomTree<V> {
    pub fn with_renderer(mut self, renderer: impl ValueRenderer<V> + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Install a hook that may answer member fetches before the provider.
    pub fn with_members_hook(
        mut self,
        hook: impl Fn(&V, u16) -> Option<Vec<Member<V>>> + 'static,
    ) -> Self {
        self.members_hook = Some(Box::new(hook));
        self
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn root(&self) -> &V {
        &self.root
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// The mounted container element.
    pub fn element(&self) -> &Element {
        &self.container
    }

    /// True until at least one member row has been rendered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Visible row ids in display order.
    pub fn rows(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Visible members in display order.
    pub fn members(&self) -> impl Iterator<Item = &Member<V>> {
        self.rows.iter().map(|r| &r.member)
    }

    pub fn member(&self, row: RowId) -> Option<&Member<V>> {
        self.row_index(row).map(|i| &self.rows[i].member)
    }

    pub fn row_state(&self, row: RowId) -> Option<RowState> {
        self.row_index(row).map(|i| self.rows[i].state)
    }

    /// First row showing `value`.
    pub fn get_row(&self, value: &V) -> Option<RowId> {
        self.rows.iter().find(|r| r.member.value == *value).map(|r| r.id)
    }

    /// First row whose member equals `member`.
    pub fn get_member_row(&self, member: &Member<V>) -> Option<RowId> {
        self.rows.iter().find(|r| r.member == *member).map(|r| r.id)
    }

    /// Direct children of `parent`, or the depth-0 rows for `None`.
    pub fn child_rows(&self, parent: Option<RowId>) -> Vec<RowId> {
        let (start, end, level) = match parent {
            None => (0, self.rows.len(), 0),
            Some(id) => match self.row_index(id) {
                Some(index) => (index + 1, self.subtree_end(index), self.rows[index].member.level + 1),
                None => return Vec::new(),
            },
        };
        self.rows[start..end]
            .iter()
            .filter(|r| r.member.level == level)
            .map(|r| r.id)
            .collect()
    }

    /// Number of child fetches still outstanding.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Take the events queued since the last drain, oldest first.
    ///
    /// At most [`TreeConfig::event_capacity`] events are kept; hosts that
    /// care about every transition should drain after each operation.
    pub fn drain_events(&mut self) -> Vec<TreeEvent> {
        self.events.drain(..).collect()
    }

    /// Queue `event`, dropping the oldest one when the queue is full.
    pub(crate) fn emit(&mut self, event: TreeEvent) {
        let capacity = self.config.event_capacity;
        if capacity == 0 {
            return;
        }
        while self.events.len() >= capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Plain-text rendering of the visible rows.
    pub fn outline(&self) -> String {
        crate::text::outline(&self.container)
    }

    pub(crate) fn row_index(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    /// Index one past the last descendant of the row at `index`: the first
    /// following row at the same or a shallower level.
    pub(crate) fn subtree_end(&self, index: usize) -> usize {
        let level = self.rows[index].member.level;
        self.rows[index + 1..]
            .iter()
            .position(|r| r.member.level <= level)
            .map_or(self.rows.len(), |offset| index + 1 + offset)
    }

    fn next_row_id(&mut self) -> RowId {
        let id = RowId(self.next_row);
        self.next_row += 1;
        id
    }

    fn element_id(&self, row: RowId) -> String {
        format!("{}-row-{}", self.id, row.0)
    }

    /// Parse a label element id back into the row it belongs to.
    fn label_row(&self, element_id: &str) -> Option<RowId> {
        let prefix = format!("{}-row-", self.id);
        element_id
            .strip_prefix(&prefix)?
            .strip_suffix("-label")?
            .parse()
            .ok()
            .map(RowId)
    }
}

impl<V: Reflect> std::fmt::Debug for DomTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomTree")
            .field("id", &self.id)
            .field("root", &self.root)
            .field("rows", &self.rows)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}
