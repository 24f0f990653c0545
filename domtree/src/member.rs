//! The record backing one visible tree row.

use crate::config::DEFAULT_KIND;

/// One visible tree row's data.
///
/// Members are created when their parent is expanded and discarded when the
/// row is collapsed away. A member's `level` never changes after creation.
#[derive(Debug, Clone)]
pub struct Member<V> {
    /// Display key.
    pub name: String,
    /// Classification tag used for styling.
    pub kind: String,
    /// Depth in the tree (0 = direct children of the root).
    pub level: u16,
    /// Whether the row can be expanded. Advisory; corrected on update.
    pub has_children: bool,
    /// The underlying value.
    pub value: V,
    /// Mirrors the row's expansion state at render time.
    pub open: bool,
}

impl<V> Member<V> {
    /// Create a leaf member of the default kind.
    pub fn new(name: impl Into<String>, level: u16, value: V) -> Self {
        Self {
            name: name.into(),
            kind: DEFAULT_KIND.to_string(),
            level,
            has_children: false,
            value,
            open: false,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_children(mut self, has_children: bool) -> Self {
        self.has_children = has_children;
        self
    }
}

// `open` is render state, not identity.
impl<V: PartialEq> PartialEq for Member<V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.level == other.level
            && self.has_children == other.has_children
            && self.value == other.value
    }
}
