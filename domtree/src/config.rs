//! Tree configuration

use serde::Deserialize;

/// Member kind used when a provider does not classify a value.
pub const DEFAULT_KIND: &str = "generic";

/// Events kept between drains by default.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Configuration for a [`DomTree`](crate::DomTree).
///
/// # Example
///
/// ```
/// use domtree::TreeConfig;
///
/// let config = TreeConfig::default()
///     .with_auto_expand_max_array_len(10)
///     .with_indent_width(8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Array-like roots longer than this are not auto-expanded on render.
    ///
    /// Default: 2
    pub auto_expand_max_array_len: usize,

    /// Kind assigned to members the provider does not classify.
    ///
    /// Default: `"generic"`
    pub default_kind: String,

    /// Label indentation per level, written to the row's `style` attribute.
    ///
    /// Default: 16
    pub indent_width: u16,

    /// Most events kept for [`drain_events`](crate::DomTree::drain_events).
    /// Older events are dropped once the queue is full; 0 records none.
    ///
    /// Default: 256
    pub event_capacity: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            auto_expand_max_array_len: 2,
            default_kind: DEFAULT_KIND.to_string(),
            indent_width: 16,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl TreeConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auto-expand array length threshold.
    pub fn with_auto_expand_max_array_len(mut self, len: usize) -> Self {
        self.auto_expand_max_array_len = len;
        self
    }

    /// Sets the default member kind.
    pub fn with_default_kind(mut self, kind: impl Into<String>) -> Self {
        self.default_kind = kind.into();
        self
    }

    /// Sets the per-level indentation.
    pub fn with_indent_width(mut self, width: u16) -> Self {
        self.indent_width = width;
        self
    }

    /// Sets how many undrained events are kept.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}
