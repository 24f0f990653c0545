//! Value reps: the display fragment shown in a row's value cell.

use std::fmt::Debug;

use serde_json::Value;

use crate::element::Element;
use crate::text::truncate_to_width;

/// Default crop width for string previews.
pub const DEFAULT_CROP: usize = 50;

/// Number of object keys shown in a short preview.
const PREVIEW_KEYS: usize = 3;

/// Display fragments for a value.
///
/// Tree rows prefer the short tag when one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rep {
    pub tag: Element,
    pub short_tag: Option<Element>,
}

impl Rep {
    pub fn new(tag: Element) -> Self {
        Self {
            tag,
            short_tag: None,
        }
    }

    pub fn with_short(mut self, short_tag: Element) -> Self {
        self.short_tag = Some(short_tag);
        self
    }

    /// The fragment a tree row mounts.
    pub fn into_row_fragment(self) -> Element {
        self.short_tag.unwrap_or(self.tag)
    }
}

/// Maps values to display fragments.
pub trait ValueRenderer<V> {
    fn rep(&self, value: &V) -> Rep;
}

/// Fallback renderer for any `Debug` value.
#[derive(Debug, Clone)]
pub struct DebugRenderer {
    crop: usize,
}

impl Default for DebugRenderer {
    fn default() -> Self {
        Self { crop: DEFAULT_CROP }
    }
}

impl DebugRenderer {
    pub fn with_crop(crop: usize) -> Self {
        Self { crop }
    }
}

impl<V: Debug> ValueRenderer<V> for DebugRenderer {
    fn rep(&self, value: &V) -> Rep {
        let text = truncate_to_width(&format!("{value:?}"), self.crop);
        Rep::new(Element::text(text).class("objectBox"))
    }
}

/// Renderer for `serde_json::Value` trees.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    crop: usize,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { crop: DEFAULT_CROP }
    }
}

impl JsonRenderer {
    pub fn with_crop(crop: usize) -> Self {
        Self { crop }
    }

    fn object_box(kind: &str, text: impl Into<String>) -> Element {
        Element::text(text)
            .class("objectBox")
            .class(format!("objectBox-{kind}"))
    }
}

impl ValueRenderer<Value> for JsonRenderer {
    fn rep(&self, value: &Value) -> Rep {
        match value {
            Value::Null => Rep::new(Self::object_box("null", "null")),
            Value::Bool(b) => Rep::new(Self::object_box("boolean", b.to_string())),
            Value::Number(n) => Rep::new(Self::object_box("number", n.to_string())),
            Value::String(s) => {
                let full = format!("\"{s}\"");
                let short = truncate_to_width(&full, self.crop);
                Rep::new(Self::object_box("string", full))
                    .with_short(Self::object_box("string", short))
            }
            Value::Array(items) => {
                let short = format!("Array[{}]", items.len());
                let full = truncate_to_width(&value.to_string(), self.crop);
                Rep::new(Self::object_box("array", full)).with_short(Self::object_box("array", short))
            }
            Value::Object(map) => {
                let mut keys: Vec<&str> = map.keys().take(PREVIEW_KEYS).map(String::as_str).collect();
                if map.len() > PREVIEW_KEYS {
                    keys.push("…");
                }
                let preview = if keys.is_empty() {
                    "Object".to_string()
                } else {
                    format!("Object {{ {} }}", keys.join(", "))
                };
                let short = truncate_to_width(&preview, self.crop);
                Rep::new(Self::object_box("object", "Object"))
                    .with_short(Self::object_box("object", short))
            }
        }
    }
}

type Predicate<V> = Box<dyn Fn(&V) -> bool>;
type RepFn<V> = Box<dyn Fn(&V) -> Rep>;

/// Ordered list of predicate-matched reps with a fallback renderer.
///
/// The first registered rep whose predicate accepts a value wins.
pub struct RepRegistry<V> {
    reps: Vec<(Predicate<V>, RepFn<V>)>,
    fallback: Box<dyn ValueRenderer<V>>,
}

impl<V: Debug + 'static> Default for RepRegistry<V> {
    fn default() -> Self {
        Self::new(DebugRenderer::default())
    }
}

impl<V> RepRegistry<V> {
    pub fn new(fallback: impl ValueRenderer<V> + 'static) -> Self {
        Self {
            reps: Vec::new(),
            fallback: Box::new(fallback),
        }
    }

    pub fn register(
        mut self,
        accepts: impl Fn(&V) -> bool + 'static,
        rep: impl Fn(&V) -> Rep + 'static,
    ) -> Self {
        self.reps.push((Box::new(accepts), Box::new(rep)));
        self
    }

    pub fn len(&self) -> usize {
        self.reps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reps.is_empty()
    }
}

impl<V> ValueRenderer<V> for RepRegistry<V> {
    fn rep(&self, value: &V) -> Rep {
        self.reps
            .iter()
            .find(|(accepts, _)| accepts(value))
            .map(|(_, rep)| rep(value))
            .unwrap_or_else(|| self.fallback.rep(value))
    }
}
