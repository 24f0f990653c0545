//! Generic property enumeration for values shown without a provider.

use std::fmt::Debug;

use serde_json::Value;

/// Values a [`DomTree`](crate::DomTree) can hold.
///
/// The defaults describe an opaque handle with no enumerable properties,
/// which is all a tree needs when a provider supplies the children.
pub trait Reflect: Clone + PartialEq + Debug {
    /// Own enumerable properties, in enumeration order.
    fn properties(&self) -> Vec<(String, Self)> {
        Vec::new()
    }

    fn is_string(&self) -> bool {
        false
    }

    /// Element count for array-like values.
    fn array_len(&self) -> Option<usize> {
        None
    }

    /// Member kind used for this value in reflection mode.
    fn kind(&self) -> &'static str {
        "object"
    }
}

/// Whether reflection treats `value` as expandable: any non-string value
/// with at least one enumerable property.
pub fn has_properties<V: Reflect>(value: &V) -> bool {
    !value.is_string() && !value.properties().is_empty()
}

impl Reflect for Value {
    fn properties(&self) -> Vec<(String, Self)> {
        match self {
            Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn is_string(&self) -> bool {
        self.is_string()
    }

    fn array_len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
