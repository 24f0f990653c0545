//! Display-width helpers and the plain-text outline of a mounted tree.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::element::Element;
use crate::row::{CLASS_HAS_CHILDREN, CLASS_OPENED, CLASS_PENDING, LEVEL_ATTR};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let ellipsis_width = 1;
    let target_width = max_width.saturating_sub(ellipsis_width);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

/// Render the rows of a mounted tree container as indented text, one line
/// per row.
///
/// ```text
/// ▼ a: Object
///     x: 1
///   b: 2
/// ```
pub fn outline(container: &Element) -> String {
    container
        .child_elements()
        .iter()
        .map(outline_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn outline_row(row: &Element) -> String {
    let level: usize = row
        .attr_value(LEVEL_ATTR)
        .and_then(|l| l.parse().ok())
        .unwrap_or(0);

    let twisty = if row.has_class(CLASS_PENDING) {
        "… "
    } else if row.has_class(CLASS_OPENED) {
        "▼ "
    } else if row.has_class(CLASS_HAS_CHILDREN) {
        "▶ "
    } else {
        "  "
    };

    let mut cells = row.child_elements().iter().map(Element::text_content);
    let label = cells.next().unwrap_or_default();
    let value = cells.next().unwrap_or_default();

    format!("{}{}{}: {}", "  ".repeat(level), twisty, label, value)
}
