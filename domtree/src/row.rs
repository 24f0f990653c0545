//! Row rendering.

use crate::config::TreeConfig;
use crate::element::Element;
use crate::member::Member;
use crate::rep::Rep;

pub const CLASS_ROW: &str = "memberRow";
pub const CLASS_HAS_CHILDREN: &str = "hasChildren";
pub const CLASS_OPENED: &str = "opened";
pub const CLASS_PENDING: &str = "pending";
pub const CLASS_LABEL_CELL: &str = "memberLabelCell";
pub const CLASS_LABEL: &str = "memberLabel";
pub const CLASS_VALUE_CELL: &str = "memberValueCell";
pub const LEVEL_ATTR: &str = "level";

/// Expansion state of a mounted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowState {
    #[default]
    Collapsed,
    Expanded,
    /// Children were requested and have not arrived yet.
    Pending,
}

/// Element id of a row's clickable label.
pub fn label_id(row_id: &str) -> String {
    format!("{row_id}-label")
}

/// Build the element for one row.
///
/// The row carries `level` as an attribute and its state as classes
/// (`hasChildren`, `opened`, `pending`), with a label cell followed by a
/// value cell holding the rep fragment.
pub fn render_row<V>(
    row_id: &str,
    member: &Member<V>,
    state: RowState,
    rep: Rep,
    config: &TreeConfig,
) -> Element {
    let indent = u32::from(member.level) * u32::from(config.indent_width);

    let label = Element::text(member.name.clone())
        .id(label_id(row_id))
        .class(CLASS_LABEL)
        .class(format!("{}Label", member.kind))
        .clickable(member.has_children);

    let label_cell = Element::new("td")
        .id(format!("{row_id}-label-cell"))
        .class(CLASS_LABEL_CELL)
        .attr("style", format!("padding-left: {indent}px"))
        .child(label);

    let value_cell = Element::new("td")
        .id(format!("{row_id}-value"))
        .class(CLASS_VALUE_CELL)
        .child(rep.into_row_fragment());

    let mut row = Element::new("tr")
        .id(row_id)
        .class(CLASS_ROW)
        .class(format!("{}Row", member.kind))
        .attr(LEVEL_ATTR, member.level.to_string())
        .child(label_cell)
        .child(value_cell);

    row.toggle_class(CLASS_HAS_CHILDREN, member.has_children);
    row.toggle_class(CLASS_OPENED, state == RowState::Expanded);
    row.toggle_class(CLASS_PENDING, state == RowState::Pending);
    row
}
