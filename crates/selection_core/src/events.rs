//! Host-facing event payloads shared across widget state machines.

use crate::item::SelectItem;

/// Payload of the `change` event fired by single-value widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDetail {
    /// Committed value.
    pub value: String,
    /// Display label of the committed item.
    pub label: String,
}

/// Payload of the `select` event fired by menus and the command palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectDetail {
    /// The chosen item.
    pub item: SelectItem,
    /// Index of the chosen entry over the full entry list (dividers count).
    pub index: usize,
}
