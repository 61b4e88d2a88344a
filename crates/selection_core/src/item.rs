//! Item and menu-entry records declared by the host page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable candidate: a stable value, a display label, and flags.
pub struct SelectItem {
    /// Stable identity committed on selection.
    pub value: String,
    /// Human-readable label shown in the field and the overlay.
    pub label: String,
    /// Disabled items stay visible in the list but never take focus.
    #[serde(default)]
    pub disabled: bool,
    /// Opaque icon token resolved by the host's icon subsystem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display-only keyboard-shortcut hint for menu entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

impl SelectItem {
    /// Creates an enabled item with no icon or shortcut.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            icon: None,
            shortcut: None,
        }
    }

    /// Marks the item as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Attaches an icon token.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Attaches a shortcut hint.
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A menu entry: either a selectable item or a purely visual divider.
pub enum MenuEntry {
    /// Selectable (or disabled) menu item.
    Item(SelectItem),
    /// Visual divider; never focusable, never selectable.
    Divider,
}

impl MenuEntry {
    /// Returns the inner item for `Item` entries.
    pub fn item(&self) -> Option<&SelectItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Divider => None,
        }
    }

    /// Whether keyboard focus may land on this entry.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Item(item) if !item.disabled)
    }
}

impl From<SelectItem> for MenuEntry {
    fn from(item: SelectItem) -> Self {
        Self::Item(item)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn divider_is_never_selectable() {
        assert!(!MenuEntry::Divider.is_selectable());
        assert!(MenuEntry::from(SelectItem::new("a", "A")).is_selectable());
        assert!(!MenuEntry::from(SelectItem::new("a", "A").disabled()).is_selectable());
    }

    #[test]
    fn item_serde_round_trip_keeps_optional_fields() {
        let item = SelectItem::new("copy", "Copy")
            .with_icon("clipboard")
            .with_shortcut("Ctrl+C");
        let json = serde_json::to_string(&item).expect("serialize");
        let back: SelectItem = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(item, back);
    }
}
