//! Composite selection widgets wiring reducer state to the DOM.

use std::sync::atomic::{AtomicU64, Ordering};

mod combobox;
mod context_menu;
mod dropdown;
mod menu;
mod multi_select;
mod palette;

pub use combobox::FilterableCombobox;
pub use context_menu::PointerContextMenu;
pub use dropdown::SingleSelectDropdown;
pub use menu::TriggerDropdownMenu;
pub use multi_select::MultiSelectTagInput;
pub use palette::CommandPalette;

/// Allocates a document-unique DOM id for one widget instance; hosts may
/// override it through the `id` prop instead.
fn widget_dom_id(kind: &str) -> String {
    static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(0);
    let serial = NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed);
    format!("ui-{kind}-{serial}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique_per_instance() {
        let first = widget_dom_id("dropdown");
        let second = widget_dom_id("dropdown");
        assert_ne!(first, second);
    }
}
