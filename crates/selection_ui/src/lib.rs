#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

//! Leptos components for the selection widget set.
//!
//! Six composite widgets (dropdown, combobox, multi-select tag input,
//! trigger menu, context menu, command palette) render on top of the
//! DOM-free state machines in `selection_core`. The crate owns the
//! `data-ui-*` DOM contract, the shared overlay-dismissal session, and the
//! presentational primitives the widgets compose.

mod dom;
mod overlay;
mod primitives;
mod widgets;

pub use dom::focus_element_by_id;
pub use overlay::use_overlay_dismissal;
pub use primitives::{FieldInput, MenuDivider, MenuOption, MenuSurface, NoResults, TagChip};
pub use widgets::{
    CommandPalette, FilterableCombobox, MultiSelectTagInput, PointerContextMenu,
    SingleSelectDropdown, TriggerDropdownMenu,
};
