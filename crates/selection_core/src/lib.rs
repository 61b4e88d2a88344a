#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

//! DOM-free state machines behind the selection widget set.
//!
//! Each composite widget (dropdown, combobox, multi-select tag input,
//! trigger menu, context menu, command palette) is modeled as a plain state
//! struct plus a `reduce_*` function that applies one action and returns
//! the host-facing events it produced, in order. The rendering layer owns
//! the DOM; everything here is synchronous, allocation-light, and natively
//! testable.

mod combobox;
mod context_menu;
mod dropdown;
mod events;
mod filter;
mod focus;
mod geometry;
mod item;
mod menu;
mod multi_select;
mod palette;
mod projection;
mod selection;

pub use combobox::{reduce_combobox, ComboboxAction, ComboboxEvent, ComboboxState};
pub use context_menu::{
    reduce_context_menu, ContextMenuAction, ContextMenuEvent, ContextMenuState,
};
pub use dropdown::{reduce_dropdown, DropdownAction, DropdownEvent, DropdownState};
pub use events::{ChangeDetail, SelectDetail};
pub use filter::{filtered_indices, matches_query, FilteredItems};
pub use focus::{
    first_selectable, last_selectable, FocusNav, FocusableList, NavKey, NavOutcome,
};
pub use geometry::{
    clamp_menu_position, estimated_menu_height, MenuPosition, ViewportSize, MENU_ROW_HEIGHT,
    MENU_WIDTH, VIEWPORT_MARGIN,
};
pub use item::{MenuEntry, SelectItem};
pub use menu::{reduce_menu, MenuAction, MenuEvent, MenuState};
pub use multi_select::{
    reduce_multi_select, MultiSelectAction, MultiSelectEvent, MultiSelectState,
};
pub use palette::{reduce_palette, PaletteAction, PaletteEvent, PaletteState};
pub use projection::ItemProjection;
pub use selection::MultiSelection;
