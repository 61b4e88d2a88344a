//! Pointer-positioned context menu state machine.

use crate::events::SelectDetail;
use crate::focus::{FocusNav, NavKey, NavOutcome};
use crate::geometry::{clamp_menu_position, MenuPosition, ViewportSize};
use crate::item::MenuEntry;
use crate::projection::ItemProjection;

/// State owned by one context-menu surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenuState {
    entries: ItemProjection<MenuEntry>,
    open: bool,
    position: MenuPosition,
    nav: FocusNav,
}

impl ContextMenuState {
    /// Creates a closed context menu over the given entries.
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            entries: ItemProjection::new(entries),
            ..Self::default()
        }
    }

    /// Projected entries in declaration order, dividers included.
    pub fn entries(&self) -> &[MenuEntry] {
        self.entries.items()
    }

    /// Whether the surface is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Clamped surface position for the current (or last) open.
    pub fn position(&self) -> MenuPosition {
        self.position
    }

    /// Focused index over the full entry list, dividers included.
    pub fn focus(&self) -> Option<usize> {
        self.nav.focus()
    }
}

/// Inputs accepted by [`reduce_context_menu`].
#[derive(Debug, Clone, PartialEq)]
pub enum ContextMenuAction {
    /// Right-press at viewport coordinates; the surface is clamped so it
    /// never overflows the viewport edges.
    OpenAt {
        /// Pointer x in viewport coordinates.
        x: i32,
        /// Pointer y in viewport coordinates.
        y: i32,
        /// Viewport dimensions at press time.
        viewport: ViewportSize,
    },
    /// Key press routed from the open surface.
    Key(NavKey),
    /// Pointer press on the entry at this index in the full list.
    PickEntry(usize),
    /// Escape or outside pointer-down routed through the dismissal session.
    Dismiss,
    /// Projection update from the host's child list.
    SetEntries(Vec<MenuEntry>),
    /// Externally force the open state; forcing open reuses the last
    /// clamped position.
    SetOpen(bool),
}

/// Events emitted back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextMenuEvent {
    /// Surface transitioned closed to open. Repositioning an already-open
    /// surface does not re-fire this.
    Opened,
    /// Surface transitioned open to closed, for any reason.
    Closed,
    /// An entry was activated; the menu closes as part of the same action.
    Selected(SelectDetail),
}

/// Applies one action, returning the emitted events in order.
pub fn reduce_context_menu(
    state: &mut ContextMenuState,
    action: ContextMenuAction,
) -> Vec<ContextMenuEvent> {
    let mut events = Vec::new();
    match action {
        ContextMenuAction::OpenAt { x, y, viewport } => {
            state.position =
                clamp_menu_position(x, y, state.entries.items().len(), viewport);
            state.nav.reset();
            if !state.open {
                state.open = true;
                events.push(ContextMenuEvent::Opened);
            }
        }
        ContextMenuAction::Key(key) => {
            if !state.open {
                return events;
            }
            match state.nav.handle_key(key, state.entries.items()) {
                NavOutcome::Select(index) => commit(state, &mut events, index),
                NavOutcome::Close => close(state, &mut events),
                NavOutcome::Moved | NavOutcome::Handled => {}
            }
        }
        ContextMenuAction::PickEntry(index) => {
            if !state.open {
                return events;
            }
            commit(state, &mut events, index);
        }
        ContextMenuAction::Dismiss => close(state, &mut events),
        ContextMenuAction::SetEntries(entries) => {
            if state.entries.set(entries) {
                state.nav.clamp(state.entries.items());
            }
        }
        ContextMenuAction::SetOpen(force_open) => {
            if force_open && !state.open {
                state.open = true;
                state.nav.reset();
                events.push(ContextMenuEvent::Opened);
            } else if !force_open {
                close(state, &mut events);
            }
        }
    }
    events
}

fn close(state: &mut ContextMenuState, events: &mut Vec<ContextMenuEvent>) {
    if state.open {
        state.open = false;
        state.nav.reset();
        events.push(ContextMenuEvent::Closed);
    }
}

fn commit(state: &mut ContextMenuState, events: &mut Vec<ContextMenuEvent>, index: usize) {
    let Some(item) = state.entries.items().get(index).and_then(MenuEntry::item) else {
        return;
    };
    if item.disabled {
        return;
    }
    events.push(ContextMenuEvent::Selected(SelectDetail {
        item: item.clone(),
        index,
    }));
    close(state, events);
}
