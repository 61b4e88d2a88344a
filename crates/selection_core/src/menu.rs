//! Trigger-anchored action menu state machine.

use crate::events::SelectDetail;
use crate::focus::{FocusNav, NavKey, NavOutcome};
use crate::item::MenuEntry;
use crate::projection::ItemProjection;

/// State owned by one trigger-anchored menu instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    entries: ItemProjection<MenuEntry>,
    open: bool,
    disabled: bool,
    nav: FocusNav,
}

impl MenuState {
    /// Creates a closed menu over the given entries.
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

    /// Whether the menu surface is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the trigger is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Focused index over the full entry list, dividers included.
    pub fn focus(&self) -> Option<usize> {
        self.nav.focus()
    }
}

/// Inputs accepted by [`reduce_menu`].
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Pointer press on the trigger.
    ToggleTrigger,
    /// Keyboard activation of the trigger; opens with the first selectable
    /// entry pre-focused.
    OpenWithKeyboard,
    /// Key press routed from the open surface.
    Key(NavKey),
    /// Pointer press on the entry at this index in the full list.
    PickEntry(usize),
    /// Escape or outside pointer-down routed through the dismissal session.
    Dismiss,
    /// Projection update from the host's child list.
    SetEntries(Vec<MenuEntry>),
    /// Externally force the open state.
    SetOpen(bool),
    /// Enable or disable the trigger.
    SetDisabled(bool),
}

/// Events emitted back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// Surface transitioned closed to open.
    Opened,
    /// Surface transitioned open to closed, for any reason.
    Closed,
    /// An entry was activated; the menu closes as part of the same action.
    Selected(SelectDetail),
}

/// Applies one action, returning the emitted events in order.
pub fn reduce_menu(state: &mut MenuState, action: MenuAction) -> Vec<MenuEvent> {
    let mut events = Vec::new();
    match action {
        MenuAction::ToggleTrigger => {
            if state.disabled {
                return events;
            }
            if state.open {
                close(state, &mut events);
            } else {
                open(state, &mut events);
            }
        }
        MenuAction::OpenWithKeyboard => {
            if state.disabled || state.open {
                return events;
            }
            open(state, &mut events);
            state.nav.seed_first(state.entries.items());
        }
        MenuAction::Key(key) => {
            if !state.open {
                return events;
            }
            match state.nav.handle_key(key, state.entries.items()) {
                NavOutcome::Select(index) => commit(state, &mut events, index),
                NavOutcome::Close => close(state, &mut events),
                NavOutcome::Moved | NavOutcome::Handled => {}
            }
        }
        MenuAction::PickEntry(index) => {
            if !state.open {
                return events;
            }
            commit(state, &mut events, index);
        }
        MenuAction::Dismiss => close(state, &mut events),
        MenuAction::SetEntries(entries) => {
            if state.entries.set(entries) {
                state.nav.clamp(state.entries.items());
            }
        }
        MenuAction::SetOpen(force_open) => {
            if force_open && !state.disabled && !state.open {
                open(state, &mut events);
            } else if !force_open {
                close(state, &mut events);
            }
        }
        MenuAction::SetDisabled(disabled) => {
            state.disabled = disabled;
            if disabled {
                close(state, &mut events);
            }
        }
    }
    events
}

fn open(state: &mut MenuState, events: &mut Vec<MenuEvent>) {
    state.open = true;
    state.nav.reset();
    events.push(MenuEvent::Opened);
}

fn close(state: &mut MenuState, events: &mut Vec<MenuEvent>) {
    if state.open {
        state.open = false;
        state.nav.reset();
        events.push(MenuEvent::Closed);
    }
}

fn commit(state: &mut MenuState, events: &mut Vec<MenuEvent>, index: usize) {
    let Some(item) = state.entries.items().get(index).and_then(MenuEntry::item) else {
        return;
    };
    if item.disabled {
        return;
    }
    events.push(MenuEvent::Selected(SelectDetail {
        item: item.clone(),
        index,
    }));
    close(state, events);
}
