//! Single-select dropdown state machine.

use crate::events::ChangeDetail;
use crate::focus::{FocusNav, NavKey, NavOutcome};
use crate::item::SelectItem;
use crate::projection::ItemProjection;

/// State owned by one single-select dropdown instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownState {
    items: ItemProjection<SelectItem>,
    value: Option<String>,
    open: bool,
    disabled: bool,
    nav: FocusNav,
}

impl DropdownState {
    /// Creates a closed dropdown over the projected items.
    pub fn new(items: Vec<SelectItem>, value: Option<String>) -> Self {
        Self {
            items: ItemProjection::new(items),
            value,
            ..Self::default()
        }
    }

    /// Projected items in declaration order.
    pub fn items(&self) -> &[SelectItem] {
        self.items.items()
    }

    /// Currently committed value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Display label of the committed item, when one matches the value.
    pub fn selected_label(&self) -> Option<&str> {
        let value = self.value.as_deref()?;
        self.items
            .items()
            .iter()
            .find(|item| item.value == value)
            .map(|item| item.label.as_str())
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the whole control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Focused entry index over the full item list.
    pub fn focus(&self) -> Option<usize> {
        self.nav.focus()
    }

    fn selected_index(&self) -> Option<usize> {
        let value = self.value.as_deref()?;
        self.items.items().iter().position(|item| item.value == value)
    }
}

/// Inputs accepted by [`reduce_dropdown`].
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownAction {
    /// Pointer press on the trigger: opens when closed, closes when open.
    ToggleTrigger,
    /// ArrowDown/Enter on the closed trigger; focus lands on the first
    /// selectable entry so arrow keys work immediately.
    OpenWithKeyboard,
    /// Key press while the overlay is open.
    Key(NavKey),
    /// Pointer press on the option at this index.
    PickOption(usize),
    /// Escape or outside pointer-down routed through the dismissal session.
    Dismiss,
    /// Projection update from the host's child list.
    SetItems(Vec<SelectItem>),
    /// Externally set the committed value (no change event is echoed back).
    SetValue(Option<String>),
    /// Externally force the open state.
    SetOpen(bool),
    /// Enable or disable the whole control.
    SetDisabled(bool),
}

/// Events emitted back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Overlay transitioned closed to open.
    Opened,
    /// Overlay transitioned open to closed, for any reason.
    Closed,
    /// A value was committed through the overlay.
    Changed(ChangeDetail),
}

/// Applies one action, returning the emitted events in order.
pub fn reduce_dropdown(state: &mut DropdownState, action: DropdownAction) -> Vec<DropdownEvent> {
    let mut events = Vec::new();
    match action {
        DropdownAction::ToggleTrigger => {
            if state.disabled {
                return events;
            }
            if state.open {
                close(state, &mut events);
            } else {
                // Pointer open seeds focus on the committed item, if any.
                let seed = state.selected_index();
                open(state, &mut events);
                state.nav.seed(seed, state.items.items());
            }
        }
        DropdownAction::OpenWithKeyboard => {
            if !state.disabled && !state.open {
                open(state, &mut events);
                state.nav.seed_first(state.items.items());
            }
        }
        DropdownAction::Key(key) => {
            if !state.open {
                return events;
            }
            match state.nav.handle_key(key, state.items.items()) {
                NavOutcome::Select(index) => commit(state, &mut events, index),
                NavOutcome::Close => close(state, &mut events),
                NavOutcome::Moved | NavOutcome::Handled => {}
            }
        }
        DropdownAction::PickOption(index) => {
            if state.open && state.items.items().get(index).is_some_and(|i| !i.disabled) {
                commit(state, &mut events, index);
            }
        }
        DropdownAction::Dismiss => close(state, &mut events),
        DropdownAction::SetItems(items) => {
            if state.items.set(items) {
                state.nav.clamp(state.items.items());
            }
        }
        DropdownAction::SetValue(value) => {
            state.value = value;
        }
        DropdownAction::SetOpen(force_open) => {
            if force_open && !state.disabled && !state.open {
                let seed = state.selected_index();
                open(state, &mut events);
                state.nav.seed(seed, state.items.items());
            } else if !force_open {
                close(state, &mut events);
            }
        }
        DropdownAction::SetDisabled(disabled) => {
            state.disabled = disabled;
            if disabled {
                close(state, &mut events);
            }
        }
    }
    events
}

fn open(state: &mut DropdownState, events: &mut Vec<DropdownEvent>) {
    state.open = true;
    state.nav.reset();
    events.push(DropdownEvent::Opened);
}

fn close(state: &mut DropdownState, events: &mut Vec<DropdownEvent>) {
    if state.open {
        state.open = false;
        state.nav.reset();
        events.push(DropdownEvent::Closed);
    }
}

fn commit(state: &mut DropdownState, events: &mut Vec<DropdownEvent>, index: usize) {
    let Some(item) = state.items.items().get(index) else {
        return;
    };
    let detail = ChangeDetail {
        value: item.value.clone(),
        label: item.label.clone(),
    };
    state.value = Some(detail.value.clone());
    events.push(DropdownEvent::Changed(detail));
    close(state, events);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cadence() -> Vec<SelectItem> {
        vec![
            SelectItem::new("daily", "Daily"),
            SelectItem::new("weekly", "Weekly"),
            SelectItem::new("monthly", "Monthly"),
        ]
    }

    #[test]
    fn arrow_twice_then_enter_commits_the_second_option() {
        let mut state = DropdownState::new(cadence(), None);

        let events = reduce_dropdown(&mut state, DropdownAction::ToggleTrigger);
        assert_eq!(events, vec![DropdownEvent::Opened]);
        assert_eq!(state.focus(), None);

        let _ = reduce_dropdown(&mut state, DropdownAction::Key(NavKey::ArrowDown));
        let _ = reduce_dropdown(&mut state, DropdownAction::Key(NavKey::ArrowDown));
        assert_eq!(state.focus(), Some(1));

        let events = reduce_dropdown(&mut state, DropdownAction::Key(NavKey::Enter));
        assert_eq!(
            events,
            vec![
                DropdownEvent::Changed(ChangeDetail {
                    value: "weekly".into(),
                    label: "Weekly".into(),
                }),
                DropdownEvent::Closed,
            ]
        );
        assert_eq!(state.value(), Some("weekly"));
        assert!(!state.is_open());
    }

    #[test]
    fn keyboard_open_focuses_the_first_selectable_entry() {
        let mut items = cadence();
        items[0].disabled = true;
        let mut state = DropdownState::new(items, None);

        let events = reduce_dropdown(&mut state, DropdownAction::OpenWithKeyboard);
        assert_eq!(events, vec![DropdownEvent::Opened]);
        assert_eq!(state.focus(), Some(1));
    }

    #[test]
    fn pointer_open_seeds_focus_from_the_committed_value() {
        let mut state = DropdownState::new(cadence(), Some("monthly".into()));

        let _ = reduce_dropdown(&mut state, DropdownAction::ToggleTrigger);
        assert_eq!(state.focus(), Some(2));
    }

    #[test]
    fn disabled_control_ignores_open_attempts() {
        let mut state = DropdownState::new(cadence(), None);
        let _ = reduce_dropdown(&mut state, DropdownAction::SetDisabled(true));

        assert_eq!(reduce_dropdown(&mut state, DropdownAction::ToggleTrigger), vec![]);
        assert_eq!(
            reduce_dropdown(&mut state, DropdownAction::OpenWithKeyboard),
            vec![]
        );
        assert!(!state.is_open());
    }

    #[test]
    fn picking_a_disabled_option_changes_nothing() {
        let mut items = cadence();
        items[1].disabled = true;
        let mut state = DropdownState::new(items, None);
        let _ = reduce_dropdown(&mut state, DropdownAction::ToggleTrigger);

        let events = reduce_dropdown(&mut state, DropdownAction::PickOption(1));
        assert_eq!(events, vec![]);
        assert_eq!(state.value(), None);
        assert!(state.is_open());
    }

    #[test]
    fn dismissal_closes_without_changing_the_value() {
        let mut state = DropdownState::new(cadence(), Some("daily".into()));
        let _ = reduce_dropdown(&mut state, DropdownAction::ToggleTrigger);

        let events = reduce_dropdown(&mut state, DropdownAction::Dismiss);
        assert_eq!(events, vec![DropdownEvent::Closed]);
        assert_eq!(state.value(), Some("daily"));
    }

    #[test]
    fn item_mutation_clamps_a_stale_focus() {
        let mut state = DropdownState::new(cadence(), None);
        let _ = reduce_dropdown(&mut state, DropdownAction::ToggleTrigger);
        let _ = reduce_dropdown(&mut state, DropdownAction::Key(NavKey::End));
        assert_eq!(state.focus(), Some(2));

        let _ = reduce_dropdown(
            &mut state,
            DropdownAction::SetItems(vec![SelectItem::new("daily", "Daily")]),
        );
        assert_eq!(state.focus(), None);
    }

    #[test]
    fn external_open_and_close_emit_lifecycle_events() {
        let mut state = DropdownState::new(cadence(), None);
        assert_eq!(
            reduce_dropdown(&mut state, DropdownAction::SetOpen(true)),
            vec![DropdownEvent::Opened]
        );
        assert_eq!(
            reduce_dropdown(&mut state, DropdownAction::SetOpen(true)),
            vec![]
        );
        assert_eq!(
            reduce_dropdown(&mut state, DropdownAction::SetOpen(false)),
            vec![DropdownEvent::Closed]
        );
    }
}
