//! Multi-select tag input state machine.

use crate::filter::{filtered_indices, FilteredItems};
use crate::focus::{FocusNav, NavKey, NavOutcome};
use crate::item::SelectItem;
use crate::projection::ItemProjection;
use crate::selection::MultiSelection;

/// State owned by one multi-select tag input instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiSelectState {
    items: ItemProjection<SelectItem>,
    selection: MultiSelection,
    query: String,
    open: bool,
    disabled: bool,
    nav: FocusNav,
}

impl MultiSelectState {
    /// Creates a closed tag input with the given initial selection.
    pub fn new(items: Vec<SelectItem>, values: Vec<String>) -> Self {
        let mut selection = MultiSelection::default();
        selection.set_values(values);
        Self {
            items: ItemProjection::new(items),
            selection,
            ..Self::default()
        }
    }

    /// Projected items in declaration order.
    pub fn items(&self) -> &[SelectItem] {
        self.items.items()
    }

    /// Selected values in selection order.
    pub fn values(&self) -> &[String] {
        self.selection.values()
    }

    /// Whether `value` is currently selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.contains(value)
    }

    /// Text in the filter field.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the whole control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Focused position within the filtered list.
    pub fn focus(&self) -> Option<usize> {
        self.nav.focus()
    }

    /// Indices of the items matching the live query.
    pub fn filtered(&self) -> Vec<usize> {
        filtered_indices(self.items.items(), &self.query)
    }

    /// Whether the current query matches nothing (drives the "no results"
    /// placeholder).
    pub fn has_no_matches(&self) -> bool {
        self.filtered().is_empty()
    }

    /// Label to show on the tag chip for `value`; unknown values display
    /// verbatim.
    pub fn tag_label(&self, value: &str) -> String {
        self.items
            .items()
            .iter()
            .find(|item| item.value == value)
            .map(|item| item.label.clone())
            .unwrap_or_else(|| value.to_string())
    }
}

/// Inputs accepted by [`reduce_multi_select`].
#[derive(Debug, Clone, PartialEq)]
pub enum MultiSelectAction {
    /// A keystroke updated the filter text.
    SetQuery(String),
    /// Pointer press on the field shell.
    ToggleTrigger,
    /// Key press routed from the input element.
    Key(NavKey),
    /// Pointer press (or Enter) on the filtered option at this position.
    ToggleOption(usize),
    /// Remove affordance on the tag chip for this value.
    RemoveTag(String),
    /// Backspace pressed in the input; removes the last tag only when the
    /// field is empty.
    Backspace,
    /// Escape or outside pointer-down routed through the dismissal session.
    Dismiss,
    /// Projection update from the host's child list.
    SetItems(Vec<SelectItem>),
    /// Externally replace the selected values.
    SetValues(Vec<String>),
    /// Externally force the open state.
    SetOpen(bool),
    /// Enable or disable the whole control.
    SetDisabled(bool),
}

/// Events emitted back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiSelectEvent {
    /// Overlay transitioned closed to open.
    Opened,
    /// Overlay transitioned open to closed, for any reason.
    Closed,
    /// The selected set changed; carries the full ordered value list.
    Changed(Vec<String>),
}

/// Applies one action, returning the emitted events in order.
pub fn reduce_multi_select(
    state: &mut MultiSelectState,
    action: MultiSelectAction,
) -> Vec<MultiSelectEvent> {
    let mut events = Vec::new();
    match action {
        MultiSelectAction::SetQuery(query) => {
            if state.disabled {
                return events;
            }
            state.query = query;
            state.nav.reset();
            if !state.open {
                open(state, &mut events);
            }
        }
        MultiSelectAction::ToggleTrigger => {
            if state.disabled {
                return events;
            }
            if state.open {
                close(state, &mut events);
            } else {
                open(state, &mut events);
            }
        }
        MultiSelectAction::Key(key) => {
            if state.disabled {
                return events;
            }
            if !state.open {
                if matches!(key, NavKey::ArrowDown | NavKey::Enter) {
                    open(state, &mut events);
                    let indices = state.filtered();
                    let view = FilteredItems {
                        items: state.items.items(),
                        indices: &indices,
                    };
                    state.nav.seed_first(&view);
                }
                return events;
            }
            let indices = state.filtered();
            let view = FilteredItems {
                items: state.items.items(),
                indices: &indices,
            };
            match state.nav.handle_key(key, &view) {
                NavOutcome::Select(position) => toggle(state, &mut events, indices[position]),
                NavOutcome::Close => close(state, &mut events),
                NavOutcome::Moved | NavOutcome::Handled => {}
            }
        }
        MultiSelectAction::ToggleOption(position) => {
            if !state.open {
                return events;
            }
            let indices = state.filtered();
            if let Some(&original) = indices.get(position) {
                if state.items.items()[original].disabled {
                    return events;
                }
                toggle(state, &mut events, original);
            }
        }
        MultiSelectAction::RemoveTag(value) => {
            if state.disabled {
                return events;
            }
            if state.selection.remove(&value) {
                events.push(MultiSelectEvent::Changed(state.values().to_vec()));
            }
        }
        MultiSelectAction::Backspace => {
            if state.disabled || !state.query.is_empty() {
                return events;
            }
            if state.selection.pop_last().is_some() {
                events.push(MultiSelectEvent::Changed(state.values().to_vec()));
            }
        }
        MultiSelectAction::Dismiss => close(state, &mut events),
        MultiSelectAction::SetItems(items) => {
            if state.items.set(items) {
                let indices = state.filtered();
                let view = FilteredItems {
                    items: state.items.items(),
                    indices: &indices,
                };
                state.nav.clamp(&view);
            }
        }
        MultiSelectAction::SetValues(values) => {
            state.selection.set_values(values);
        }
        MultiSelectAction::SetOpen(force_open) => {
            if force_open && !state.disabled && !state.open {
                open(state, &mut events);
            } else if !force_open {
                close(state, &mut events);
            }
        }
        MultiSelectAction::SetDisabled(disabled) => {
            state.disabled = disabled;
            if disabled {
                close(state, &mut events);
            }
        }
    }
    events
}

fn open(state: &mut MultiSelectState, events: &mut Vec<MultiSelectEvent>) {
    state.open = true;
    state.nav.reset();
    events.push(MultiSelectEvent::Opened);
}

fn close(state: &mut MultiSelectState, events: &mut Vec<MultiSelectEvent>) {
    if state.open {
        state.open = false;
        state.nav.reset();
        state.query.clear();
        events.push(MultiSelectEvent::Closed);
    }
}

fn toggle(state: &mut MultiSelectState, events: &mut Vec<MultiSelectEvent>, original: usize) {
    let Some(item) = state.items.items().get(original) else {
        return;
    };
    let value = item.value.clone();
    state.selection.toggle(&value);
    // The overlay stays open for further toggles; the filter resets so the
    // full list is visible again.
    state.query.clear();
    let indices = state.filtered();
    let view = FilteredItems {
        items: state.items.items(),
        indices: &indices,
    };
    state.nav.seed(
        indices.iter().position(|&index| index == original),
        &view,
    );
    events.push(MultiSelectEvent::Changed(state.values().to_vec()));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels() -> Vec<SelectItem> {
        vec![
            SelectItem::new("bug", "Bug"),
            SelectItem::new("feature", "Feature"),
            SelectItem::new("chore", "Chore"),
        ]
    }

    #[test]
    fn toggling_keeps_the_overlay_open_and_clears_the_query() {
        let mut state = MultiSelectState::new(labels(), vec![]);
        let _ = reduce_multi_select(&mut state, MultiSelectAction::SetQuery("fea".into()));
        assert_eq!(state.filtered(), vec![1]);

        let events = reduce_multi_select(&mut state, MultiSelectAction::ToggleOption(0));
        assert_eq!(
            events,
            vec![MultiSelectEvent::Changed(vec!["feature".into()])]
        );
        assert!(state.is_open());
        assert_eq!(state.query(), "");
        // Focus follows the toggled item back into the unfiltered list.
        assert_eq!(state.focus(), Some(1));
    }

    #[test]
    fn toggling_a_selected_item_deselects_it() {
        let mut state = MultiSelectState::new(labels(), vec!["bug".into()]);
        let _ = reduce_multi_select(&mut state, MultiSelectAction::ToggleTrigger);

        let events = reduce_multi_select(&mut state, MultiSelectAction::ToggleOption(0));
        assert_eq!(events, vec![MultiSelectEvent::Changed(vec![])]);
        assert!(!state.is_selected("bug"));
    }

    #[test]
    fn remove_tag_works_while_closed() {
        let mut state = MultiSelectState::new(labels(), vec!["bug".into(), "chore".into()]);

        let events =
            reduce_multi_select(&mut state, MultiSelectAction::RemoveTag("bug".into()));
        assert_eq!(
            events,
            vec![MultiSelectEvent::Changed(vec!["chore".into()])]
        );

        // Removing an absent value is a silent no-op.
        let events =
            reduce_multi_select(&mut state, MultiSelectAction::RemoveTag("bug".into()));
        assert_eq!(events, vec![]);
    }

    #[test]
    fn backspace_pops_the_last_tag_only_when_the_query_is_empty() {
        let mut state = MultiSelectState::new(labels(), vec!["bug".into(), "feature".into()]);

        let _ = reduce_multi_select(&mut state, MultiSelectAction::SetQuery("ch".into()));
        let events = reduce_multi_select(&mut state, MultiSelectAction::Backspace);
        assert_eq!(events, vec![]);
        assert_eq!(state.values(), ["bug", "feature"]);

        let _ = reduce_multi_select(&mut state, MultiSelectAction::SetQuery(String::new()));
        let events = reduce_multi_select(&mut state, MultiSelectAction::Backspace);
        assert_eq!(
            events,
            vec![MultiSelectEvent::Changed(vec!["bug".into()])]
        );
    }

    #[test]
    fn selection_order_is_toggle_order() {
        let mut state = MultiSelectState::new(labels(), vec![]);
        let _ = reduce_multi_select(&mut state, MultiSelectAction::ToggleTrigger);
        let _ = reduce_multi_select(&mut state, MultiSelectAction::ToggleOption(2));
        let _ = reduce_multi_select(&mut state, MultiSelectAction::ToggleOption(0));
        assert_eq!(state.values(), ["chore", "bug"]);
    }

    #[test]
    fn unknown_selected_values_render_their_raw_value_as_the_tag_label() {
        let state = MultiSelectState::new(labels(), vec!["archived".into()]);
        assert_eq!(state.tag_label("archived"), "archived");
        assert_eq!(state.tag_label("bug"), "Bug");
    }

    #[test]
    fn dismissal_clears_the_filter_text() {
        let mut state = MultiSelectState::new(labels(), vec![]);
        let _ = reduce_multi_select(&mut state, MultiSelectAction::SetQuery("bu".into()));

        let events = reduce_multi_select(&mut state, MultiSelectAction::Dismiss);
        assert_eq!(events, vec![MultiSelectEvent::Closed]);
        assert_eq!(state.query(), "");
        assert_eq!(state.filtered(), vec![0, 1, 2]);
    }

    #[test]
    fn external_open_and_close_emit_lifecycle_events() {
        let mut state = MultiSelectState::new(labels(), vec![]);
        assert_eq!(
            reduce_multi_select(&mut state, MultiSelectAction::SetOpen(true)),
            vec![MultiSelectEvent::Opened]
        );
        assert_eq!(
            reduce_multi_select(&mut state, MultiSelectAction::SetOpen(true)),
            vec![]
        );
        assert_eq!(
            reduce_multi_select(&mut state, MultiSelectAction::SetOpen(false)),
            vec![MultiSelectEvent::Closed]
        );
    }

    #[test]
    fn a_query_matching_nothing_reports_no_matches() {
        let mut state = MultiSelectState::new(labels(), vec![]);
        let _ = reduce_multi_select(&mut state, MultiSelectAction::SetQuery("zzz".into()));
        assert!(state.has_no_matches());
        assert_eq!(state.focus(), None);
    }
}
