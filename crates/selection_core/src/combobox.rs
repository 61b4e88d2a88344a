//! Filterable single-select combobox state machine.

use crate::events::ChangeDetail;
use crate::filter::{filtered_indices, FilteredItems};
use crate::focus::{FocusNav, NavKey, NavOutcome};
use crate::item::SelectItem;
use crate::projection::ItemProjection;

/// State owned by one filterable combobox instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComboboxState {
    items: ItemProjection<SelectItem>,
    value: Option<String>,
    query: String,
    open: bool,
    disabled: bool,
    nav: FocusNav,
}

impl ComboboxState {
    /// Creates a closed combobox; the query starts synchronized with the
    /// committed value's label.
    pub fn new(items: Vec<SelectItem>, value: Option<String>) -> Self {
        let mut state = Self {
            items: ItemProjection::new(items),
            value,
            ..Self::default()
        };
        state.sync_query_to_value();
        state
    }

    /// Projected items in declaration order.
    pub fn items(&self) -> &[SelectItem] {
        self.items.items()
    }

    /// Currently committed value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Text shown in the input field.
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

    fn sync_query_to_value(&mut self) {
        self.query = match self.value.as_deref() {
            None => String::new(),
            Some(value) => self
                .items
                .items()
                .iter()
                .find(|item| item.value == value)
                .map(|item| item.label.clone())
                // Unknown external values stay visible verbatim.
                .unwrap_or_else(|| value.to_string()),
        };
    }
}

/// Inputs accepted by [`reduce_combobox`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComboboxAction {
    /// A keystroke updated the input text.
    SetQuery(String),
    /// Pointer press on the field or its arrow handle.
    ToggleTrigger,
    /// Key press routed from the input element.
    Key(NavKey),
    /// Pointer press on the filtered option at this position.
    PickOption(usize),
    /// Escape or outside pointer-down routed through the dismissal session.
    Dismiss,
    /// Projection update from the host's child list.
    SetItems(Vec<SelectItem>),
    /// Externally set the committed value; the displayed query follows
    /// only while the overlay is closed.
    SetValue(Option<String>),
    /// Externally force the open state.
    SetOpen(bool),
    /// Enable or disable the whole control.
    SetDisabled(bool),
}

/// Events emitted back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxEvent {
    /// Overlay transitioned closed to open.
    Opened,
    /// Overlay transitioned open to closed, for any reason.
    Closed,
    /// A value was committed through the overlay.
    Changed(ChangeDetail),
}

/// Applies one action, returning the emitted events in order.
pub fn reduce_combobox(state: &mut ComboboxState, action: ComboboxAction) -> Vec<ComboboxEvent> {
    let mut events = Vec::new();
    match action {
        ComboboxAction::SetQuery(query) => {
            if state.disabled {
                return events;
            }
            state.query = query;
            // Typing never implies a selection.
            state.nav.reset();
            if !state.open {
                open(state, &mut events);
            }
        }
        ComboboxAction::ToggleTrigger => {
            if state.disabled {
                return events;
            }
            if state.open {
                close(state, &mut events);
            } else {
                open(state, &mut events);
            }
        }
        ComboboxAction::Key(key) => {
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
                NavOutcome::Select(position) => commit(state, &mut events, indices[position]),
                NavOutcome::Close => close(state, &mut events),
                NavOutcome::Moved | NavOutcome::Handled => {}
            }
        }
        ComboboxAction::PickOption(position) => {
            if !state.open {
                return events;
            }
            let indices = state.filtered();
            if let Some(&original) = indices.get(position) {
                if state.items.items()[original].disabled {
                    return events;
                }
                commit(state, &mut events, original);
            }
        }
        ComboboxAction::Dismiss => close(state, &mut events),
        ComboboxAction::SetItems(items) => {
            if state.items.set(items) {
                let indices = state.filtered();
                let view = FilteredItems {
                    items: state.items.items(),
                    indices: &indices,
                };
                state.nav.clamp(&view);
                if !state.open {
                    state.sync_query_to_value();
                }
            }
        }
        ComboboxAction::SetValue(value) => {
            state.value = value;
            if !state.open {
                state.sync_query_to_value();
            }
        }
        ComboboxAction::SetOpen(force_open) => {
            if force_open && !state.disabled && !state.open {
                open(state, &mut events);
            } else if !force_open {
                close(state, &mut events);
            }
        }
        ComboboxAction::SetDisabled(disabled) => {
            state.disabled = disabled;
            if disabled {
                close(state, &mut events);
            }
        }
    }
    events
}

fn open(state: &mut ComboboxState, events: &mut Vec<ComboboxEvent>) {
    state.open = true;
    state.nav.reset();
    events.push(ComboboxEvent::Opened);
}

fn close(state: &mut ComboboxState, events: &mut Vec<ComboboxEvent>) {
    if state.open {
        state.open = false;
        state.nav.reset();
        events.push(ComboboxEvent::Closed);
    }
}

fn commit(state: &mut ComboboxState, events: &mut Vec<ComboboxEvent>, original: usize) {
    let Some(item) = state.items.items().get(original) else {
        return;
    };
    let detail = ChangeDetail {
        value: item.value.clone(),
        label: item.label.clone(),
    };
    state.value = Some(detail.value.clone());
    // Round-trip the label into the input for display.
    state.query = detail.label.clone();
    events.push(ComboboxEvent::Changed(detail));
    close(state, events);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn departments() -> Vec<SelectItem> {
        vec![
            SelectItem::new("design", "Design"),
            SelectItem::new("engineering", "Engineering"),
            SelectItem::new("product", "Product"),
        ]
    }

    #[test]
    fn typing_opens_the_overlay_and_resets_focus() {
        let mut state = ComboboxState::new(departments(), None);

        let events = reduce_combobox(&mut state, ComboboxAction::SetQuery("eng".into()));
        assert_eq!(events, vec![ComboboxEvent::Opened]);
        assert_eq!(state.focus(), None);
        assert_eq!(state.filtered(), vec![1]);
    }

    #[test]
    fn selection_round_trips_the_label_into_the_query() {
        let mut state = ComboboxState::new(departments(), None);
        let _ = reduce_combobox(&mut state, ComboboxAction::SetQuery("eng".into()));
        let _ = reduce_combobox(&mut state, ComboboxAction::Key(NavKey::ArrowDown));

        let events = reduce_combobox(&mut state, ComboboxAction::Key(NavKey::Enter));
        assert_eq!(
            events,
            vec![
                ComboboxEvent::Changed(ChangeDetail {
                    value: "engineering".into(),
                    label: "Engineering".into(),
                }),
                ComboboxEvent::Closed,
            ]
        );
        assert_eq!(state.query(), "Engineering");
        assert_eq!(state.value(), Some("engineering"));
    }

    #[test]
    fn unmatched_query_reports_no_results() {
        let mut state = ComboboxState::new(departments(), None);
        let _ = reduce_combobox(&mut state, ComboboxAction::SetQuery("zzz".into()));
        assert!(state.has_no_matches());

        // Arrow keys on an empty filtered set are consumed no-ops.
        let _ = reduce_combobox(&mut state, ComboboxAction::Key(NavKey::ArrowDown));
        assert_eq!(state.focus(), None);
    }

    #[test]
    fn external_value_sync_waits_for_the_overlay_to_close() {
        let mut state = ComboboxState::new(departments(), None);
        let _ = reduce_combobox(&mut state, ComboboxAction::SetQuery("des".into()));

        let _ = reduce_combobox(&mut state, ComboboxAction::SetValue(Some("product".into())));
        // In-progress typing is never overwritten.
        assert_eq!(state.query(), "des");

        let _ = reduce_combobox(&mut state, ComboboxAction::Dismiss);
        let _ = reduce_combobox(&mut state, ComboboxAction::SetValue(Some("design".into())));
        assert_eq!(state.query(), "Design");
    }

    #[test]
    fn external_value_without_a_matching_item_displays_verbatim() {
        let mut state = ComboboxState::new(departments(), None);
        let _ = reduce_combobox(&mut state, ComboboxAction::SetValue(Some("legal".into())));
        assert_eq!(state.query(), "legal");
    }

    #[test]
    fn focus_indexes_into_the_filtered_list() {
        let mut state = ComboboxState::new(departments(), None);
        let _ = reduce_combobox(&mut state, ComboboxAction::SetQuery("e".into()));
        // "Design" and "Engineering" match.
        assert_eq!(state.filtered(), vec![0, 1]);

        let _ = reduce_combobox(&mut state, ComboboxAction::Key(NavKey::ArrowDown));
        let _ = reduce_combobox(&mut state, ComboboxAction::Key(NavKey::ArrowDown));
        assert_eq!(state.focus(), Some(1));

        let events = reduce_combobox(&mut state, ComboboxAction::Key(NavKey::Enter));
        assert!(matches!(
            events.first(),
            Some(ComboboxEvent::Changed(detail)) if detail.value == "engineering"
        ));
    }

    #[test]
    fn home_and_end_jump_within_the_filtered_list() {
        let mut state = ComboboxState::new(departments(), None);
        let _ = reduce_combobox(&mut state, ComboboxAction::SetQuery("n".into()));
        // "n" matches Design and Engineering but not Product.
        assert_eq!(state.filtered(), vec![0, 1]);

        let _ = reduce_combobox(&mut state, ComboboxAction::Key(NavKey::End));
        assert_eq!(state.focus(), Some(1));
        let _ = reduce_combobox(&mut state, ComboboxAction::Key(NavKey::Home));
        assert_eq!(state.focus(), Some(0));
    }
}
