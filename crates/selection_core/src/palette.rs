//! Command palette state machine.

use crate::events::SelectDetail;
use crate::filter::{filtered_indices, FilteredItems};
use crate::focus::{FocusNav, NavKey, NavOutcome};
use crate::item::SelectItem;
use crate::projection::ItemProjection;

/// State owned by one command palette instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteState {
    items: ItemProjection<SelectItem>,
    query: String,
    open: bool,
    nav: FocusNav,
}

impl PaletteState {
    /// Creates a closed palette over the given commands.
    pub fn new(items: Vec<SelectItem>) -> Self {
        Self {
            items: ItemProjection::new(items),
            ..Self::default()
        }
    }

    /// Projected commands in declaration order.
    pub fn items(&self) -> &[SelectItem] {
        self.items.items()
    }

    /// Text in the search field.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the palette overlay is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Focused position within the filtered list.
    pub fn focus(&self) -> Option<usize> {
        self.nav.focus()
    }

    /// Indices of the commands matching the live query.
    pub fn filtered(&self) -> Vec<usize> {
        filtered_indices(self.items.items(), &self.query)
    }

    /// Whether the current query matches nothing.
    pub fn has_no_matches(&self) -> bool {
        self.filtered().is_empty()
    }

    fn reseed(&mut self) {
        let indices = self.filtered();
        let view = FilteredItems {
            items: self.items.items(),
            indices: &indices,
        };
        self.nav.seed_first(&view);
    }
}

/// Inputs accepted by [`reduce_palette`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteAction {
    /// Open request (keyboard shortcut or host call); the query resets and
    /// the first command is pre-focused.
    Open,
    /// Key press routed from the search input.
    Key(NavKey),
    /// A keystroke updated the search text; focus re-seeds onto the first
    /// match.
    SetQuery(String),
    /// Pointer press on the filtered command at this position.
    PickItem(usize),
    /// Escape or outside pointer-down routed through the dismissal session.
    Dismiss,
    /// Projection update from the host's child list.
    SetItems(Vec<SelectItem>),
    /// Externally force the open state.
    SetOpen(bool),
}

/// Events emitted back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// Overlay transitioned closed to open.
    Opened,
    /// Overlay transitioned open to closed, for any reason.
    Closed,
    /// A command was activated; the palette closes as part of the same
    /// action.
    Selected(SelectDetail),
}

/// Applies one action, returning the emitted events in order.
pub fn reduce_palette(state: &mut PaletteState, action: PaletteAction) -> Vec<PaletteEvent> {
    let mut events = Vec::new();
    match action {
        PaletteAction::Open => {
            if !state.open {
                open(state, &mut events);
            }
        }
        PaletteAction::Key(key) => {
            if !state.open {
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
        PaletteAction::SetQuery(query) => {
            if !state.open {
                return events;
            }
            state.query = query;
            state.reseed();
        }
        PaletteAction::PickItem(position) => {
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
        PaletteAction::Dismiss => close(state, &mut events),
        PaletteAction::SetItems(items) => {
            if state.items.set(items) && state.open {
                state.reseed();
            }
        }
        PaletteAction::SetOpen(force_open) => {
            if force_open && !state.open {
                open(state, &mut events);
            } else if !force_open {
                close(state, &mut events);
            }
        }
    }
    events
}

fn open(state: &mut PaletteState, events: &mut Vec<PaletteEvent>) {
    state.open = true;
    state.query.clear();
    state.reseed();
    events.push(PaletteEvent::Opened);
}

fn close(state: &mut PaletteState, events: &mut Vec<PaletteEvent>) {
    if state.open {
        state.open = false;
        state.query.clear();
        state.nav.reset();
        events.push(PaletteEvent::Closed);
    }
}

fn commit(state: &mut PaletteState, events: &mut Vec<PaletteEvent>, original: usize) {
    let Some(item) = state.items.items().get(original) else {
        return;
    };
    events.push(PaletteEvent::Selected(SelectDetail {
        item: item.clone(),
        index: original,
    }));
    close(state, events);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn commands() -> Vec<SelectItem> {
        vec![
            SelectItem::new("open-file", "Open File").with_shortcut("Ctrl+O"),
            SelectItem::new("save-all", "Save All").with_shortcut("Ctrl+Shift+S"),
            SelectItem::new("toggle-terminal", "Toggle Terminal"),
        ]
    }

    #[test]
    fn opening_clears_the_query_and_focuses_the_first_command() {
        let mut state = PaletteState::new(commands());

        let events = reduce_palette(&mut state, PaletteAction::Open);
        assert_eq!(events, vec![PaletteEvent::Opened]);
        assert_eq!(state.query(), "");
        assert_eq!(state.focus(), Some(0));
    }

    #[test]
    fn typing_reseeds_focus_onto_the_first_match() {
        let mut state = PaletteState::new(commands());
        let _ = reduce_palette(&mut state, PaletteAction::Open);
        let _ = reduce_palette(&mut state, PaletteAction::Key(NavKey::ArrowDown));
        assert_eq!(state.focus(), Some(1));

        let _ = reduce_palette(&mut state, PaletteAction::SetQuery("term".into()));
        assert_eq!(state.filtered(), vec![2]);
        assert_eq!(state.focus(), Some(0));
    }

    #[test]
    fn enter_activates_the_focused_match_and_closes() {
        let mut state = PaletteState::new(commands());
        let _ = reduce_palette(&mut state, PaletteAction::Open);
        let _ = reduce_palette(&mut state, PaletteAction::SetQuery("save".into()));

        let events = reduce_palette(&mut state, PaletteAction::Key(NavKey::Enter));
        assert_eq!(
            events,
            vec![
                PaletteEvent::Selected(SelectDetail {
                    item: SelectItem::new("save-all", "Save All").with_shortcut("Ctrl+Shift+S"),
                    index: 1,
                }),
                PaletteEvent::Closed,
            ]
        );
        assert!(!state.is_open());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn a_query_with_no_matches_leaves_nothing_focused() {
        let mut state = PaletteState::new(commands());
        let _ = reduce_palette(&mut state, PaletteAction::Open);

        let _ = reduce_palette(&mut state, PaletteAction::SetQuery("zzz".into()));
        assert!(state.has_no_matches());
        assert_eq!(state.focus(), None);

        let _ = reduce_palette(&mut state, PaletteAction::Key(NavKey::ArrowDown));
        assert_eq!(state.focus(), None);
        assert_eq!(
            reduce_palette(&mut state, PaletteAction::Key(NavKey::Enter)),
            vec![]
        );
    }

    #[test]
    fn reopening_starts_from_a_clean_slate() {
        let mut state = PaletteState::new(commands());
        let _ = reduce_palette(&mut state, PaletteAction::Open);
        let _ = reduce_palette(&mut state, PaletteAction::SetQuery("open".into()));
        let _ = reduce_palette(&mut state, PaletteAction::Dismiss);

        let events = reduce_palette(&mut state, PaletteAction::Open);
        assert_eq!(events, vec![PaletteEvent::Opened]);
        assert_eq!(state.query(), "");
        assert_eq!(state.filtered(), vec![0, 1, 2]);
        assert_eq!(state.focus(), Some(0));
    }
}
