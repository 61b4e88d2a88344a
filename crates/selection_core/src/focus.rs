//! Shared keyboard-navigation engine used by every composite widget.
//!
//! The engine owns nothing but a single focus index over an ordered entry
//! list. Each widget injects its own notion of which indices can take focus
//! through [`FocusableList`], so disabled items and dividers keep their
//! position in the list while being skipped as stepping stops.

use crate::item::{MenuEntry, SelectItem};

/// Ordered entry collection as seen by [`FocusNav`]: a length plus
/// per-index selectability.
pub trait FocusableList {
    /// Total number of entries, including disabled ones and dividers.
    fn len(&self) -> usize;

    /// Whether keyboard focus may land on the entry at `index`.
    fn is_selectable(&self, index: usize) -> bool;

    /// Whether the list has no entries at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries focus may land on.
    fn selectable_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_selectable(i)).count()
    }
}

impl FocusableList for [SelectItem] {
    fn len(&self) -> usize {
        <[SelectItem]>::len(self)
    }

    fn is_selectable(&self, index: usize) -> bool {
        self.get(index).is_some_and(|item| !item.disabled)
    }
}

impl FocusableList for [MenuEntry] {
    fn len(&self) -> usize {
        <[MenuEntry]>::len(self)
    }

    fn is_selectable(&self, index: usize) -> bool {
        self.get(index).is_some_and(MenuEntry::is_selectable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys the navigation engine understands.
pub enum NavKey {
    /// Step focus to the next selectable entry, wrapping past the end.
    ArrowDown,
    /// Step focus to the previous selectable entry, wrapping past the start.
    ArrowUp,
    /// Jump to the first selectable entry.
    Home,
    /// Jump to the last selectable entry.
    End,
    /// Commit the focused entry.
    Enter,
    /// Commit the focused entry.
    Space,
    /// Dismiss the overlay.
    Escape,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` string to a navigation key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowUp" => Some(Self::ArrowUp),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Enter" => Some(Self::Enter),
            " " => Some(Self::Space),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a handled key press asks the owning widget to do.
pub enum NavOutcome {
    /// Focus moved; re-render the active entry.
    Moved,
    /// Commit the entry at this index (an index into the navigated list).
    Select(usize),
    /// Dismiss the overlay.
    Close,
    /// Key was recognized and consumed without any state change.
    Handled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Focus-index state machine shared by all six composite widgets.
///
/// `None` is the "nothing focused" state (index -1 in the host contract).
pub struct FocusNav {
    focus: Option<usize>,
}

impl FocusNav {
    /// Creates an engine with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused index, if any.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Clears the focus back to "nothing focused".
    pub fn reset(&mut self) {
        self.focus = None;
    }

    /// Seeds focus on a specific index, refusing non-selectable targets.
    pub fn seed<L: FocusableList + ?Sized>(&mut self, index: Option<usize>, list: &L) {
        self.focus = index.filter(|&i| list.is_selectable(i));
    }

    /// Seeds focus on the first selectable entry, if one exists.
    pub fn seed_first<L: FocusableList + ?Sized>(&mut self, list: &L) {
        self.focus = first_selectable(list);
    }

    /// Re-validates focus after a list mutation: an index that no longer
    /// exists or is no longer selectable degrades to "nothing focused".
    pub fn clamp<L: FocusableList + ?Sized>(&mut self, list: &L) {
        if let Some(index) = self.focus {
            if index >= list.len() || !list.is_selectable(index) {
                self.focus = None;
            }
        }
    }

    /// Interprets one key press against the current list.
    ///
    /// Navigation keys on an empty selectable set are consumed no-ops;
    /// Escape always requests dismissal.
    pub fn handle_key<L: FocusableList + ?Sized>(&mut self, key: NavKey, list: &L) -> NavOutcome {
        match key {
            NavKey::Escape => NavOutcome::Close,
            NavKey::Enter | NavKey::Space => match self.focus {
                Some(index) if list.is_selectable(index) => NavOutcome::Select(index),
                _ => NavOutcome::Handled,
            },
            NavKey::ArrowDown => self.step(list, 1),
            NavKey::ArrowUp => self.step(list, -1),
            NavKey::Home => self.jump(first_selectable(list)),
            NavKey::End => self.jump(last_selectable(list)),
        }
    }

    fn step<L: FocusableList + ?Sized>(&mut self, list: &L, direction: i64) -> NavOutcome {
        if list.selectable_count() == 0 {
            return NavOutcome::Handled;
        }
        let next = match self.focus {
            None if direction > 0 => first_selectable(list),
            None => last_selectable(list),
            Some(current) => step_from(list, current, direction),
        };
        self.jump(next)
    }

    fn jump(&mut self, target: Option<usize>) -> NavOutcome {
        match target {
            Some(index) => {
                self.focus = Some(index);
                NavOutcome::Moved
            }
            None => NavOutcome::Handled,
        }
    }
}

/// First selectable index of a list, if any.
pub fn first_selectable<L: FocusableList + ?Sized>(list: &L) -> Option<usize> {
    (0..list.len()).find(|&i| list.is_selectable(i))
}

/// Last selectable index of a list, if any.
pub fn last_selectable<L: FocusableList + ?Sized>(list: &L) -> Option<usize> {
    (0..list.len()).rev().find(|&i| list.is_selectable(i))
}

fn step_from<L: FocusableList + ?Sized>(
    list: &L,
    current: usize,
    direction: i64,
) -> Option<usize> {
    let len = list.len() as i64;
    (1..=len)
        .map(|offset| (current as i64 + direction * offset).rem_euclid(len) as usize)
        .find(|&candidate| list.is_selectable(candidate))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn items(rows: &[(&str, bool)]) -> Vec<SelectItem> {
        rows
            .iter()
            .map(|&(value, disabled)| {
                let item = SelectItem::new(value, value.to_uppercase());
                if disabled { item.disabled() } else { item }
            })
            .collect()
    }

    #[test]
    fn arrow_down_enters_at_first_entry_and_wraps_full_cycle() {
        let list = items(&[("a", false), ("b", false), ("c", false)]);
        let mut nav = FocusNav::new();

        assert_eq!(nav.handle_key(NavKey::ArrowDown, list.as_slice()), NavOutcome::Moved);
        assert_eq!(nav.focus(), Some(0));

        // A full cycle of N presses from the first entry returns to it.
        for _ in 0..list.len() {
            let _ = nav.handle_key(NavKey::ArrowDown, list.as_slice());
        }
        assert_eq!(nav.focus(), Some(0));
    }

    #[test]
    fn arrow_up_from_nothing_focused_wraps_to_last_entry() {
        let list = items(&[("a", false), ("b", false), ("c", false)]);
        let mut nav = FocusNav::new();

        assert_eq!(nav.handle_key(NavKey::ArrowUp, list.as_slice()), NavOutcome::Moved);
        assert_eq!(nav.focus(), Some(2));

        let _ = nav.handle_key(NavKey::ArrowUp, list.as_slice());
        assert_eq!(nav.focus(), Some(1));
    }

    #[test]
    fn disabled_entries_are_never_stepping_stops() {
        let list = items(&[("a", false), ("b", true), ("c", false)]);
        let mut nav = FocusNav::new();

        let _ = nav.handle_key(NavKey::ArrowDown, list.as_slice());
        assert_eq!(nav.focus(), Some(0));
        let _ = nav.handle_key(NavKey::ArrowDown, list.as_slice());
        assert_eq!(nav.focus(), Some(2));
        let _ = nav.handle_key(NavKey::ArrowDown, list.as_slice());
        assert_eq!(nav.focus(), Some(0));
    }

    #[test]
    fn dividers_keep_their_index_but_are_skipped() {
        let entries = vec![
            MenuEntry::from(SelectItem::new("a", "Item A")),
            MenuEntry::Divider,
            MenuEntry::from(SelectItem::new("b", "Item B")),
        ];
        let mut nav = FocusNav::new();

        let _ = nav.handle_key(NavKey::ArrowDown, entries.as_slice());
        assert_eq!(nav.focus(), Some(0));
        let _ = nav.handle_key(NavKey::ArrowDown, entries.as_slice());
        assert_eq!(nav.focus(), Some(2));
    }

    #[test]
    fn home_and_end_jump_to_selectable_edges() {
        let list = items(&[("a", true), ("b", false), ("c", false), ("d", true)]);
        let mut nav = FocusNav::new();

        assert_eq!(nav.handle_key(NavKey::End, list.as_slice()), NavOutcome::Moved);
        assert_eq!(nav.focus(), Some(2));
        assert_eq!(nav.handle_key(NavKey::Home, list.as_slice()), NavOutcome::Moved);
        assert_eq!(nav.focus(), Some(1));
    }

    #[test]
    fn enter_selects_only_a_selectable_focused_entry() {
        let list = items(&[("a", false), ("b", false)]);
        let mut nav = FocusNav::new();

        assert_eq!(nav.handle_key(NavKey::Enter, list.as_slice()), NavOutcome::Handled);

        let _ = nav.handle_key(NavKey::ArrowDown, list.as_slice());
        assert_eq!(
            nav.handle_key(NavKey::Enter, list.as_slice()),
            NavOutcome::Select(0)
        );
        assert_eq!(
            nav.handle_key(NavKey::Space, list.as_slice()),
            NavOutcome::Select(0)
        );
    }

    #[test]
    fn empty_list_consumes_navigation_but_escape_still_closes() {
        let list: Vec<SelectItem> = Vec::new();
        let mut nav = FocusNav::new();

        assert_eq!(
            nav.handle_key(NavKey::ArrowDown, list.as_slice()),
            NavOutcome::Handled
        );
        assert_eq!(nav.focus(), None);
        assert_eq!(
            nav.handle_key(NavKey::Escape, list.as_slice()),
            NavOutcome::Close
        );
    }

    #[test]
    fn clamp_degrades_stale_focus_to_nothing() {
        let list = items(&[("a", false), ("b", false), ("c", false)]);
        let mut nav = FocusNav::new();
        let _ = nav.handle_key(NavKey::End, list.as_slice());
        assert_eq!(nav.focus(), Some(2));

        let shorter = items(&[("a", false)]);
        nav.clamp(shorter.as_slice());
        assert_eq!(nav.focus(), None);
    }
}
