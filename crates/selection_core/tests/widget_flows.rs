//! End-to-end reducer flows, one per widget family.

use pretty_assertions::assert_eq;

use selection_core::{
    reduce_context_menu, reduce_dropdown, reduce_menu, reduce_multi_select, reduce_palette,
    ChangeDetail, ContextMenuAction, ContextMenuEvent, ContextMenuState, DropdownAction,
    DropdownEvent, DropdownState, MenuAction, MenuEntry, MenuPosition, MenuState,
    MultiSelectAction, MultiSelectEvent, MultiSelectState, NavKey, PaletteAction, PaletteState,
    SelectItem, ViewportSize,
};

#[test]
fn dropdown_commits_the_second_option_after_two_arrow_presses() {
    let mut state = DropdownState::new(
        vec![
            SelectItem::new("daily", "Daily"),
            SelectItem::new("weekly", "Weekly"),
            SelectItem::new("monthly", "Monthly"),
        ],
        None,
    );

    let mut log = Vec::new();
    log.extend(reduce_dropdown(&mut state, DropdownAction::ToggleTrigger));
    log.extend(reduce_dropdown(&mut state, DropdownAction::Key(NavKey::ArrowDown)));
    log.extend(reduce_dropdown(&mut state, DropdownAction::Key(NavKey::ArrowDown)));
    log.extend(reduce_dropdown(&mut state, DropdownAction::Key(NavKey::Enter)));

    assert_eq!(
        log,
        vec![
            DropdownEvent::Opened,
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
fn tag_input_select_keeps_the_overlay_open_then_backspace_empties_it() {
    let mut state = MultiSelectState::new(
        vec![
            SelectItem::new("design", "Design"),
            SelectItem::new("engineering", "Engineering"),
            SelectItem::new("product", "Product"),
        ],
        vec![],
    );

    let _ = reduce_multi_select(&mut state, MultiSelectAction::SetQuery("eng".into()));
    assert_eq!(state.filtered(), vec![1]);

    let events = reduce_multi_select(&mut state, MultiSelectAction::ToggleOption(0));
    assert_eq!(
        events,
        vec![MultiSelectEvent::Changed(vec!["engineering".into()])]
    );
    assert_eq!(state.query(), "");
    assert!(state.is_open());

    let events = reduce_multi_select(&mut state, MultiSelectAction::Backspace);
    assert_eq!(events, vec![MultiSelectEvent::Changed(vec![])]);
    assert!(state.values().is_empty());
}

#[test]
fn context_menu_clamps_a_bottom_right_press_into_the_viewport() {
    let entries: Vec<MenuEntry> = (1..=5)
        .map(|n| MenuEntry::from(SelectItem::new(format!("e{n}"), format!("Entry {n}"))))
        .collect();
    let mut state = ContextMenuState::new(entries);

    let events = reduce_context_menu(
        &mut state,
        ContextMenuAction::OpenAt {
            x: 950,
            y: 780,
            viewport: ViewportSize {
                width: 1000,
                height: 800,
            },
        },
    );
    assert_eq!(events, vec![ContextMenuEvent::Opened]);
    assert_eq!(state.position(), MenuPosition { x: 772, y: 632 });
}

#[test]
fn palette_sessions_never_leak_query_or_focus_into_the_next_open() {
    let mut state = PaletteState::new(vec![
        SelectItem::new("open-file", "Open File"),
        SelectItem::new("save-all", "Save All"),
    ]);

    let _ = reduce_palette(&mut state, PaletteAction::Open);
    let _ = reduce_palette(&mut state, PaletteAction::SetQuery("save".into()));
    let _ = reduce_palette(&mut state, PaletteAction::Key(NavKey::Escape));
    assert!(!state.is_open());

    let _ = reduce_palette(&mut state, PaletteAction::Open);
    assert_eq!(state.query(), "");
    assert_eq!(state.focus(), Some(0));
}

#[test]
fn trigger_menu_arrow_navigation_never_stops_on_the_divider() {
    let mut state = MenuState::new(vec![
        MenuEntry::from(SelectItem::new("a", "Item A")),
        MenuEntry::Divider,
        MenuEntry::from(SelectItem::new("b", "Item B")),
    ]);

    // ArrowDown on the closed trigger opens with the first entry focused.
    let _ = reduce_menu(&mut state, MenuAction::OpenWithKeyboard);
    assert_eq!(state.focus(), Some(0));

    let _ = reduce_menu(&mut state, MenuAction::Key(NavKey::ArrowDown));
    assert_eq!(state.focus(), Some(2));
}
