//! Trigger-anchored action menu component.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use selection_core::{
    reduce_menu, MenuAction, MenuEntry, MenuEvent, MenuState, NavKey, SelectDetail,
};

use crate::dom;
use crate::overlay::use_overlay_dismissal;
use crate::primitives::{bool_token, MenuDivider, MenuOption, MenuSurface};

use super::widget_dom_id;

#[component]
/// Button-anchored action menu; activating an entry reports it and closes
/// the surface in the same action.
pub fn TriggerDropdownMenu(
    #[prop(optional, into)] id: Option<String>,
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional, into)] entries: MaybeSignal<Vec<MenuEntry>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Host-driven open state; the widget still opens and closes itself.
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_select: Option<Callback<SelectDetail>>,
    #[prop(optional)] on_open: Option<Callback<()>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    // Ids live in `store_value` so every closure below stays `Copy`.
    let widget_id = store_value(id.unwrap_or_else(|| widget_dom_id("menu")));
    let surface_id = store_value(widget_id.with_value(|id| format!("{id}-menu")));
    let trigger_id = store_value(widget_id.with_value(|id| format!("{id}-trigger")));

    let state = create_rw_signal(MenuState::new(entries.get_untracked()));
    let controlled_open = open;
    let open = Signal::derive(move || state.with(|state| state.is_open()));

    let dispatch = move |action: MenuAction| {
        let events = state
            .try_update(|state| reduce_menu(state, action))
            .unwrap_or_default();
        for event in events {
            match event {
                MenuEvent::Opened => {
                    if let Some(on_open) = on_open.as_ref() {
                        on_open.call(());
                    }
                }
                MenuEvent::Closed => {
                    let _ = dom::focus_element_by_id(&trigger_id.get_value());
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(());
                    }
                }
                MenuEvent::Selected(detail) => {
                    if let Some(on_select) = on_select.as_ref() {
                        on_select.call(detail);
                    }
                }
            }
        }
    };

    create_effect(move |_| dispatch(MenuAction::SetEntries(entries.get())));
    create_effect(move |_| dispatch(MenuAction::SetDisabled(disabled.get())));
    if let Some(controlled_open) = controlled_open {
        create_effect(move |_| dispatch(MenuAction::SetOpen(controlled_open.get())));
    }

    use_overlay_dismissal(open, Callback::new(move |_| dispatch(MenuAction::Dismiss)));

    let on_trigger_keydown = move |ev: KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        if state.with_untracked(|state| state.is_open()) {
            ev.prevent_default();
            ev.stop_propagation();
            dispatch(MenuAction::Key(key));
        } else if matches!(key, NavKey::ArrowDown | NavKey::Enter | NavKey::Space) {
            ev.prevent_default();
            dispatch(MenuAction::OpenWithKeyboard);
        }
    };
    let on_trigger_mousedown = move |ev: MouseEvent| {
        ev.stop_propagation();
        dispatch(MenuAction::ToggleTrigger);
    };

    let active_descendant = Signal::derive(move || {
        state
            .with(|state| state.focus())
            .map(|index| widget_id.with_value(|id| format!("{id}-entry-{index}")))
            .unwrap_or_default()
    });

    let entry_rows = move || {
        state
            .with(|state| state.entries().to_vec())
            .into_iter()
            .enumerate()
            .map(move |(index, entry)| match entry {
                MenuEntry::Divider => view! { <MenuDivider /> }.into_view(),
                MenuEntry::Item(item) => {
                    let entry_id = widget_id.with_value(|id| format!("{id}-entry-{index}"));
                    let active =
                        Signal::derive(move || state.with(|state| state.focus() == Some(index)));
                    view! {
                        <MenuOption
                            id=entry_id
                            role="menuitem"
                            label=item.label.clone()
                            icon=item.icon.clone()
                            shortcut=item.shortcut.clone()
                            active=active
                            disabled=item.disabled
                            on_click=Callback::new(move |_| {
                                dispatch(MenuAction::PickEntry(index));
                            })
                        />
                    }
                    .into_view()
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="ui-menu"
            id=widget_id.get_value()
            data-ui-widget="menu"
            data-ui-open=move || bool_token(open.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <button
                type="button"
                class="ui-menu-trigger"
                id=trigger_id.get_value()
                aria-haspopup="menu"
                aria-expanded=move || open.get()
                aria-controls=surface_id.get_value()
                aria-activedescendant=move || active_descendant.get()
                disabled=move || disabled.get()
                data-ui-kind="menu-trigger"
                on:mousedown=on_trigger_mousedown
                on:keydown=on_trigger_keydown
            >
                {move || label.get()}
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <MenuSurface id=surface_id.get_value() role="menu">
                    {entry_rows}
                </MenuSurface>
            </Show>
        </div>
    }
}
