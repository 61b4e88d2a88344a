//! Pointer-positioned context menu component.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use selection_core::{
    reduce_context_menu, ContextMenuAction, ContextMenuEvent, ContextMenuState, MenuEntry,
    NavKey, SelectDetail,
};

use crate::dom;
use crate::overlay::use_overlay_dismissal;
use crate::primitives::{bool_token, MenuDivider, MenuOption, MenuSurface};

use super::widget_dom_id;

#[component]
/// Wraps a region so a right-press inside it opens an entry menu at the
/// pointer, clamped to the viewport.
pub fn PointerContextMenu(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] entries: MaybeSignal<Vec<MenuEntry>>,
    /// Host-driven open state; the widget still opens and closes itself.
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_select: Option<Callback<SelectDetail>>,
    #[prop(optional)] on_open: Option<Callback<()>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    // Ids live in `store_value` so every closure below stays `Copy`.
    let widget_id = store_value(id.unwrap_or_else(|| widget_dom_id("context-menu")));
    let surface_id = store_value(widget_id.with_value(|id| format!("{id}-menu")));
    // Element that held focus before the menu opened; refocused on close.
    let restore_focus_to = store_value(None::<web_sys::HtmlElement>);

    let state = create_rw_signal(ContextMenuState::new(entries.get_untracked()));
    let controlled_open = open;
    let open = Signal::derive(move || state.with(|state| state.is_open()));

    let dispatch = move |action: ContextMenuAction| {
        let events = state
            .try_update(|state| reduce_context_menu(state, action))
            .unwrap_or_default();
        for event in events {
            match event {
                ContextMenuEvent::Opened => {
                    if let Some(on_open) = on_open.as_ref() {
                        on_open.call(());
                    }
                }
                ContextMenuEvent::Closed => {
                    if let Some(element) = restore_focus_to.get_value() {
                        restore_focus_to.set_value(None);
                        let _ = element.focus();
                    }
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(());
                    }
                }
                ContextMenuEvent::Selected(detail) => {
                    if let Some(on_select) = on_select.as_ref() {
                        on_select.call(detail);
                    }
                }
            }
        }
    };

    create_effect(move |_| dispatch(ContextMenuAction::SetEntries(entries.get())));
    if let Some(controlled_open) = controlled_open {
        create_effect(move |_| dispatch(ContextMenuAction::SetOpen(controlled_open.get())));
    }

    use_overlay_dismissal(
        open,
        Callback::new(move |_| dispatch(ContextMenuAction::Dismiss)),
    );

    // Keyboard navigation needs real focus on the surface; move it there
    // once per open transition.
    let surface_was_open = create_rw_signal(false);
    create_effect(move |_| {
        let is_open = open.get();
        let was_open = surface_was_open.get_untracked();
        if is_open && !was_open {
            surface_was_open.set(true);
            request_animation_frame(move || {
                let _ = dom::focus_element_by_id(&surface_id.get_value());
            });
        } else if !is_open && was_open {
            surface_was_open.set(false);
        }
    });

    let on_contextmenu = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !state.with_untracked(|state| state.is_open()) {
            restore_focus_to.set_value(dom::active_html_element());
        }
        dispatch(ContextMenuAction::OpenAt {
            x: ev.client_x(),
            y: ev.client_y(),
            viewport: dom::viewport_size(),
        });
    };
    let on_surface_keydown = move |ev: KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();
        dispatch(ContextMenuAction::Key(key));
    };

    let active_descendant = Signal::derive(move || {
        state
            .with(|state| state.focus())
            .map(|index| widget_id.with_value(|id| format!("{id}-entry-{index}")))
            .unwrap_or_default()
    });
    let surface_style = Signal::derive(move || {
        let position = state.with(|state| state.position());
        format!("left:{}px;top:{}px;", position.x, position.y)
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
                                dispatch(ContextMenuAction::PickEntry(index));
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
            class="ui-context-region"
            id=widget_id.get_value()
            data-ui-widget="context-menu"
            data-ui-open=move || bool_token(open.get())
            on:contextmenu=on_contextmenu
        >
            {children()}
            <Show when=move || open.get() fallback=|| ()>
                <MenuSurface
                    id=surface_id.get_value()
                    role="menu"
                    layout_class="ui-context-menu"
                    aria_activedescendant=active_descendant
                    style=surface_style
                    tabindex=-1
                    on_keydown=Callback::new(on_surface_keydown)
                >
                    {entry_rows}
                </MenuSurface>
            </Show>
        </div>
    }
}
