//! Command palette component.

use leptos::ev::KeyboardEvent;
use leptos::*;

use selection_core::{
    reduce_palette, NavKey, PaletteAction, PaletteEvent, PaletteState, SelectDetail, SelectItem,
};

use crate::dom;
use crate::overlay::use_overlay_dismissal;
use crate::primitives::{bool_token, FieldInput, MenuOption, MenuSurface, NoResults};

use super::widget_dom_id;

#[component]
/// Modal command launcher; every open starts a fresh session with an empty
/// query and the first command pre-focused.
pub fn CommandPalette(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] items: MaybeSignal<Vec<SelectItem>>,
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] empty_message: Option<String>,
    #[prop(optional)] on_select: Option<Callback<SelectDetail>>,
    #[prop(optional)] on_open: Option<Callback<()>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    // Ids live in `store_value` so every closure below stays `Copy`.
    let widget_id = store_value(id.unwrap_or_else(|| widget_dom_id("palette")));
    let listbox_id = store_value(widget_id.with_value(|id| format!("{id}-listbox")));
    let input_id = store_value(widget_id.with_value(|id| format!("{id}-input")));
    let empty_message =
        store_value(empty_message.unwrap_or_else(|| "No matching commands".to_string()));
    // Element that held focus before the palette opened; refocused on close.
    let restore_focus_to = store_value(None::<web_sys::HtmlElement>);

    // `Signal` is `Copy`, so the overlay body can use the placeholder freely.
    let placeholder = Signal::derive(move || placeholder.get());

    let state = create_rw_signal(PaletteState::new(items.get_untracked()));
    let is_open = Signal::derive(move || state.with(|state| state.is_open()));

    let dispatch = move |action: PaletteAction| {
        let events = state
            .try_update(|state| reduce_palette(state, action))
            .unwrap_or_default();
        for event in events {
            match event {
                PaletteEvent::Opened => {
                    if let Some(on_open) = on_open.as_ref() {
                        on_open.call(());
                    }
                }
                PaletteEvent::Closed => {
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(());
                    }
                }
                PaletteEvent::Selected(detail) => {
                    if let Some(on_select) = on_select.as_ref() {
                        on_select.call(detail);
                    }
                }
            }
        }
    };

    create_effect(move |_| dispatch(PaletteAction::SetItems(items.get())));
    create_effect(move |_| {
        if open.get() {
            dispatch(PaletteAction::Open);
        } else {
            dispatch(PaletteAction::SetOpen(false));
        }
    });

    use_overlay_dismissal(
        is_open,
        Callback::new(move |_| dispatch(PaletteAction::Dismiss)),
    );

    // Suspend page scrolling for the modal session; restore on close and
    // unconditionally on teardown.
    let scroll_was_suspended = create_rw_signal(false);
    create_effect(move |_| {
        let open = is_open.get();
        let suspended = scroll_was_suspended.get_untracked();
        if open && !suspended {
            scroll_was_suspended.set(true);
            restore_focus_to.set_value(dom::active_html_element());
            dom::suspend_body_scroll();
            request_animation_frame(move || {
                let _ = dom::focus_element_by_id(&input_id.get_value());
            });
        } else if !open && suspended {
            scroll_was_suspended.set(false);
            dom::restore_body_scroll();
            if let Some(element) = restore_focus_to.get_value() {
                restore_focus_to.set_value(None);
                let _ = element.focus();
            }
        }
    });
    on_cleanup(dom::restore_body_scroll);

    let on_input_keydown = move |ev: KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        // Space keeps inserting text; it is not a commit key inside a
        // filter field.
        if matches!(key, NavKey::Space) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        dispatch(PaletteAction::Key(key));
    };

    let active_descendant = Signal::derive(move || {
        state
            .with(|state| {
                state
                    .focus()
                    .and_then(|position| state.filtered().get(position).copied())
            })
            .map(|original| widget_id.with_value(|id| format!("{id}-command-{original}")))
            .unwrap_or_default()
    });
    let query = Signal::derive(move || state.with(|state| state.query().to_string()));
    let no_matches = Signal::derive(move || state.with(|state| state.has_no_matches()));

    let command_rows = move || {
        let (filtered, all) = state.with(|state| (state.filtered(), state.items().to_vec()));
        filtered
            .into_iter()
            .enumerate()
            .filter_map(move |(position, original)| {
                let item = all.get(original)?.clone();
                let command_id = widget_id.with_value(|id| format!("{id}-command-{original}"));
                let active =
                    Signal::derive(move || state.with(|state| state.focus() == Some(position)));
                Some(view! {
                    <MenuOption
                        id=command_id
                        role="option"
                        label=item.label.clone()
                        icon=item.icon.clone()
                        shortcut=item.shortcut.clone()
                        active=active
                        disabled=item.disabled
                        on_click=Callback::new(move |_| {
                            dispatch(PaletteAction::PickItem(position));
                        })
                    />
                })
            })
            .collect_view()
    };

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <div
                class="ui-palette-backdrop"
                id=widget_id.get_value()
                data-ui-widget="palette"
                data-ui-open=move || bool_token(is_open.get())
            >
                <MenuSurface layout_class="ui-palette-panel" role="dialog" aria_label="Command palette">
                    <FieldInput
                        id=input_id.get_value()
                        role="combobox"
                        value=query
                        placeholder=placeholder
                        aria_expanded=is_open
                        aria_controls=listbox_id.get_value()
                        aria_activedescendant=active_descendant
                        on_input=Callback::new(move |text| {
                            dispatch(PaletteAction::SetQuery(text));
                        })
                        on_keydown=Callback::new(on_input_keydown)
                    />
                    <div class="ui-palette-results" id=listbox_id.get_value() role="listbox">
                        <Show when=move || no_matches.get() fallback=command_rows>
                            <NoResults message=empty_message.get_value() />
                        </Show>
                    </div>
                </MenuSurface>
            </div>
        </Show>
    }
}
