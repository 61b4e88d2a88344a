//! Single-select dropdown component.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use selection_core::{
    reduce_dropdown, ChangeDetail, DropdownAction, DropdownEvent, DropdownState, NavKey,
    SelectItem,
};

use crate::dom;
use crate::overlay::use_overlay_dismissal;
use crate::primitives::{bool_token, MenuOption, MenuSurface};

use super::widget_dom_id;

#[component]
/// Closed-by-default select field committing exactly one value through a
/// listbox overlay.
pub fn SingleSelectDropdown(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] items: MaybeSignal<Vec<SelectItem>>,
    #[prop(optional, into)] value: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Host-driven open state; the widget still opens and closes itself.
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<ChangeDetail>>,
    #[prop(optional)] on_open: Option<Callback<()>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    // Ids live in `store_value` so every closure below stays `Copy`.
    let widget_id = store_value(id.unwrap_or_else(|| widget_dom_id("dropdown")));
    let listbox_id = store_value(widget_id.with_value(|id| format!("{id}-listbox")));
    let trigger_id = store_value(widget_id.with_value(|id| format!("{id}-trigger")));

    let state = create_rw_signal(DropdownState::new(
        items.get_untracked(),
        value.get_untracked(),
    ));
    let controlled_open = open;
    let open = Signal::derive(move || state.with(|state| state.is_open()));

    let dispatch = move |action: DropdownAction| {
        let events = state
            .try_update(|state| reduce_dropdown(state, action))
            .unwrap_or_default();
        for event in events {
            match event {
                DropdownEvent::Opened => {
                    if let Some(on_open) = on_open.as_ref() {
                        on_open.call(());
                    }
                }
                DropdownEvent::Closed => {
                    let _ = dom::focus_element_by_id(&trigger_id.get_value());
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(());
                    }
                }
                DropdownEvent::Changed(detail) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(detail);
                    }
                }
            }
        }
    };

    create_effect(move |_| dispatch(DropdownAction::SetItems(items.get())));
    create_effect(move |_| dispatch(DropdownAction::SetValue(value.get())));
    create_effect(move |_| dispatch(DropdownAction::SetDisabled(disabled.get())));
    if let Some(controlled_open) = controlled_open {
        create_effect(move |_| dispatch(DropdownAction::SetOpen(controlled_open.get())));
    }

    use_overlay_dismissal(open, Callback::new(move |_| dispatch(DropdownAction::Dismiss)));

    let on_trigger_keydown = move |ev: KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        if state.with_untracked(|state| state.is_open()) {
            ev.prevent_default();
            ev.stop_propagation();
            dispatch(DropdownAction::Key(key));
        } else if matches!(key, NavKey::ArrowDown | NavKey::Enter | NavKey::Space) {
            ev.prevent_default();
            dispatch(DropdownAction::OpenWithKeyboard);
        }
    };
    let on_trigger_mousedown = move |ev: MouseEvent| {
        ev.stop_propagation();
        dispatch(DropdownAction::ToggleTrigger);
    };

    let active_descendant = Signal::derive(move || {
        state
            .with(|state| state.focus())
            .map(|index| widget_id.with_value(|id| format!("{id}-option-{index}")))
            .unwrap_or_default()
    });
    let trigger_label = Signal::derive(move || {
        state
            .with(|state| state.selected_label().map(ToString::to_string))
            .unwrap_or_else(|| placeholder.get())
    });

    let option_rows = move || {
        state
            .with(|state| state.items().to_vec())
            .into_iter()
            .enumerate()
            .map(move |(index, item)| {
                let option_id = widget_id.with_value(|id| format!("{id}-option-{index}"));
                let item_value = item.value.clone();
                let active =
                    Signal::derive(move || state.with(|state| state.focus() == Some(index)));
                let selected = {
                    let item_value = item_value.clone();
                    Signal::derive(move || {
                        state.with(|state| state.value() == Some(item_value.as_str()))
                    })
                };
                view! {
                    <MenuOption
                        id=option_id
                        role="option"
                        label=item.label.clone()
                        icon=item.icon.clone()
                        active=active
                        selected=selected
                        disabled=item.disabled
                        on_click=Callback::new(move |_| {
                            dispatch(DropdownAction::PickOption(index));
                        })
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="ui-select"
            id=widget_id.get_value()
            data-ui-widget="dropdown"
            data-ui-open=move || bool_token(open.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <button
                type="button"
                class="ui-select-trigger"
                id=trigger_id.get_value()
                aria-haspopup="listbox"
                aria-expanded=move || open.get()
                aria-controls=listbox_id.get_value()
                aria-activedescendant=move || active_descendant.get()
                disabled=move || disabled.get()
                data-ui-kind="select-trigger"
                on:mousedown=on_trigger_mousedown
                on:keydown=on_trigger_keydown
            >
                {move || trigger_label.get()}
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <MenuSurface id=listbox_id.get_value() role="listbox">
                    {option_rows}
                </MenuSurface>
            </Show>
        </div>
    }
}
