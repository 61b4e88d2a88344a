//! Filterable combobox component.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use selection_core::{
    reduce_combobox, ChangeDetail, ComboboxAction, ComboboxEvent, ComboboxState, NavKey,
    SelectItem,
};

use crate::dom;
use crate::overlay::use_overlay_dismissal;
use crate::primitives::{bool_token, FieldInput, MenuOption, MenuSurface, NoResults};

use super::widget_dom_id;

#[component]
/// Text field filtering a listbox overlay; committing an option round-trips
/// its label back into the field.
pub fn FilterableCombobox(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] items: MaybeSignal<Vec<SelectItem>>,
    #[prop(optional, into)] value: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Host-driven open state; the widget still opens and closes itself.
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] empty_message: Option<String>,
    #[prop(optional)] on_change: Option<Callback<ChangeDetail>>,
    #[prop(optional)] on_open: Option<Callback<()>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    // Ids live in `store_value` so every closure below stays `Copy`.
    let widget_id = store_value(id.unwrap_or_else(|| widget_dom_id("combobox")));
    let listbox_id = store_value(widget_id.with_value(|id| format!("{id}-listbox")));
    let input_id = store_value(widget_id.with_value(|id| format!("{id}-input")));
    let empty_message = store_value(empty_message.unwrap_or_else(|| "No results".to_string()));

    let state = create_rw_signal(ComboboxState::new(
        items.get_untracked(),
        value.get_untracked(),
    ));
    let controlled_open = open;
    let open = Signal::derive(move || state.with(|state| state.is_open()));

    let dispatch = move |action: ComboboxAction| {
        let events = state
            .try_update(|state| reduce_combobox(state, action))
            .unwrap_or_default();
        for event in events {
            match event {
                ComboboxEvent::Opened => {
                    if let Some(on_open) = on_open.as_ref() {
                        on_open.call(());
                    }
                }
                ComboboxEvent::Closed => {
                    let _ = dom::focus_element_by_id(&input_id.get_value());
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(());
                    }
                }
                ComboboxEvent::Changed(detail) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(detail);
                    }
                }
            }
        }
    };

    create_effect(move |_| dispatch(ComboboxAction::SetItems(items.get())));
    create_effect(move |_| dispatch(ComboboxAction::SetValue(value.get())));
    create_effect(move |_| dispatch(ComboboxAction::SetDisabled(disabled.get())));
    if let Some(controlled_open) = controlled_open {
        create_effect(move |_| dispatch(ComboboxAction::SetOpen(controlled_open.get())));
    }

    use_overlay_dismissal(open, Callback::new(move |_| dispatch(ComboboxAction::Dismiss)));

    let on_input_keydown = move |ev: KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        // Space keeps inserting text; it is not a commit key inside a
        // filter field.
        if matches!(key, NavKey::Space) {
            return;
        }
        if state.with_untracked(|state| state.is_open()) {
            ev.prevent_default();
            ev.stop_propagation();
            dispatch(ComboboxAction::Key(key));
        } else if matches!(key, NavKey::ArrowDown | NavKey::Enter) {
            ev.prevent_default();
            dispatch(ComboboxAction::Key(key));
        }
    };
    let on_input_mousedown = move |ev: MouseEvent| {
        ev.stop_propagation();
        if !state.with_untracked(|state| state.is_open()) {
            dispatch(ComboboxAction::ToggleTrigger);
        }
    };

    let active_descendant = Signal::derive(move || {
        state
            .with(|state| {
                state
                    .focus()
                    .and_then(|position| state.filtered().get(position).copied())
            })
            .map(|original| widget_id.with_value(|id| format!("{id}-option-{original}")))
            .unwrap_or_default()
    });
    let query = Signal::derive(move || state.with(|state| state.query().to_string()));
    let no_matches = Signal::derive(move || state.with(|state| state.has_no_matches()));

    let option_rows = move || {
        let (filtered, all) = state.with(|state| (state.filtered(), state.items().to_vec()));
        filtered
            .into_iter()
            .enumerate()
            .filter_map(move |(position, original)| {
                let item = all.get(original)?.clone();
                let option_id = widget_id.with_value(|id| format!("{id}-option-{original}"));
                let item_value = item.value.clone();
                let active =
                    Signal::derive(move || state.with(|state| state.focus() == Some(position)));
                let selected = {
                    let item_value = item_value.clone();
                    Signal::derive(move || {
                        state.with(|state| state.value() == Some(item_value.as_str()))
                    })
                };
                Some(view! {
                    <MenuOption
                        id=option_id
                        role="option"
                        label=item.label.clone()
                        icon=item.icon.clone()
                        active=active
                        selected=selected
                        disabled=item.disabled
                        on_click=Callback::new(move |_| {
                            dispatch(ComboboxAction::PickOption(position));
                        })
                    />
                })
            })
            .collect_view()
    };

    view! {
        <div
            class="ui-combobox"
            id=widget_id.get_value()
            data-ui-widget="combobox"
            data-ui-open=move || bool_token(open.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <FieldInput
                id=input_id.get_value()
                role="combobox"
                value=query
                placeholder=placeholder.clone()
                disabled=disabled.clone()
                aria_expanded=open
                aria_controls=listbox_id.get_value()
                aria_activedescendant=active_descendant
                on_input=Callback::new(move |text| dispatch(ComboboxAction::SetQuery(text)))
                on_keydown=Callback::new(on_input_keydown)
                on_mousedown=Callback::new(on_input_mousedown)
            />
            <Show when=move || open.get() fallback=|| ()>
                <MenuSurface id=listbox_id.get_value() role="listbox">
                    <Show when=move || no_matches.get() fallback=option_rows>
                        <NoResults message=empty_message.get_value() />
                    </Show>
                </MenuSurface>
            </Show>
        </div>
    }
}
