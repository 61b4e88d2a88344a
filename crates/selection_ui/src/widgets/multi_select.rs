//! Multi-select tag input component.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use selection_core::{
    reduce_multi_select, MultiSelectAction, MultiSelectEvent, MultiSelectState, NavKey,
    SelectItem,
};

use crate::dom;
use crate::overlay::use_overlay_dismissal;
use crate::primitives::{bool_token, FieldInput, MenuOption, MenuSurface, NoResults, TagChip};

use super::widget_dom_id;

#[component]
/// Tag field committing any number of values; the overlay stays open across
/// toggles so several values can be picked in one session.
pub fn MultiSelectTagInput(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] items: MaybeSignal<Vec<SelectItem>>,
    #[prop(optional, into)] values: MaybeSignal<Vec<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Host-driven open state; the widget still opens and closes itself.
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] empty_message: Option<String>,
    #[prop(optional)] on_change: Option<Callback<Vec<String>>>,
    #[prop(optional)] on_open: Option<Callback<()>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    // Ids live in `store_value` so every closure below stays `Copy`.
    let widget_id = store_value(id.unwrap_or_else(|| widget_dom_id("tag-input")));
    let listbox_id = store_value(widget_id.with_value(|id| format!("{id}-listbox")));
    let input_id = store_value(widget_id.with_value(|id| format!("{id}-input")));
    let empty_message = store_value(empty_message.unwrap_or_else(|| "No results".to_string()));

    let state = create_rw_signal(MultiSelectState::new(
        items.get_untracked(),
        values.get_untracked(),
    ));
    let controlled_open = open;
    let open = Signal::derive(move || state.with(|state| state.is_open()));

    let dispatch = move |action: MultiSelectAction| {
        let events = state
            .try_update(|state| reduce_multi_select(state, action))
            .unwrap_or_default();
        for event in events {
            match event {
                MultiSelectEvent::Opened => {
                    if let Some(on_open) = on_open.as_ref() {
                        on_open.call(());
                    }
                }
                MultiSelectEvent::Closed => {
                    let _ = dom::focus_element_by_id(&input_id.get_value());
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(());
                    }
                }
                MultiSelectEvent::Changed(values) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(values);
                    }
                }
            }
        }
    };

    create_effect(move |_| dispatch(MultiSelectAction::SetItems(items.get())));
    create_effect(move |_| dispatch(MultiSelectAction::SetValues(values.get())));
    create_effect(move |_| dispatch(MultiSelectAction::SetDisabled(disabled.get())));
    if let Some(controlled_open) = controlled_open {
        create_effect(move |_| dispatch(MultiSelectAction::SetOpen(controlled_open.get())));
    }

    use_overlay_dismissal(
        open,
        Callback::new(move |_| dispatch(MultiSelectAction::Dismiss)),
    );

    let on_input_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Backspace" {
            // The reducer only pops a tag when the filter text is empty, so
            // ordinary text deletion keeps its default behavior.
            dispatch(MultiSelectAction::Backspace);
            return;
        }
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
            dispatch(MultiSelectAction::Key(key));
        } else if matches!(key, NavKey::ArrowDown | NavKey::Enter) {
            ev.prevent_default();
            dispatch(MultiSelectAction::Key(key));
        }
    };
    let on_shell_mousedown = move |ev: MouseEvent| {
        ev.stop_propagation();
        if !state.with_untracked(|state| state.is_open()) {
            dispatch(MultiSelectAction::ToggleTrigger);
        }
        let _ = dom::focus_element_by_id(&input_id.get_value());
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

    let tag_row = move || {
        state
            .with(|state| state.values().to_vec())
            .into_iter()
            .map(|value| {
                let label = {
                    let value = value.clone();
                    Signal::derive(move || state.with(|state| state.tag_label(&value)))
                };
                view! {
                    <TagChip
                        label=label
                        disabled=disabled.clone()
                        on_remove=Callback::new(move |_| {
                            dispatch(MultiSelectAction::RemoveTag(value.clone()));
                        })
                    />
                }
            })
            .collect_view()
    };

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
                    Signal::derive(move || state.with(|state| state.is_selected(&item_value)))
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
                            dispatch(MultiSelectAction::ToggleOption(position));
                        })
                    />
                })
            })
            .collect_view()
    };

    view! {
        <div
            class="ui-tag-input"
            id=widget_id.get_value()
            data-ui-widget="tag-input"
            data-ui-open=move || bool_token(open.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:mousedown=on_shell_mousedown
        >
            <div class="ui-tag-input-field" data-ui-kind="tag-input-field">
                {tag_row}
                <FieldInput
                    id=input_id.get_value()
                    role="combobox"
                    value=query
                    placeholder=placeholder.clone()
                    disabled=disabled.clone()
                    aria_expanded=open
                    aria_controls=listbox_id.get_value()
                    aria_activedescendant=active_descendant
                    on_input=Callback::new(move |text| {
                        dispatch(MultiSelectAction::SetQuery(text));
                    })
                    on_keydown=Callback::new(on_input_keydown)
                />
            </div>
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
