//! Shared presentational primitives behind the composite widgets.
//!
//! The primitives own the stable `data-ui-*` DOM contract consumed by the
//! host's CSS layers; composite widgets compose these instead of emitting
//! ad hoc markup.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Shared overlay surface for listboxes, menus, and the palette panel.
///
/// Presses inside the surface never propagate to the window, so an open
/// overlay cannot dismiss itself.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_activedescendant: MaybeSignal<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional)] tabindex: Option<i32>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            aria-activedescendant=move || aria_activedescendant.get()
            style=move || style.get()
            tabindex=tabindex
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            on:mousedown=move |ev| ev.stop_propagation()
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// One selectable row inside an overlay surface.
pub fn MenuOption(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(into)] label: MaybeSignal<String>,
    // `optional_no_strip` so call sites can forward `Option<String>` as is.
    #[prop(optional_no_strip)] icon: Option<String>,
    #[prop(optional_no_strip)] shortcut: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-menu-option"
            id=id
            role=role
            aria-selected=move || bool_token(selected.get())
            aria-disabled=move || bool_token(disabled.get())
            data-ui-primitive="true"
            data-ui-kind="menu-option"
            data-ui-active=move || bool_token(active.get())
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon.map(|icon| {
                view! {
                    <span class="ui-menu-option-icon" aria-hidden="true" data-ui-icon=icon></span>
                }
            })}
            <span class="ui-menu-option-label">{move || label.get()}</span>
            {shortcut.map(|shortcut| {
                view! { <span class="ui-menu-option-shortcut" aria-hidden="true">{shortcut}</span> }
            })}
        </div>
    }
}

#[component]
/// Visual separator between menu entry groups.
pub fn MenuDivider() -> impl IntoView {
    view! {
        <div
            class="ui-menu-divider"
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-divider"
        ></div>
    }
}

#[component]
/// Text input driving a filterable overlay.
pub fn FieldInput(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] aria_activedescendant: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="ui-field-input"
            id=id
            role=role
            autocomplete="off"
            spellcheck="false"
            prop:value=move || value.get()
            placeholder=move || placeholder.get()
            disabled=move || disabled.get()
            aria-expanded=move || aria_expanded.get()
            aria-controls=aria_controls
            aria-autocomplete="list"
            aria-activedescendant=move || aria_activedescendant.get()
            data-ui-primitive="true"
            data-ui-kind="field-input"
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
        />
    }
}

#[component]
/// Removable chip representing one committed multi-select value.
pub fn TagChip(
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_remove: Option<Callback<()>>,
) -> impl IntoView {
    let remove_label = {
        let label = label.clone();
        move || format!("Remove {}", label.get())
    };
    view! {
        <span
            class="ui-tag-chip"
            data-ui-primitive="true"
            data-ui-kind="tag-chip"
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <span class="ui-tag-chip-label">{move || label.get()}</span>
            <button
                type="button"
                class="ui-tag-chip-remove"
                aria-label=remove_label
                disabled=move || disabled.get()
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    ev.stop_propagation();
                    if let Some(on_remove) = on_remove.as_ref() {
                        on_remove.call(());
                    }
                }
            >
                "\u{00d7}"
            </button>
        </span>
    }
}

#[component]
/// Placeholder row shown when a filter query matches nothing.
pub fn NoResults(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div
            class="ui-menu-empty"
            role="presentation"
            data-ui-primitive="true"
            data-ui-kind="no-results"
        >
            {message.unwrap_or_else(|| "No results".to_string())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_merging_skips_empty_extras() {
        assert_eq!(merge_layout_class("ui-menu-surface", None), "ui-menu-surface");
        assert_eq!(merge_layout_class("ui-menu-surface", Some("")), "ui-menu-surface");
        assert_eq!(
            merge_layout_class("ui-menu-surface", Some("wide")),
            "ui-menu-surface wide"
        );
    }

    #[test]
    fn bool_tokens_are_stable_dom_values() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
