use leptos::*;
use serde::{Deserialize, Serialize};

use selection_core::{ChangeDetail, MenuEntry, SelectDetail, SelectItem};
use selection_ui::{
    CommandPalette, FilterableCombobox, MultiSelectTagInput, PointerContextMenu,
    SingleSelectDropdown, TriggerDropdownMenu,
};

const EVENT_LOG_CAPACITY: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ShowcaseState {
    cadence: Option<String>,
    department: Option<String>,
    labels: Vec<String>,
    last_menu_entry: Option<String>,
    last_context_entry: Option<String>,
    last_command: Option<String>,
}

fn cadence_items() -> Vec<SelectItem> {
    vec![
        SelectItem::new("daily", "Daily"),
        SelectItem::new("weekly", "Weekly"),
        SelectItem::new("monthly", "Monthly"),
        SelectItem::new("quarterly", "Quarterly").disabled(),
    ]
}

fn department_items() -> Vec<SelectItem> {
    vec![
        SelectItem::new("design", "Design"),
        SelectItem::new("engineering", "Engineering"),
        SelectItem::new("marketing", "Marketing"),
        SelectItem::new("product", "Product"),
        SelectItem::new("support", "Support"),
    ]
}

fn label_items() -> Vec<SelectItem> {
    vec![
        SelectItem::new("bug", "Bug"),
        SelectItem::new("feature", "Feature"),
        SelectItem::new("chore", "Chore"),
        SelectItem::new("docs", "Docs"),
    ]
}

fn file_menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::from(SelectItem::new("new", "New File").with_shortcut("Ctrl+N")),
        MenuEntry::from(SelectItem::new("open", "Open...").with_shortcut("Ctrl+O")),
        MenuEntry::from(SelectItem::new("save", "Save").with_shortcut("Ctrl+S")),
        MenuEntry::Divider,
        MenuEntry::from(SelectItem::new("close", "Close Window")),
    ]
}

fn canvas_context_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::from(SelectItem::new("cut", "Cut").with_shortcut("Ctrl+X")),
        MenuEntry::from(SelectItem::new("copy", "Copy").with_shortcut("Ctrl+C")),
        MenuEntry::from(SelectItem::new("paste", "Paste").with_shortcut("Ctrl+V")),
        MenuEntry::Divider,
        MenuEntry::from(SelectItem::new("inspect", "Inspect")),
    ]
}

fn command_items() -> Vec<SelectItem> {
    vec![
        SelectItem::new("open-file", "Open File...").with_shortcut("Ctrl+O"),
        SelectItem::new("save-all", "Save All").with_shortcut("Ctrl+Shift+S"),
        SelectItem::new("toggle-terminal", "Toggle Terminal").with_shortcut("Ctrl+`"),
        SelectItem::new("reload-window", "Reload Window"),
        SelectItem::new("about", "About"),
    ]
}

#[component]
/// Showcase page wiring every composite widget to a shared snapshot panel.
pub fn ShowcaseApp() -> impl IntoView {
    let state = create_rw_signal(ShowcaseState::default());
    let palette_open = create_rw_signal(false);
    let event_log = create_rw_signal(Vec::<String>::new());

    let log_event = move |line: String| {
        event_log.update(|log| {
            log.insert(0, line);
            log.truncate(EVENT_LOG_CAPACITY);
        });
    };

    let palette_shortcut = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "k" {
            ev.prevent_default();
            palette_open.set(true);
        }
    });
    on_cleanup(move || palette_shortcut.remove());

    let snapshot = move || {
        serde_json::to_string_pretty(&state.get())
            .unwrap_or_else(|err| format!("snapshot failed: {err}"))
    };

    view! {
        <main class="showcase-root">
            <header class="showcase-header">
                <h1>"Selection Widgets"</h1>
                <p>"Six composite widgets over one focus engine. Press Ctrl+K for the command palette."</p>
            </header>

            <section class="showcase-section">
                <h2>"Single-select dropdown"</h2>
                <SingleSelectDropdown
                    items=cadence_items()
                    value=Signal::derive(move || state.get().cadence)
                    placeholder="Select a cadence"
                    on_change=Callback::new(move |detail: ChangeDetail| {
                        log_event(format!("dropdown change: {}", detail.value));
                        state.update(|state| state.cadence = Some(detail.value));
                    })
                />
            </section>

            <section class="showcase-section">
                <h2>"Filterable combobox"</h2>
                <FilterableCombobox
                    items=department_items()
                    value=Signal::derive(move || state.get().department)
                    placeholder="Search departments"
                    on_change=Callback::new(move |detail: ChangeDetail| {
                        log_event(format!("combobox change: {}", detail.value));
                        state.update(|state| state.department = Some(detail.value));
                    })
                />
            </section>

            <section class="showcase-section">
                <h2>"Multi-select tag input"</h2>
                <MultiSelectTagInput
                    items=label_items()
                    values=Signal::derive(move || state.get().labels)
                    placeholder="Add labels"
                    on_change=Callback::new(move |values: Vec<String>| {
                        log_event(format!("labels: [{}]", values.join(", ")));
                        state.update(|state| state.labels = values);
                    })
                />
            </section>

            <section class="showcase-section">
                <h2>"Trigger menu"</h2>
                <TriggerDropdownMenu
                    label="File"
                    entries=file_menu_entries()
                    on_select=Callback::new(move |detail: SelectDetail| {
                        log_event(format!("menu select: {}", detail.item.value));
                        state.update(|state| {
                            state.last_menu_entry = Some(detail.item.value);
                        });
                    })
                />
            </section>

            <section class="showcase-section">
                <h2>"Context menu"</h2>
                <PointerContextMenu
                    entries=canvas_context_entries()
                    on_select=Callback::new(move |detail: SelectDetail| {
                        log_event(format!("context select: {}", detail.item.value));
                        state.update(|state| {
                            state.last_context_entry = Some(detail.item.value);
                        });
                    })
                >
                    <div class="showcase-canvas">
                        "Right-click anywhere in this region."
                    </div>
                </PointerContextMenu>
            </section>

            <CommandPalette
                items=command_items()
                open=palette_open
                placeholder="Type a command"
                on_select=Callback::new(move |detail: SelectDetail| {
                    log_event(format!("command: {}", detail.item.value));
                    state.update(|state| state.last_command = Some(detail.item.value));
                })
                on_close=Callback::new(move |_| palette_open.set(false))
            />

            <aside class="showcase-panel">
                <h2>"State snapshot"</h2>
                <pre class="showcase-snapshot">{snapshot}</pre>
                <h2>"Event log"</h2>
                <ul class="showcase-event-log">
                    <For
                        each=move || {
                            event_log.get().into_iter().enumerate().collect::<Vec<_>>()
                        }
                        key=|(index, line)| format!("{index}:{line}")
                        let:entry
                    >
                        <li>{entry.1}</li>
                    </For>
                </ul>
            </aside>
        </main>
    }
}
