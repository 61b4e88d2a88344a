//! Window-level dismissal sessions for overlay widgets.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;

/// Runs one outside-dismissal session per open phase of an overlay.
///
/// While `open` is true the session owns exactly one `mousedown` plus
/// `keydown` listener pair on the window. Attachment is deferred by one
/// animation frame after the open transition so the pointer press that
/// opened the overlay never doubles as the outside press that closes it.
/// The pair is detached on every close and again on component cleanup, so
/// rapid open/close cycles cannot accumulate listeners.
///
/// The Escape backstop skips events a focused widget already consumed
/// (checked through `default_prevented`). Overlay surfaces stop propagation
/// of their own `mousedown`, so a press inside an open surface never
/// reaches the window listener.
pub fn use_overlay_dismissal(open: Signal<bool>, on_dismiss: Callback<()>) {
    let handles = store_value::<Option<(WindowListenerHandle, WindowListenerHandle)>>(None);
    let was_open = create_rw_signal(false);

    let detach = move || {
        handles.update_value(|pair| {
            if let Some((mousedown, keydown)) = pair.take() {
                mousedown.remove();
                keydown.remove();
            }
        });
    };

    let attach = move || {
        // The overlay may have closed again before this frame fired.
        if handles.with_value(Option::is_some) || !open.get_untracked() {
            return;
        }
        let mousedown = window_event_listener(ev::mousedown, move |_| {
            if open.get_untracked() {
                on_dismiss.call(());
            }
        });
        let keydown = window_event_listener(ev::keydown, move |ev| {
            if ev.default_prevented() || ev.key() != "Escape" {
                return;
            }
            if open.get_untracked() {
                ev.prevent_default();
                on_dismiss.call(());
            }
        });
        handles.set_value(Some((mousedown, keydown)));
    };

    create_effect(move |_| {
        let is_open = open.get();
        let previously = was_open.get_untracked();
        if is_open && !previously {
            was_open.set(true);
            request_animation_frame(attach);
        } else if !is_open && previously {
            was_open.set(false);
            detach();
        }
    });

    on_cleanup(detach);
}
