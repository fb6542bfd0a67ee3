//! Window scroll tracking hook.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Leptos hook reporting the window's vertical scroll offset in pixels.
///
/// Attaches a `scroll` listener on mount and removes it when the owning
/// scope is disposed. Outside a browser the signal stays at `0.0`.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0_f64);

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("scroll tracking unavailable: no window object");
            return;
        };

        // Capture the position at mount; the page may already be scrolled.
        set_offset.set(window.scroll_y().unwrap_or(0.0));

        let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                set_offset.set(window.scroll_y().unwrap_or(0.0));
            }
        }) as Box<dyn FnMut(_)>);

        if let Err(e) =
            window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            leptos::logging::error!("failed to attach scroll listener: {e:?}");
            return;
        }

        // The closure stays alive inside the cleanup handler until the
        // owner is disposed, at which point the listener comes off.
        let listener = StoredValue::new_local(listener);
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                listener.with_value(|listener| {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                });
            }
        });
    });

    offset
}
