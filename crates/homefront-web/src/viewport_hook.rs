//! Window width hook for responsive layout

use leptos::prelude::*;

/// Current `window.innerWidth`, or NaN when the browser does not report one
///
/// NaN is passed through on purpose so the header composer can reject it and
/// keep its last valid classification.
fn read_inner_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::NAN)
}

/// Leptos hook tracking the window width
///
/// Updates on every `resize` event; no debouncing, no caching beyond the
/// latest reading.
///
/// # Example
///
/// ```rust,ignore
/// let width = use_viewport_width();
///
/// Effect::new(move |_| {
///     composer.update(|c| { c.on_resize(width.get()); });
/// });
/// ```
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(read_inner_width());

    let handle = leptos::leptos_dom::helpers::window_event_listener(leptos::ev::resize, move |_| {
        set_width.set(read_inner_width());
    });
    on_cleanup(move || handle.remove());

    width
}
