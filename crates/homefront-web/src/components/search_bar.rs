//! Free-text listing search

use homefront_core::content::keyword_search_url;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Search box routing to `/listings?q=...` inside the app
#[component]
pub fn SearchBar(
    #[prop(into)]
    placeholder: Signal<String>,
    /// Stretch to the container width (panel layout)
    #[prop(default = false)]
    full_width: bool,
    /// Called with the destination before the route changes
    #[prop(optional)]
    on_activate: Option<Callback<String>>,
) -> impl IntoView {
    let navigate = use_navigate();
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let destination = keyword_search_url(&query.get_untracked());
        if let Some(callback) = on_activate {
            callback.run(destination.clone());
        }
        navigate(&destination, Default::default());
    };

    view! {
        <form
            class="search-bar"
            class:search-bar-full=full_width
            role="search"
            on:submit=on_submit
        >
            <span class="search-icon" aria-hidden="true">"⌕"</span>
            <input
                type="search"
                name="q"
                class="search-input"
                placeholder=move || placeholder.get()
                aria-label=move || placeholder.get()
                prop:value=move || query.get()
                on:input=move |e| set_query.set(event_target_value(&e))
            />
        </form>
    }
}
