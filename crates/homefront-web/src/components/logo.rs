//! Site logo linking home

use leptos::prelude::*;
use leptos_router::components::A;

use crate::providers::use_site_settings;

#[component]
pub fn Logo() -> impl IntoView {
    let settings = use_site_settings();

    view! {
        <A href="/" attr:class="logo">
            <span class="logo-mark" aria-hidden="true">"⌂"</span>
            <span class="logo-text">{move || settings.get().site_name}</span>
        </A>
    }
}
