//! Empty state for pages that are not built yet

use leptos::prelude::*;
use leptos_router::components::A;

use crate::providers::use_locale;

/// Placeholder body for a destination without content
#[component]
pub fn EmptyState(
    /// Dictionary key of the page title (e.g. `nav.sell`)
    title_key: &'static str,
    /// English title used when the key is missing
    title_fallback: &'static str,
) -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="64"
                    height="64"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d="M3 10.5 12 3l9 7.5"/>
                    <path d="M5 9.5V21h14V9.5"/>
                    <path d="M10 21v-6h4v6"/>
                </svg>
            </div>
            <h2 class="empty-state-title">{move || locale.text(title_key, title_fallback)}</h2>
            <p class="empty-state-description">
                {move || {
                    locale.text("pages.common.comingSoon", "This page is on its way. Check back soon.")
                }}
            </p>

            <div class="empty-state-actions">
                <A href="/listings" attr:class="btn btn-emphasized">
                    {move || locale.text("pages.common.searchProperties", "Search Properties")}
                </A>
            </div>
        </div>
    }
}
