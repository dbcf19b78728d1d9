//! Listings page (filters only; no inventory yet)

use homefront_core::content::{City, PriceRange, PropertyType};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::EmptyState;
use crate::providers::use_locale;

/// Shows the filters carried in the query string
///
/// `type` is shared between the buy/rent navigation entries (`sale`, `rent`)
/// and the hero search (property types).
#[component]
pub fn Listings() -> impl IntoView {
    let locale = use_locale();
    let query = use_query_map();

    let filters = move || {
        let query = query.get();
        let dict = locale.dictionary();
        let mut chips = Vec::new();

        if let Some(city) = query.get("city").as_deref().and_then(City::from_slug) {
            chips.push(city.name(dict));
        }
        match query.get("type").as_deref() {
            Some("sale") => chips.push(locale.text("nav.buy", "Buy")),
            Some("rent") => chips.push(locale.text("nav.rent", "Rent")),
            Some(other) => {
                if let Some(kind) = PropertyType::from_slug(other) {
                    chips.push(kind.label().to_string());
                }
            }
            None => {}
        }
        if let Some(price) = query.get("price").as_deref().and_then(PriceRange::from_slug) {
            chips.push(price.label().to_string());
        }
        if let Some(text) = query.get("q").filter(|q| !q.trim().is_empty()) {
            chips.push(format!("\"{}\"", text.trim()));
        }
        chips
    };

    view! {
        <div class="page listings-page">
            <div class="filter-chips">
                {move || {
                    filters()
                        .into_iter()
                        .map(|chip| view! { <span class="filter-chip">{chip}</span> })
                        .collect_view()
                }}
            </div>
            <EmptyState title_key="pages.common.searchProperties" title_fallback="Search Properties" />
        </div>
    }
}
