//! AdSense display unit

use leptos::prelude::*;

use crate::providers::use_site_settings;

/// Responsive ad unit for the `index`-th configured slot
///
/// Renders nothing when no publisher id is configured or the slot index is
/// out of range.
#[component]
pub fn AdSlot(index: usize) -> impl IntoView {
    let settings = use_site_settings();

    move || {
        let config = settings.get();
        let client = config.ad_client?;
        let slot = config.ad_slots.get(index)?.clone();

        Some(view! {
            <div class="ad-slot">
                <ins
                    class="adsbygoogle"
                    style="display:block"
                    data-ad-client=client
                    data-ad-slot=slot
                    data-ad-format="auto"
                    data-full-width-responsive="true"
                ></ins>
            </div>
        })
    }
}
