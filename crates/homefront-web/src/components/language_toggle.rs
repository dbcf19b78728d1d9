//! Language switch (English / Arabic)

use leptos::prelude::*;

use crate::providers::use_locale;

/// Button cycling the active locale
///
/// Also keeps `<html lang dir>` in sync so the whole page flips to
/// right-to-left for Arabic.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let locale = use_locale();

    Effect::new(move |_| {
        let active = locale.locale();
        let Some(root): Option<web_sys::Element> = document().document_element() else {
            return;
        };
        if root.set_attribute("lang", active.code()).is_err()
            || root
                .set_attribute("dir", active.direction().as_str())
                .is_err()
        {
            leptos::logging::warn!("Failed to update document language to {}", active);
        }
    });

    view! {
        <button
            class="language-toggle"
            on:click=move |_| locale.toggle()
            title=move || locale.text("nav.language", "Language")
        >
            {move || locale.text("nav.language", "Language")}
        </button>
    }
}
