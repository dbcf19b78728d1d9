//! Profile page

use homefront_core::SessionProvider;
use leptos::prelude::*;

use crate::components::EmptyState;
use crate::providers::{use_locale, use_session};

#[component]
pub fn Profile() -> impl IntoView {
    let locale = use_locale();
    let session = use_session();

    view! {
        <div class="page profile-page">
            {move || {
                session.user().map(|user| {
                    let welcome = format!("{}, {}", locale.text("nav.welcome", "Welcome"), user.name);
                    view! { <h2 class="profile-welcome">{welcome}</h2> }
                })
            }}
            <EmptyState title_key="nav.profile" title_fallback="Profile" />
        </div>
    }
}
