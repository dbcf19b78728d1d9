//! Demo sign-in and sign-up

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use homefront_core::Route;

use crate::providers::{use_locale, use_session};

/// Local sign-in form; any non-empty name starts a session
#[component]
pub fn Login() -> impl IntoView {
    let locale = use_locale();
    let session = use_session();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entered = name.get_untracked();
        if entered.trim().is_empty() {
            return;
        }
        session.login(&entered);
        navigate(Route::Home.path(), Default::default());
    };

    view! {
        <div class="page login-page">
            <form class="login-card" on:submit=on_submit>
                <h2>{move || locale.text("pages.login.title", "Sign in")}</h2>
                <label class="field">
                    <span>{move || locale.text("pages.login.nameLabel", "Your name")}</span>
                    <input
                        type="text"
                        class="search-input"
                        required
                        prop:value=move || name.get()
                        on:input=move |e| set_name.set(event_target_value(&e))
                    />
                </label>
                <button type="submit" class="btn btn-emphasized btn-block">
                    {move || locale.text("pages.login.submit", "Continue")}
                </button>
            </form>
        </div>
    }
}
