//! Main Leptos App component with SPA router

use homefront_core::Theme;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::api::fetch_site_config;
use crate::components::{EmptyState, Navbar};
use crate::pages::{Home, Listings, Login, Profile};
use crate::providers::{use_locale, use_site_settings, SiteProviders};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <SiteProviders>
            <Shell />
        </SiteProviders>
    }
}

/// Everything below the providers: settings bootstrap, theme, router
#[component]
fn Shell() -> impl IntoView {
    let settings = use_site_settings();
    let locale = use_locale();

    spawn_local(async move {
        match fetch_site_config().await {
            Ok(config) => {
                locale.set(config.default_locale);
                settings.set(config);
            }
            Err(e) => leptos::logging::warn!("Using built-in site settings: {}", e),
        }
    });

    let theme = Theme::default().css_variables();

    view! {
        <style>{theme}</style>
        <Router>
            <div class="app">
                <Navbar />
                <main class="content">
                    <Routes fallback=|| view! { <EmptyState title_key="" title_fallback="Not found" /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/listings") view=Listings />
                        <Route path=path!("/login") view=Login />
                        <Route path=path!("/signup") view=Login />
                        <Route path=path!("/profile") view=Profile />
                        <Route
                            path=path!("/sell")
                            view=|| view! { <EmptyState title_key="nav.sell" title_fallback="Sell" /> }
                        />
                        <Route
                            path=path!("/about")
                            view=|| view! { <EmptyState title_key="nav.aboutUs" title_fallback="About Us" /> }
                        />
                        <Route
                            path=path!("/contact")
                            view=|| view! { <EmptyState title_key="nav.contact" title_fallback="Contact" /> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
