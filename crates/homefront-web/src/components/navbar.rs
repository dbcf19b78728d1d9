//! Site header: logo, navigation, language toggle, account area, and the
//! off-canvas panel used on compact viewports.

use homefront_core::{HeaderComposer, HeaderView, MenuAnchor, PresentationMode, SiteConfig};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ActionButtons, LanguageToggle, Logo, NavigationMenu, SearchBar};
use crate::providers::{use_locale, use_session, use_site_settings};
use crate::viewport_hook::use_viewport_width;

const USER_MENU_BUTTON_ID: &str = "user-menu-button";

/// Responsive navigation header
///
/// All transient state lives in one [`HeaderComposer`]; the rendered header
/// is a [`HeaderView`] recomputed whenever the viewport, session, locale, or
/// composer state changes.
#[component]
pub fn Navbar() -> impl IntoView {
    let settings = use_site_settings();
    let locale = use_locale();
    let session = use_session();
    let width = use_viewport_width();

    let composer = RwSignal::new({
        let mut composer =
            HeaderComposer::from_config(&SiteConfig::from(settings.get_untracked()));
        composer.on_resize(width.get_untracked());
        composer
    });

    Effect::new(move |_| {
        let config = SiteConfig::from(settings.get());
        composer.update(|c| c.reconfigure(&config));
    });

    Effect::new(move |_| {
        let width = width.get();
        composer.update(|c| {
            c.on_resize(width);
        });
    });

    let header = Memo::new(move |_| {
        let dict = locale.dictionary();
        composer.with(|c| c.view(&session, dict))
    });

    let navigation = Signal::derive(move || header.get().navigation);
    let actions = Signal::derive(move || header.get().account.actions().to_vec());
    let gap = Signal::derive(move || header.get().nav_gap_px);

    let on_navigate = Callback::new(move |destination: String| {
        composer.update(|c| {
            c.handle_navigate(&destination);
        });
    });
    let on_profile = move |_: leptos::ev::MouseEvent| {
        composer.update(|c| {
            c.select_profile();
        });
    };
    let on_logout = move |_: leptos::ev::MouseEvent| composer.update(|c| c.activate_logout(&session));

    view! {
        <>
        <header class="navbar">
            <div class="navbar-toolbar">
                <Logo />

                <Show when=move || header.get().mode == PresentationMode::Inline>
                    <NavigationMenu
                        entries=navigation
                        mode=PresentationMode::Inline
                        gap_px=gap
                        on_activate=on_navigate
                    />
                    <div class="navbar-divider" aria-hidden="true"></div>
                </Show>

                <div class="navbar-tools">
                    <Show when=move || header.get().shows_inline_search()>
                        <SearchBar
                            placeholder=Signal::derive(move || header.get().search_placeholder)
                            on_activate=on_navigate
                        />
                    </Show>

                    <LanguageToggle />

                    {move || {
                        let current = header.get();
                        if current.shows_menu_button() {
                            render_menu_button(&current, composer).into_any()
                        } else if let Some(member) = current.account.member() {
                            render_member_menu(&current, member.welcome.clone(), composer, on_profile, on_logout)
                                .into_any()
                        } else {
                            view! { <ActionButtons actions=actions on_activate=on_navigate /> }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </header>

        <Show when=move || header.get().panel_open>
            <div
                class="drawer-backdrop"
                on:click=move |_| composer.update(|c| c.dismiss_panel())
            ></div>
        </Show>

        <aside
            class="drawer"
            class:drawer-open=move || header.get().panel_open
            aria-hidden=move || (!header.get().panel_open).to_string()
        >
            <button
                class="drawer-close"
                on:click=move |_| composer.update(|c| c.dismiss_panel())
                aria-label=move || header.get().close_menu_label
            >
                "✕"
            </button>

            <div class="drawer-content">
                <SearchBar
                    placeholder=Signal::derive(move || header.get().search_placeholder)
                    full_width=true
                    on_activate=on_navigate
                />

                <NavigationMenu
                    entries=navigation
                    mode=PresentationMode::Stacked
                    on_activate=on_navigate
                />

                {move || {
                    let current = header.get();
                    match current.account.member() {
                        Some(member) => {
                            let welcome = member.welcome.clone();
                            let profile_label = member.profile_label.clone();
                            let profile_href = member.profile_destination.clone();
                            let logout_label = member.logout_label.clone();
                            view! {
                                <div class="drawer-member">
                                    <p class="drawer-welcome">{welcome}</p>
                                    <A
                                        href=profile_href
                                        attr:class="btn btn-emphasized btn-block"
                                        on:click=on_profile
                                    >
                                        {profile_label}
                                    </A>
                                    <button class="btn btn-subdued btn-block" on:click=on_logout>
                                        {logout_label}
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <ActionButtons actions=actions stacked=true on_activate=on_navigate />
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </aside>
        </>
    }
}

fn render_menu_button(current: &HeaderView, composer: RwSignal<HeaderComposer>) -> impl IntoView {
    let label = current.open_menu_label.clone();
    let expanded = current.panel_open.to_string();

    view! {
        <button
            class="menu-button"
            on:click=move |_| composer.update(|c| c.toggle_panel())
            aria-label=label
            aria-expanded=expanded
        >
            <span class="menu-button-icon">"☰"</span>
        </button>
    }
}

fn render_member_menu(
    current: &HeaderView,
    welcome: String,
    composer: RwSignal<HeaderComposer>,
    on_profile: impl Fn(leptos::ev::MouseEvent) + 'static,
    on_logout: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    let member = current.account.member().cloned();
    let profile_label = member
        .as_ref()
        .map(|m| m.profile_label.clone())
        .unwrap_or_default();
    let profile_href = member
        .as_ref()
        .map(|m| m.profile_destination.clone())
        .unwrap_or_default();
    let logout_label = member.map(|m| m.logout_label).unwrap_or_default();
    let menu_label = current.user_menu_label.clone();
    let is_open = current.user_menu_open;
    let anchored_here = current
        .menu_anchor
        .as_ref()
        .is_some_and(|a| a.element_id() == USER_MENU_BUTTON_ID);

    view! {
        <div class="member-area">
            <span class="member-welcome">{welcome}</span>
            <div class="user-menu">
                <button
                    id=USER_MENU_BUTTON_ID
                    class="user-menu-button"
                    aria-label=menu_label
                    aria-haspopup="menu"
                    aria-expanded=is_open.to_string()
                    on:click=move |_| {
                        composer.update(|c| c.open_user_menu(MenuAnchor::new(USER_MENU_BUTTON_ID)))
                    }
                >
                    "▼"
                </button>

                {(is_open && anchored_here).then(|| view! {
                    <div
                        class="user-menu-backdrop"
                        on:click=move |_| composer.update(|c| c.close_user_menu())
                    ></div>
                    <ul class="user-menu-list" role="menu">
                        <li role="menuitem">
                            <A href=profile_href attr:class="user-menu-item" on:click=on_profile>
                                {profile_label}
                            </A>
                        </li>
                        <li role="menuitem">
                            <button class="user-menu-item" on:click=on_logout>
                                {logout_label}
                            </button>
                        </li>
                    </ul>
                })}
            </div>
        </div>
    }
}
