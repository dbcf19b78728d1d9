//! Locale, session and site-settings contexts
//!
//! Provided once at the app root. Components read them; only the language
//! toggle and the login/logout flows write to them.

use homefront_core::{
    Locale, LocaleDictionary, PublicConfig, SessionError, SessionProvider, User,
};
use leptos::prelude::*;

/// Active locale
#[derive(Clone, Copy)]
pub struct LocaleContext {
    locale: RwSignal<Locale>,
}

impl LocaleContext {
    pub fn new(initial: Locale) -> Self {
        Self {
            locale: RwSignal::new(initial),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Dictionary for the active locale (tracked)
    pub fn dictionary(&self) -> &'static LocaleDictionary {
        self.locale.get().dictionary()
    }

    /// Resolve a dotted key with a literal fallback (tracked)
    pub fn text(&self, path: &str, fallback: &str) -> String {
        self.dictionary().text_or(path, fallback)
    }

    pub fn set(&self, locale: Locale) {
        self.locale.set(locale);
    }

    /// Switch to the next language in the cycle
    pub fn toggle(&self) {
        self.locale.update(|l| *l = l.next());
    }
}

/// In-memory session; nothing is persisted across reloads
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: RwSignal<Option<User>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    /// Local demo sign-in
    pub fn login(&self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.user.set(Some(User::new(name)));
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for SessionContext {
    fn user(&self) -> Option<User> {
        self.user.get()
    }

    fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    fn logout(&self) -> Result<(), SessionError> {
        if self.user.with_untracked(Option::is_none) {
            return Err(SessionError::NotAuthenticated);
        }
        self.user.set(None);
        Ok(())
    }
}

/// Site settings, seeded with defaults and replaced once `/api/config` answers
#[derive(Clone, Copy)]
pub struct SiteSettings {
    config: RwSignal<PublicConfig>,
}

impl SiteSettings {
    pub fn new(config: PublicConfig) -> Self {
        Self {
            config: RwSignal::new(config),
        }
    }

    pub fn get(&self) -> PublicConfig {
        self.config.get()
    }

    pub fn get_untracked(&self) -> PublicConfig {
        self.config.get_untracked()
    }

    pub fn set(&self, config: PublicConfig) {
        self.config.set(config);
    }
}

/// Provider component (wraps app root)
#[component]
pub fn SiteProviders(children: Children) -> impl IntoView {
    let settings = SiteSettings::new(PublicConfig::default());
    let locale = LocaleContext::new(settings.get_untracked().default_locale);

    provide_context(settings);
    provide_context(locale);
    provide_context(SessionContext::new());

    children()
}

pub fn use_locale() -> LocaleContext {
    expect_context::<LocaleContext>()
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn use_site_settings() -> SiteSettings {
    expect_context::<SiteSettings>()
}
