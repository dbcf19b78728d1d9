//! homefront-core - Core library for homefront
//!
//! Header composition (viewport, session and locale reconciliation), locale
//! dictionaries, design tokens, landing page content, and site config.
//! Everything here is synchronous and WASM-safe.

pub mod config;
pub mod content;
pub mod error;
pub mod header;
pub mod locale;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod theme;
pub mod viewport;

pub use config::{PublicConfig, SiteConfig};
pub use error::{SessionError, SiteError};
pub use header::{
    AccountArea, HeaderComposer, HeaderView, MemberArea, MenuAnchor, NavigationRequest, PanelState,
};
pub use locale::{Locale, LocaleDictionary, NavKey, TextDirection};
pub use navigation::{
    derive_action_entries, derive_navigation_entries, layout_menu, ActionEntry, ButtonVariant,
    MenuLayout, MenuRow, NavigationEntry,
};
pub use routes::Route;
pub use session::{SessionProvider, StaticSession, User};
pub use theme::Theme;
pub use viewport::{Breakpoint, PresentationMode, ViewportClass, ViewportTracker};
