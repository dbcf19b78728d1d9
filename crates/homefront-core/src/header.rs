//! Header composer
//!
//! Single source of truth for what the header looks like. It owns only the
//! transient UI state (panel flag, user-menu anchor, current viewport class);
//! session and locale are passed in on every call and never stored.
//!
//! Panel lifecycle in stacked presentation:
//!
//! ```text
//! Closed --toggle--> Open
//! Open   --toggle | navigate | dismiss | logout--> Closed
//! ```

use crate::config::SiteConfig;
use crate::locale::{LocaleDictionary, NavKey};
use crate::navigation::{
    derive_action_entries, derive_navigation_entries, layout_menu, ActionEntry, MenuLayout,
    NavigationEntry, DEFAULT_INLINE_GAP_PX,
};
use crate::routes::Route;
use crate::session::{SessionProvider, User};
use crate::viewport::{Breakpoint, PresentationMode, ViewportClass, ViewportTracker};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Open/closed flag of the off-canvas panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelState {
    pub is_open: bool,
}

/// Identifier of the element the user dropdown hangs off
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuAnchor(String);

impl MenuAnchor {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self(element_id.into())
    }

    pub fn element_id(&self) -> &str {
        &self.0
    }
}

/// A client-side navigation the host should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub destination: String,
}

impl NavigationRequest {
    pub fn is_internal(&self) -> bool {
        Route::is_internal(&self.destination)
    }
}

/// Row shown to a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberArea {
    pub user: User,
    /// `"{welcome}, {name}"`
    pub welcome: String,
    pub profile_label: String,
    pub profile_destination: String,
    pub logout_label: String,
}

/// Exactly one of these is rendered per header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum AccountArea {
    Actions(Vec<ActionEntry>),
    Member(MemberArea),
}

impl AccountArea {
    pub fn actions(&self) -> &[ActionEntry] {
        match self {
            AccountArea::Actions(actions) => actions,
            AccountArea::Member(_) => &[],
        }
    }

    pub fn member(&self) -> Option<&MemberArea> {
        match self {
            AccountArea::Member(member) => Some(member),
            AccountArea::Actions(_) => None,
        }
    }
}

/// Everything the header renders, derived in one pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub mode: PresentationMode,
    pub navigation: Vec<NavigationEntry>,
    pub account: AccountArea,
    pub panel_open: bool,
    pub user_menu_open: bool,
    pub menu_anchor: Option<MenuAnchor>,
    pub nav_gap_px: u16,
    pub search_placeholder: String,
    pub open_menu_label: String,
    pub close_menu_label: String,
    pub user_menu_label: String,
}

impl HeaderView {
    /// Navigation entries shown directly in the bar
    pub fn inline_menu(&self) -> Option<MenuLayout> {
        (self.mode == PresentationMode::Inline)
            .then(|| layout_menu(&self.navigation, PresentationMode::Inline, self.nav_gap_px))
    }

    /// Navigation entries shown inside the panel
    pub fn panel_menu(&self) -> Option<MenuLayout> {
        (self.mode == PresentationMode::Stacked)
            .then(|| layout_menu(&self.navigation, PresentationMode::Stacked, self.nav_gap_px))
    }

    /// The hamburger button replaces the inline bar in stacked presentation
    pub fn shows_menu_button(&self) -> bool {
        self.mode == PresentationMode::Stacked
    }

    /// The search box sits in the bar only in inline presentation
    pub fn shows_inline_search(&self) -> bool {
        self.mode == PresentationMode::Inline
    }
}

/// Owner of the header's transient UI state
#[derive(Debug, Clone)]
pub struct HeaderComposer {
    viewport: ViewportTracker,
    panel: PanelState,
    menu_anchor: Option<MenuAnchor>,
    nav_gap_px: u16,
}

impl HeaderComposer {
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            viewport: ViewportTracker::new(breakpoint),
            panel: PanelState::default(),
            menu_anchor: None,
            nav_gap_px: DEFAULT_INLINE_GAP_PX,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        let mut composer = Self::new(config.breakpoint());
        composer.nav_gap_px = config.nav_gap_px;
        composer
    }

    /// Apply new settings without losing transient state
    pub fn reconfigure(&mut self, config: &SiteConfig) {
        self.viewport.set_breakpoint(config.breakpoint());
        self.nav_gap_px = config.nav_gap_px;
        self.close_panel_if_inline();
        self.close_user_menu_if_stacked();
    }

    // ===================
    // Viewport
    // ===================

    /// Classify a width against the configured breakpoint. Pure.
    pub fn classify_viewport(&self, width_px: u32) -> ViewportClass {
        self.viewport.breakpoint().classify(width_px)
    }

    /// Handle a resize signal from the host
    pub fn on_resize(&mut self, raw_width: f64) -> ViewportClass {
        let class = self.viewport.observe(raw_width);
        self.close_panel_if_inline();
        self.close_user_menu_if_stacked();
        class
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport.current()
    }

    pub fn presentation(&self) -> PresentationMode {
        self.viewport.current().into()
    }

    // ===================
    // Panel
    // ===================

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel.is_open
    }

    pub fn toggle_panel(&mut self) {
        self.panel.is_open = !self.panel.is_open;
        debug!(open = self.panel.is_open, "Panel toggled");
    }

    /// Outside click or close button on the panel host
    pub fn dismiss_panel(&mut self) {
        self.panel.is_open = false;
    }

    fn close_panel_if_inline(&mut self) {
        if self.panel.is_open && self.presentation() == PresentationMode::Inline {
            debug!("Closing panel after switch to inline presentation");
            self.panel.is_open = false;
        }
    }

    // ===================
    // User menu
    // ===================

    fn close_user_menu_if_stacked(&mut self) {
        if self.menu_anchor.is_some() && self.presentation() == PresentationMode::Stacked {
            debug!("Closing user menu after switch to stacked presentation");
            self.menu_anchor = None;
        }
    }

    pub fn menu_anchor(&self) -> Option<&MenuAnchor> {
        self.menu_anchor.as_ref()
    }

    pub fn is_user_menu_open(&self) -> bool {
        self.menu_anchor.is_some()
    }

    /// Open the dropdown; re-anchors if it is already open
    pub fn open_user_menu(&mut self, anchor: MenuAnchor) {
        self.menu_anchor = Some(anchor);
    }

    pub fn close_user_menu(&mut self) {
        self.menu_anchor = None;
    }

    // ===================
    // Activation
    // ===================

    /// Log out and reset the header to its anonymous, closed state
    ///
    /// Local state is cleared right after the collaborator is called, whatever
    /// it reports; a failed logout is its own problem.
    pub fn activate_logout(&mut self, session: &dyn SessionProvider) {
        if let Err(e) = session.logout() {
            warn!(error = %e, "Logout failed; header state reset anyway");
        }
        self.close_user_menu();
        self.dismiss_panel();
    }

    /// Activation of a navigation or action entry
    pub fn handle_navigate(&mut self, destination: &str) -> NavigationRequest {
        if self.presentation() == PresentationMode::Stacked {
            self.dismiss_panel();
        }
        self.close_user_menu();
        NavigationRequest {
            destination: destination.to_string(),
        }
    }

    /// Profile entry from the user menu or the panel
    pub fn select_profile(&mut self) -> NavigationRequest {
        self.close_user_menu();
        self.dismiss_panel();
        NavigationRequest {
            destination: Route::Profile.path().to_string(),
        }
    }

    // ===================
    // Derivation
    // ===================

    /// Derive the full header for the current session and locale
    pub fn view(&self, session: &dyn SessionProvider, dict: &LocaleDictionary) -> HeaderView {
        let is_authenticated = session.is_authenticated();

        let account = match (is_authenticated, session.user()) {
            (true, Some(user)) => AccountArea::Member(MemberArea {
                welcome: format!("{}, {}", dict.nav(NavKey::Welcome), user.name),
                user,
                profile_label: dict.nav(NavKey::Profile),
                profile_destination: Route::Profile.path().to_string(),
                logout_label: dict.nav(NavKey::Logout),
            }),
            _ => AccountArea::Actions(derive_action_entries(is_authenticated, dict)),
        };

        HeaderView {
            mode: self.presentation(),
            navigation: derive_navigation_entries(dict),
            account,
            panel_open: self.panel.is_open,
            user_menu_open: self.is_user_menu_open(),
            menu_anchor: self.menu_anchor.clone(),
            nav_gap_px: self.nav_gap_px,
            search_placeholder: dict.nav(NavKey::Search),
            open_menu_label: dict.nav(NavKey::OpenMenu),
            close_menu_label: dict.nav(NavKey::CloseMenu),
            user_menu_label: dict.nav(NavKey::UserMenu),
        }
    }
}

impl Default for HeaderComposer {
    fn default() -> Self {
        Self::new(Breakpoint::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::session::StaticSession;

    fn compact() -> HeaderComposer {
        let mut composer = HeaderComposer::default();
        composer.on_resize(480.0);
        composer
    }

    #[test]
    fn test_initial_state() {
        let composer = HeaderComposer::default();
        assert!(!composer.is_panel_open());
        assert!(!composer.is_user_menu_open());
        assert_eq!(composer.presentation(), PresentationMode::Inline);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut composer = compact();
        let before = composer.panel();
        composer.toggle_panel();
        assert!(composer.is_panel_open());
        composer.toggle_panel();
        assert_eq!(composer.panel(), before);
    }

    #[test]
    fn test_dismiss_closes_panel() {
        let mut composer = compact();
        composer.toggle_panel();
        composer.dismiss_panel();
        assert!(!composer.is_panel_open());

        composer.dismiss_panel();
        assert!(!composer.is_panel_open());
    }

    #[test]
    fn test_user_menu_round_trip() {
        let mut composer = HeaderComposer::default();
        composer.open_user_menu(MenuAnchor::new("user-menu-button"));
        assert!(composer.is_user_menu_open());
        composer.close_user_menu();
        assert_eq!(composer.menu_anchor(), None);
    }

    #[test]
    fn test_user_menu_last_anchor_wins() {
        let mut composer = HeaderComposer::default();
        composer.open_user_menu(MenuAnchor::new("first"));
        composer.open_user_menu(MenuAnchor::new("second"));
        assert_eq!(composer.menu_anchor().map(MenuAnchor::element_id), Some("second"));
    }

    #[test]
    fn test_navigate_in_inline_keeps_panel_flag() {
        let mut composer = HeaderComposer::default();
        composer.on_resize(1440.0);
        composer.toggle_panel();

        let request = composer.handle_navigate("/about");
        assert_eq!(request.destination, "/about");
        assert!(request.is_internal());
        assert!(composer.is_panel_open());
    }

    #[test]
    fn test_navigate_closes_user_menu() {
        let mut composer = HeaderComposer::default();
        composer.open_user_menu(MenuAnchor::new("user-menu-button"));
        composer.handle_navigate("/contact");
        assert!(!composer.is_user_menu_open());
    }

    #[test]
    fn test_switch_to_inline_closes_panel() {
        let mut composer = compact();
        composer.toggle_panel();
        composer.on_resize(1200.0);
        assert!(!composer.is_panel_open());
        assert_eq!(composer.presentation(), PresentationMode::Inline);
    }

    #[test]
    fn test_invalid_resize_keeps_panel_and_mode() {
        let mut composer = compact();
        composer.toggle_panel();
        composer.on_resize(0.0);
        composer.on_resize(-1.0);
        assert!(composer.is_panel_open());
        assert_eq!(composer.presentation(), PresentationMode::Stacked);
    }

    #[test]
    fn test_select_profile() {
        let mut composer = compact();
        composer.toggle_panel();
        composer.open_user_menu(MenuAnchor::new("user-menu-button"));

        let request = composer.select_profile();
        assert_eq!(request.destination, "/profile");
        assert!(!composer.is_panel_open());
        assert!(!composer.is_user_menu_open());
    }

    #[test]
    fn test_failed_logout_still_resets_state() {
        let session = StaticSession::signed_in("Rana").with_failing_logout();
        let mut composer = compact();
        composer.toggle_panel();
        composer.open_user_menu(MenuAnchor::new("user-menu-button"));

        composer.activate_logout(&session);
        assert_eq!(session.logout_calls(), 1);
        assert!(!composer.is_panel_open());
        assert!(!composer.is_user_menu_open());
    }

    #[test]
    fn test_exactly_one_account_row() {
        let composer = HeaderComposer::default();
        let dict = Locale::En.dictionary();

        let anonymous = composer.view(&StaticSession::anonymous(), dict);
        assert_eq!(anonymous.account.actions().len(), 2);
        assert!(anonymous.account.member().is_none());

        let member = composer.view(&StaticSession::signed_in("Ayman"), dict);
        assert!(member.account.actions().is_empty());
        assert!(member.account.member().is_some());
    }

    #[test]
    fn test_navigation_independent_of_auth() {
        let composer = HeaderComposer::default();
        for locale in Locale::ALL {
            let dict = locale.dictionary();
            let anonymous = composer.view(&StaticSession::anonymous(), dict);
            let member = composer.view(&StaticSession::signed_in("Ayman"), dict);
            assert_eq!(anonymous.navigation, member.navigation);
        }
    }

    #[test]
    fn test_menus_follow_presentation() {
        let dict = Locale::En.dictionary();
        let session = StaticSession::anonymous();

        let inline = HeaderComposer::default().view(&session, dict);
        assert!(inline.inline_menu().is_some());
        assert!(inline.panel_menu().is_none());
        assert!(inline.shows_inline_search());
        assert!(!inline.shows_menu_button());

        let stacked = compact().view(&session, dict);
        assert!(stacked.inline_menu().is_none());
        assert_eq!(stacked.panel_menu().map(|m| m.rows.len()), Some(5));
        assert!(stacked.shows_menu_button());
    }

    #[test]
    fn test_reconfigure_applies_breakpoint() {
        let mut composer = HeaderComposer::default();
        composer.on_resize(1000.0);
        assert_eq!(composer.viewport(), ViewportClass::Regular);

        let config = SiteConfig {
            breakpoint_px: 1100,
            ..SiteConfig::default()
        };
        composer.reconfigure(&config);
        assert_eq!(composer.viewport(), ViewportClass::Compact);
    }

    #[test]
    fn test_view_serializes_account_kind() {
        let composer = compact();
        let view = composer.view(&StaticSession::anonymous(), Locale::En.dictionary());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["mode"], "stacked");
        assert_eq!(json["account"]["kind"], "actions");
        assert_eq!(json["account"]["content"][0]["route"], "login");
    }

    #[test]
    fn test_user_menu_closes_when_stacked() {
        let mut composer = HeaderComposer::default();
        composer.on_resize(1280.0);
        composer.open_user_menu(MenuAnchor::new("user-menu-button"));

        composer.on_resize(600.0);
        assert!(!composer.is_user_menu_open());

        composer.on_resize(1280.0);
        assert!(!composer.is_user_menu_open());
    }

    #[test]
    fn test_reconfigure_to_stacked_closes_user_menu() {
        let mut composer = HeaderComposer::default();
        composer.on_resize(1000.0);
        composer.open_user_menu(MenuAnchor::new("user-menu-button"));

        let config = SiteConfig {
            breakpoint_px: 1100,
            ..SiteConfig::default()
        };
        composer.reconfigure(&config);
        assert_eq!(composer.menu_anchor(), None);
    }
}
