//! Navigation and action entries, and the menu layout projection
//!
//! Both presentation modes consume the same entry lists; only
//! [`layout_menu`] knows how they differ.

use crate::locale::{LocaleDictionary, NavKey};
use crate::routes::Route;
use crate::viewport::PresentationMode;
use serde::{Deserialize, Serialize};

/// Default spacing between inline entries in CSS pixels
pub const DEFAULT_INLINE_GAP_PX: u16 = 30;

/// A navigation item with a resolved label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub route: Route,
    pub label: String,
    pub destination: String,
}

/// Visual weight of a call-to-action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled button
    Emphasized,
    /// Outlined button
    Subdued,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Emphasized => "btn btn-emphasized",
            ButtonVariant::Subdued => "btn btn-subdued",
        }
    }
}

/// A call-to-action button shown to anonymous visitors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub route: Route,
    pub label: String,
    pub variant: ButtonVariant,
    pub destination: String,
}

/// Header routes paired with their label keys, in presentation order
const NAVIGATION_ITEMS: [(Route, NavKey); 5] = [
    (Route::BuyListings, NavKey::Buy),
    (Route::Sell, NavKey::Sell),
    (Route::RentListings, NavKey::Rent),
    (Route::About, NavKey::AboutUs),
    (Route::Contact, NavKey::Contact),
];

/// Header navigation entries for a locale
///
/// Depends on the dictionary only; authentication never changes this list.
pub fn derive_navigation_entries(dict: &LocaleDictionary) -> Vec<NavigationEntry> {
    NAVIGATION_ITEMS
        .iter()
        .map(|&(route, key)| NavigationEntry {
            route,
            label: dict.nav(key),
            destination: route.path().to_string(),
        })
        .collect()
}

/// Call-to-action entries: login then signup for visitors, none for members
pub fn derive_action_entries(is_authenticated: bool, dict: &LocaleDictionary) -> Vec<ActionEntry> {
    if is_authenticated {
        return Vec::new();
    }

    [
        (Route::Login, NavKey::Login, ButtonVariant::Subdued),
        (Route::Signup, NavKey::Signup, ButtonVariant::Emphasized),
    ]
    .into_iter()
    .map(|(route, key, variant)| ActionEntry {
        route,
        label: dict.nav(key),
        variant,
        destination: route.path().to_string(),
    })
    .collect()
}

/// One rendered menu row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub label: String,
    pub destination: String,
    /// Draw a divider below this row
    pub separator_after: bool,
}

/// Layout of a navigation menu for one presentation mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    pub mode: PresentationMode,
    pub rows: Vec<MenuRow>,
    /// Spacing between entries; inline only
    pub gap_px: Option<u16>,
    /// Underline grows on hover; inline only
    pub underline_hover: bool,
    /// Each row spans the panel width; stacked only
    pub full_width_rows: bool,
}

impl MenuLayout {
    pub fn container_class(&self) -> &'static str {
        match self.mode {
            PresentationMode::Inline => "nav-menu nav-menu-inline",
            PresentationMode::Stacked => "nav-menu nav-menu-stacked",
        }
    }

    pub fn container_style(&self) -> String {
        self.gap_px
            .map(|gap| format!("gap: {}px", gap))
            .unwrap_or_default()
    }
}

/// Project entries into a layout; same input always yields the same output
pub fn layout_menu(entries: &[NavigationEntry], mode: PresentationMode, gap_px: u16) -> MenuLayout {
    let last = entries.len().saturating_sub(1);
    let stacked = mode == PresentationMode::Stacked;

    let rows = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| MenuRow {
            label: entry.label.clone(),
            destination: entry.destination.clone(),
            separator_after: stacked && index < last,
        })
        .collect();

    MenuLayout {
        mode,
        rows,
        gap_px: (!stacked).then_some(gap_px),
        underline_hover: !stacked,
        full_width_rows: stacked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use serde_json::json;

    #[test]
    fn test_navigation_entries_english() {
        let entries = derive_navigation_entries(Locale::En.dictionary());
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Buy", "Sell", "Rent", "About Us", "Contact"]);
        assert_eq!(entries[0].destination, "/listings?type=sale");
        assert_eq!(entries[4].destination, "/contact");
    }

    #[test]
    fn test_navigation_entries_follow_locale() {
        let entries = derive_navigation_entries(Locale::Ar.dictionary());
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].label, "شراء");
        assert_eq!(entries[0].destination, "/listings?type=sale");
    }

    #[test]
    fn test_navigation_entries_fall_back_per_key() {
        let dict = LocaleDictionary::from_value("xx", json!({"nav": {"sell": "Vendre"}}));
        let labels: Vec<_> = derive_navigation_entries(&dict)
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(labels, vec!["Buy", "Vendre", "Rent", "About Us", "Contact"]);
    }

    #[test]
    fn test_action_entries_anonymous() {
        let actions = derive_action_entries(false, Locale::En.dictionary());
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].route, Route::Login);
        assert_eq!(actions[0].variant, ButtonVariant::Subdued);
        assert_eq!(actions[0].destination, "/login");
        assert_eq!(actions[1].route, Route::Signup);
        assert_eq!(actions[1].variant, ButtonVariant::Emphasized);
        assert_eq!(actions[1].label, "Sign Up");
    }

    #[test]
    fn test_action_entries_authenticated() {
        for locale in Locale::ALL {
            assert!(derive_action_entries(true, locale.dictionary()).is_empty());
        }
    }

    #[test]
    fn test_stacked_layout_separators() {
        let entries = derive_navigation_entries(Locale::En.dictionary());
        let layout = layout_menu(&entries, PresentationMode::Stacked, DEFAULT_INLINE_GAP_PX);

        let separators: Vec<_> = layout.rows.iter().map(|r| r.separator_after).collect();
        assert_eq!(separators, vec![true, true, true, true, false]);
        assert!(layout.full_width_rows);
        assert!(!layout.underline_hover);
        assert_eq!(layout.gap_px, None);
    }

    #[test]
    fn test_inline_layout() {
        let entries = derive_navigation_entries(Locale::En.dictionary());
        let layout = layout_menu(&entries, PresentationMode::Inline, 24);

        assert!(layout.rows.iter().all(|r| !r.separator_after));
        assert!(layout.underline_hover);
        assert_eq!(layout.gap_px, Some(24));
        assert_eq!(layout.container_style(), "gap: 24px");
    }

    #[test]
    fn test_layout_is_referentially_transparent() {
        let entries = derive_navigation_entries(Locale::En.dictionary());
        for mode in [PresentationMode::Inline, PresentationMode::Stacked] {
            assert_eq!(layout_menu(&entries, mode, 30), layout_menu(&entries, mode, 30));
        }
    }

    #[test]
    fn test_layout_empty_and_single() {
        let layout = layout_menu(&[], PresentationMode::Stacked, 30);
        assert!(layout.rows.is_empty());

        let entries = derive_navigation_entries(Locale::En.dictionary());
        let layout = layout_menu(&entries[..1], PresentationMode::Stacked, 30);
        assert!(!layout.rows[0].separator_after);
    }
}
