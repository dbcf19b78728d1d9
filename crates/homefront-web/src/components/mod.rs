//! Leptos UI components

mod action_buttons;
mod ad_slot;
mod empty_state;
mod language_toggle;
mod logo;
mod navbar;
mod navigation_menu;
mod search_bar;

pub use action_buttons::ActionButtons;
pub use ad_slot::AdSlot;
pub use empty_state::EmptyState;
pub use language_toggle::LanguageToggle;
pub use logo::Logo;
pub use navbar::Navbar;
pub use navigation_menu::NavigationMenu;
pub use search_bar::SearchBar;
