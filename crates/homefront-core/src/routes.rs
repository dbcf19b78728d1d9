//! Site destinations

use serde::{Deserialize, Serialize};

/// Semantic route; the header never hardcodes paths outside this table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    BuyListings,
    Sell,
    RentListings,
    About,
    Contact,
    Login,
    Signup,
    Profile,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::BuyListings => "/listings?type=sale",
            Route::Sell => "/sell",
            Route::RentListings => "/listings?type=rent",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Profile => "/profile",
        }
    }

    /// Whether the destination leaves the site
    pub fn is_internal(destination: &str) -> bool {
        destination.starts_with('/') && !destination.starts_with("//")
    }
}
