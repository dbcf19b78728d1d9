//! Page components

mod home;
mod listings;
mod login;
mod profile;

pub use home::Home;
pub use listings::Listings;
pub use login::Login;
pub use profile::Profile;
