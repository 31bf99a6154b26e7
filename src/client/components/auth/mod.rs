pub mod layout;
pub mod navbar;

pub use layout::{AuthLayout, GlobalLayout};
pub use navbar::AuthNavbar;
