pub mod navbar;

pub use navbar::NavBar;
