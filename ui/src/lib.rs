//! Shared UI crate for Pitwall. The chart, its data pipeline and the app
//! shell live here; the `web` and `desktop` crates only launch it.

pub mod chart;
pub mod core;
pub mod i18n;
pub mod theme;
pub mod views;

pub mod components {
    // Localized application header (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}
