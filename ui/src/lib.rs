//! Shared UI crate for Runboard: data loading, aggregation, chart shaping and
//! the Dioxus views used by both launchers.

pub mod chart;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod stats;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

pub use crate::core::config::{ConfigError, DashboardConfig};
pub use dashboard::DashboardContext;
