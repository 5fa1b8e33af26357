//! Data layer: configuration, loading, normalization and filtering.

pub mod config;
pub mod filter;
pub mod format;
pub mod normalize;
pub mod record;
pub mod source;

pub use config::DashboardConfig;
pub use filter::DayFilter;
pub use record::{DataOrigin, Dataset, RunRecord};
