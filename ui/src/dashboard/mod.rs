mod bar_chart;
pub use bar_chart::StackedBarCard;

mod daily;
pub use daily::DailyTrendsCard;

mod error;
pub use error::LoadErrorCard;

mod milestones;
pub use milestones::MilestonePieCard;

mod prediction;
pub use prediction::PredictionCard;

mod selector;
pub use selector::DaySelector;

mod table;
pub use table::RunTableCard;

mod tiles;
pub use tiles::SummaryTiles;

pub mod model;
pub use model::{DashboardModel, Prediction};

use std::sync::Arc;

use crate::core::config::DashboardConfig;
use crate::core::record::Dataset;
use crate::core::source;

/// Provided by the launcher through the Dioxus context.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardContext {
    pub config: DashboardConfig,
    /// Set when the launcher couldn't read its configuration; the page shows
    /// it instead of loading data.
    pub config_error: Option<String>,
}

impl DashboardContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            config_error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            config: DashboardConfig::default(),
            config_error: Some(error.to_string()),
        }
    }
}

/// Loaded dataset or the message to show in its place.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Ready(Arc<Dataset>),
    Failed(String),
}

impl DashboardState {
    pub fn load(context: &DashboardContext) -> Self {
        if let Some(err) = &context.config_error {
            return Self::Failed(err.clone());
        }
        match source::load_cached(&context.config) {
            Ok(dataset) => Self::Ready(dataset),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            Self::Ready(dataset) => Some(dataset),
            Self::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SourceConfig;

    #[test]
    fn config_errors_short_circuit_the_load() {
        let state = DashboardState::load(&DashboardContext::failed("invalid config: bad key"));
        assert_eq!(state, DashboardState::Failed("invalid config: bad key".into()));
        assert!(state.dataset().is_none());
    }

    #[test]
    fn missing_source_is_reported_as_text() {
        // Failed loads never populate the shared cache.
        let context = DashboardContext::new(DashboardConfig {
            source: SourceConfig::File {
                path: "no/such/runs.csv".into(),
            },
            ..DashboardConfig::classic()
        });
        match DashboardState::load(&context) {
            DashboardState::Failed(message) => assert!(message.contains("runs.csv")),
            DashboardState::Ready(_) => panic!("expected a load failure"),
        }
    }
}
