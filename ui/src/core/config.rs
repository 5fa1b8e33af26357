//! Dashboard configuration.
//!
//! The three historical flavours of the dashboard differ only in where the
//! table comes from and in a couple of metric choices, so each one is a
//! preset of [`DashboardConfig`] rather than its own code path:
//!
//! | preset     | source                  | completion tile | victory detection |
//! |------------|-------------------------|-----------------|-------------------|
//! | `classic`  | `stats.csv` spreadsheet | actual          | off               |
//! | `forecast` | `stats.csv` spreadsheet | predicted       | off               |
//! | `embedded` | built-in table          | actual          | "Ender Dragon"    |
//!
//! A TOML file can start from a preset and override individual fields:
//!
//! ```toml
//! preset = "forecast"
//! label_threshold_minutes = 20
//! trend_axis = "column"
//!
//! [source]
//! kind = "file"
//! path = "exports/season-2.csv"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::record::RunRecord;

/// Environment variable the desktop launcher reads a config path from.
pub const CONFIG_ENV: &str = "RUNBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub title: String,
    pub source: SourceConfig,
    pub schema: Schema,
    pub completion: CompletionMetric,
    pub victory: Option<VictoryRule>,
    /// Minimum segment size (minutes) before a bar segment gets a text label.
    pub label_threshold_minutes: f64,
    pub trend_axis: TrendAxis,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    File { path: PathBuf },
    Embedded,
}

/// Column layout the loader expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    Spreadsheet,
    Embedded,
}

/// How the "completion run" tile gets its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionMetric {
    /// Duration of the final (or victorious) run.
    Actual,
    /// Trend-line estimate for the last milestone.
    Predicted,
}

/// What the milestone trend line is fitted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendAxis {
    /// Position among the milestones reached so far (0, 1, 2, ...), so an
    /// unreached milestone in the middle of the list closes the gap.
    #[default]
    Progression,
    /// The milestone's column position in the table.
    Column,
}

impl SourceConfig {
    /// Column layout a source is normally exported with.
    pub fn default_schema(&self) -> Schema {
        match self {
            SourceConfig::File { .. } => Schema::Spreadsheet,
            SourceConfig::Embedded => Schema::Embedded,
        }
    }
}

/// Marks records whose "player" is really the defeated boss.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VictoryRule {
    pub player: String,
    /// Keep victory records in the per-player death statistics.
    #[serde(default)]
    pub count_as_death: bool,
}

impl VictoryRule {
    pub fn matches(&self, record: &RunRecord) -> bool {
        record.player.eq_ignore_ascii_case(self.player.trim())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown preset `{0}` (expected classic, forecast or embedded)")]
    UnknownPreset(String),
}

/// On-disk shape: every field optional so a file only states what it changes.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    preset: Option<String>,
    title: Option<String>,
    source: Option<SourceConfig>,
    schema: Option<Schema>,
    completion: Option<CompletionMetric>,
    victory: Option<VictoryRule>,
    label_threshold_minutes: Option<f64>,
    trend_axis: Option<TrendAxis>,
}

impl DashboardConfig {
    pub fn classic() -> Self {
        Self {
            title: "Hardcore Challenge Stats".to_string(),
            source: SourceConfig::File {
                path: PathBuf::from("stats.csv"),
            },
            schema: Schema::Spreadsheet,
            completion: CompletionMetric::Actual,
            victory: None,
            label_threshold_minutes: 30.0,
            trend_axis: TrendAxis::Progression,
        }
    }

    pub fn forecast() -> Self {
        Self {
            completion: CompletionMetric::Predicted,
            ..Self::classic()
        }
    }

    pub fn embedded() -> Self {
        Self {
            source: SourceConfig::Embedded,
            schema: Schema::Embedded,
            victory: Some(VictoryRule {
                player: "Ender Dragon".to_string(),
                count_as_death: false,
            }),
            ..Self::classic()
        }
    }

    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::classic()),
            "forecast" => Ok(Self::forecast()),
            "embedded" => Ok(Self::embedded()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        let mut config = match file.preset.as_deref() {
            Some(name) => Self::preset(name)?,
            None => Self::classic(),
        };

        if let Some(title) = file.title {
            config.title = title;
        }
        if let Some(source) = file.source {
            config.schema = source.default_schema();
            config.source = source;
        }
        if let Some(schema) = file.schema {
            config.schema = schema;
        }
        if let Some(completion) = file.completion {
            config.completion = completion;
        }
        if file.victory.is_some() {
            config.victory = file.victory;
        }
        if let Some(threshold) = file.label_threshold_minutes {
            config.label_threshold_minutes = threshold.max(0.0);
        }
        if let Some(axis) = file.trend_axis {
            config.trend_axis = axis;
        }

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Config named by [`CONFIG_ENV`], or the classic preset when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                tracing::info!(path = %path.display(), "loading dashboard config");
                Self::load(&path)
            }
            None => Ok(Self::classic()),
        }
    }

    pub fn is_victory(&self, record: &RunRecord) -> bool {
        self.victory
            .as_ref()
            .is_some_and(|rule| rule.matches(record))
    }

    /// Whether a record belongs in per-player death statistics.
    pub fn counts_as_death(&self, record: &RunRecord) -> bool {
        match &self.victory {
            Some(rule) if rule.matches(record) => rule.count_as_death,
            _ => true,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::classic()
    }
}
