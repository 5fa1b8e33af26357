//! Loads the run table from a spreadsheet export or the built-in table and
//! normalizes it into a [`Dataset`].
//!
//! Missing sources and tables without the expected columns fail the whole
//! load. Individual cells that can't be read are coerced to safe defaults
//! (zero minutes, run/day 0) and counted; the count is logged once per load.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Trim};
use once_cell::sync::OnceCell;
use thiserror::Error;

use super::config::{DashboardConfig, Schema, SourceConfig};
use super::normalize::{
    achievement_name, capitalize_name, first_digit_run, optional_text, parse_flag, parse_minutes,
};
use super::record::{DataOrigin, Dataset, RunRecord};

/// Built-in table used by the embedded preset (and the web build).
pub const EMBEDDED_TABLE: &str = include_str!("../../data/embedded_runs.csv");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("couldn't find {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("couldn't read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("couldn't parse table: {0}")]
    Parse(#[from] csv::Error),
    #[error("table is missing the `{0}` column")]
    MissingColumn(&'static str),
    #[error("table has no runs")]
    NoRows,
}

/// Header names for one table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    pub run: &'static str,
    pub day: &'static str,
    pub duration: &'static str,
    pub player: &'static str,
    pub cause: &'static str,
    pub notes: &'static str,
}

impl ColumnSchema {
    pub const SPREADSHEET: Self = Self {
        run: "Run",
        day: "Day",
        duration: "Approximate Duration (Minutes)",
        player: "Player Death",
        cause: "Cause of Death",
        notes: "Notes",
    };

    /// Rolling averages, time of death and per-player counters are present in
    /// this layout but not read.
    pub const EMBEDDED: Self = Self {
        run: "Run",
        day: "Day",
        duration: "Run Length",
        player: "Player",
        cause: "Cause",
        notes: "Notes",
    };

    pub fn for_schema(schema: Schema) -> Self {
        match schema {
            Schema::Spreadsheet => Self::SPREADSHEET,
            Schema::Embedded => Self::EMBEDDED,
        }
    }
}

struct Columns {
    run: usize,
    day: usize,
    duration: usize,
    player: usize,
    cause: usize,
    notes: Option<usize>,
    achievements: Vec<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord, schema: &ColumnSchema) -> Result<Self, SourceError> {
        let find = |name: &str| headers.iter().position(|header| header.trim() == name);
        let require = |name: &'static str| find(name).ok_or(SourceError::MissingColumn(name));

        Ok(Self {
            run: require(schema.run)?,
            day: require(schema.day)?,
            duration: require(schema.duration)?,
            player: require(schema.player)?,
            cause: require(schema.cause)?,
            notes: find(schema.notes),
            achievements: headers
                .iter()
                .enumerate()
                .filter(|(_, header)| achievement_name(header).is_some())
                .map(|(idx, _)| idx)
                .collect(),
        })
    }
}

#[derive(Debug, Default)]
struct Coercions {
    durations: usize,
    runs: usize,
    days: usize,
}

impl Coercions {
    fn total(&self) -> usize {
        self.durations + self.runs + self.days
    }
}

/// Parse a CSV table with `schema`'s headers into a dataset.
pub fn read_table<R: Read>(
    reader: R,
    schema: &ColumnSchema,
    origin: DataOrigin,
) -> Result<Dataset, SourceError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let columns = Columns::resolve(&headers, schema)?;
    let achievements = columns
        .achievements
        .iter()
        .filter_map(|idx| headers.get(*idx).and_then(achievement_name))
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut coercions = Coercions::default();
    let mut records = Vec::new();

    for (line, row) in csv.records().enumerate() {
        let row = row?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let duration_min = parse_minutes(cell(columns.duration)).unwrap_or_else(|| {
            tracing::debug!(line, raw = cell(columns.duration), "unreadable duration, using 0");
            coercions.durations += 1;
            0.0
        });
        let run = first_digit_run(cell(columns.run)).unwrap_or_else(|| {
            tracing::debug!(line, raw = cell(columns.run), "run label without a number, using 0");
            coercions.runs += 1;
            0
        });
        let day = first_digit_run(cell(columns.day)).unwrap_or_else(|| {
            tracing::debug!(line, raw = cell(columns.day), "unreadable day, using 0");
            coercions.days += 1;
            0
        });

        records.push(RunRecord {
            run,
            day,
            duration_min,
            player: capitalize_name(cell(columns.player)),
            cause: cell(columns.cause).trim().to_string(),
            achievements: columns
                .achievements
                .iter()
                .map(|idx| parse_flag(cell(*idx)))
                .collect(),
            notes: columns.notes.and_then(|idx| optional_text(cell(idx))),
        });
    }

    if records.is_empty() {
        return Err(SourceError::NoRows);
    }

    if coercions.total() > 0 {
        tracing::warn!(
            %origin,
            durations = coercions.durations,
            runs = coercions.runs,
            days = coercions.days,
            "coerced malformed fields to defaults"
        );
    }

    let dataset = Dataset {
        origin,
        achievements,
        records,
    };

    for anomaly in dataset.anomalies() {
        tracing::warn!(origin = %dataset.origin, "{anomaly}");
    }

    Ok(dataset)
}

/// Load the table named by `config`. Every call reads the source again; use
/// [`load_cached`] from rendering code.
pub fn load(config: &DashboardConfig) -> Result<Dataset, SourceError> {
    let schema = ColumnSchema::for_schema(config.schema);

    let dataset = match &config.source {
        SourceConfig::Embedded => {
            read_table(EMBEDDED_TABLE.as_bytes(), &schema, DataOrigin::Embedded)?
        }
        SourceConfig::File { path } => {
            let file = File::open(path).map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => SourceError::NotFound { path: path.clone() },
                _ => SourceError::Io {
                    path: path.clone(),
                    source,
                },
            })?;
            read_table(file, &schema, DataOrigin::File(path.clone()))?
        }
    };

    tracing::info!(
        origin = %dataset.origin,
        runs = dataset.len(),
        achievements = dataset.achievements.len(),
        "dataset loaded"
    );

    Ok(dataset)
}

static CACHE: OnceCell<Arc<Dataset>> = OnceCell::new();

/// Load once per process and share the result. Failed loads are not cached,
/// so a fixed source is picked up on the next call. The first successful
/// config wins for the rest of the process.
pub fn load_cached(config: &DashboardConfig) -> Result<Arc<Dataset>, SourceError> {
    CACHE
        .get_or_try_init(|| load(config).map(Arc::new))
        .cloned()
        .map_err(|err| {
            tracing::error!(error = %err, "dataset load failed");
            err
        })
}
