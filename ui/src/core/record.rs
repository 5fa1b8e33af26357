//! Run records and the immutable dataset they live in.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// One playthrough attempt, normalized from a source row.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub run: u32,
    pub day: u32,
    pub duration_min: f64,
    pub player: String,
    pub cause: String,
    /// Milestone flags in the same order as [`Dataset::achievements`].
    pub achievements: Vec<bool>,
    pub notes: Option<String>,
}

impl RunRecord {
    pub fn reached(&self, achievement: usize) -> bool {
        self.achievements.get(achievement).copied().unwrap_or(false)
    }

    pub fn reached_any(&self) -> bool {
        self.achievements.iter().any(|flag| *flag)
    }

    pub fn achievement_count(&self) -> usize {
        self.achievements.iter().filter(|flag| **flag).count()
    }

    /// Index of the furthest milestone reached, if any.
    pub fn furthest_milestone(&self) -> Option<usize> {
        self.achievements.iter().rposition(|flag| *flag)
    }
}

/// Where a dataset was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataOrigin {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::File(path) => write!(f, "{}", path.display()),
            DataOrigin::Embedded => f.write_str("embedded table"),
        }
    }
}

/// The full record set. Built once by the loader and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub origin: DataOrigin,
    /// Milestone names in progression order, prefix stripped.
    pub achievements: Vec<String>,
    pub records: Vec<RunRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_achievements(&self) -> bool {
        !self.achievements.is_empty()
    }

    /// Distinct days, ascending.
    pub fn days(&self) -> Vec<u32> {
        self.records
            .iter()
            .map(|record| record.day)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Ordering anomalies worth surfacing in the log. The dashboard still
    /// renders a dataset that has some.
    pub fn anomalies(&self) -> Vec<String> {
        let mut found = Vec::new();
        let mut seen = BTreeSet::new();

        for record in &self.records {
            if !seen.insert(record.run) {
                found.push(format!("duplicate run id {}", record.run));
            }
        }

        for pair in self.records.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.run < prev.run {
                found.push(format!("run {} listed after run {}", next.run, prev.run));
            }
            if next.day < prev.day {
                found.push(format!(
                    "run {} is on day {} after day {}",
                    next.run, next.day, prev.day
                ));
            }
        }

        found
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(run: u32, day: u32, duration_min: f64, player: &str, cause: &str) -> RunRecord {
        RunRecord {
            run,
            day,
            duration_min,
            player: player.into(),
            cause: cause.into(),
            achievements: Vec::new(),
            notes: None,
        }
    }

    pub fn with_flags(mut record: RunRecord, flags: &[bool]) -> RunRecord {
        record.achievements = flags.to_vec();
        record
    }

    pub fn dataset(achievements: &[&str], records: Vec<RunRecord>) -> Dataset {
        Dataset {
            origin: DataOrigin::Embedded,
            achievements: achievements.iter().map(|name| name.to_string()).collect(),
            records,
        }
    }
}
