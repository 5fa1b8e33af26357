//! Everything the dashboard page shows for one day selection, computed in a
//! single pass from the loaded dataset. Rendering reads this and nothing else.

use crate::chart::bars::{death_bars, time_lost_bars, timeline_bars, StackedBars};
use crate::chart::pie::{milestone_pie, PieSlice};
use crate::core::config::DashboardConfig;
use crate::core::filter::{self, DayFilter};
use crate::core::record::Dataset;
use crate::stats::completion::{completion, Completion};
use crate::stats::daily::{daily_trends, DayTrend};
use crate::stats::deaths::{death_breakdown, PlayerOrder};
use crate::stats::milestones::{
    achievement_durations, achievement_rates, milestone_buckets, AchievementRates,
};
use crate::stats::mode::mode;
use crate::stats::table::{run_table, RunTable};
use crate::stats::time_lost::time_lost;
use crate::stats::timeline::timeline;
use crate::stats::totals::Totals;
use crate::stats::trend::{forecast, MilestoneForecast, TrendError};
use crate::stats::victim_records;

/// State of the milestone prediction section.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    /// The table has no achievement columns.
    NoMilestones,
    Unavailable(TrendError),
    Ready(MilestoneForecast),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneSummary {
    pub slices: Vec<PieSlice>,
    pub rates: AchievementRates,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub filter: DayFilter,
    pub totals: Totals,
    pub completion: Completion,
    /// Most frequent cause among deaths, with its count.
    pub most_common_death: Option<(String, usize)>,
    pub deaths: StackedBars,
    pub time_lost: StackedBars,
    pub timeline: StackedBars,
    pub prediction: Prediction,
    /// `None` when the table has no achievement columns.
    pub milestones: Option<MilestoneSummary>,
    /// `None` unless every day is selected.
    pub daily: Option<Vec<DayTrend>>,
    pub table: RunTable,
}

impl DashboardModel {
    pub fn build(dataset: &Dataset, config: &DashboardConfig, day: DayFilter) -> Self {
        let records = filter::apply(&dataset.records, day);
        let victims = victim_records(&records, config);
        let threshold = config.label_threshold_minutes;

        let forecast_result = dataset.has_achievements().then(|| {
            let points = achievement_durations(&dataset.achievements, &records);
            forecast(&dataset.achievements, &points, config.trend_axis)
        });

        let prediction = match &forecast_result {
            None => Prediction::NoMilestones,
            Some(Ok(forecast)) => Prediction::Ready(forecast.clone()),
            Some(Err(err)) => {
                tracing::debug!(%day, error = %err, "milestone prediction skipped");
                Prediction::Unavailable(err.clone())
            }
        };

        let milestones = dataset.has_achievements().then(|| MilestoneSummary {
            slices: milestone_pie(&milestone_buckets(&dataset.achievements, &records)),
            rates: achievement_rates(&dataset.achievements, &records),
        });

        Self {
            filter: day,
            totals: Totals::from_records(&records),
            completion: completion(config, &records, forecast_result.as_ref()),
            most_common_death: mode(victims.iter().map(|r| r.cause.clone())),
            deaths: death_bars(&death_breakdown(&victims, PlayerOrder::Ascending)),
            time_lost: time_lost_bars(&time_lost(&victims), threshold),
            timeline: timeline_bars(&timeline(&records, day), threshold),
            prediction,
            milestones,
            daily: day.is_all().then(|| daily_trends(dataset)),
            table: run_table(&dataset.achievements, &records, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::fixtures::{dataset, record, with_flags};

    fn sample() -> Dataset {
        dataset(
            &["Wood", "Iron", "Nether"],
            vec![
                with_flags(record(1, 1, 12.0, "Alex", "Creeper"), &[true, false, false]),
                with_flags(record(2, 1, 30.0, "Sam", "Lava"), &[true, true, false]),
                with_flags(record(3, 2, 8.0, "Alex", "Creeper"), &[true, false, false]),
                with_flags(record(4, 2, 50.0, "Jordan", "Fall"), &[true, false, false]),
            ],
        )
    }

    #[test]
    fn all_days_fills_every_section() {
        crate::i18n::init();
        let model = DashboardModel::build(&sample(), &DashboardConfig::classic(), DayFilter::All);

        assert_eq!(model.totals.runs, 4);
        assert_eq!(model.totals.total_min, 100.0);
        assert_eq!(model.most_common_death, Some(("Creeper".to_string(), 2)));
        assert!(matches!(model.prediction, Prediction::Ready(_)));
        assert_eq!(model.daily.as_ref().map(Vec::len), Some(2));
        assert_eq!(model.table.rows.len(), 4);
        assert_eq!(
            model.completion,
            Completion::Actual {
                run: 4,
                minutes: 50.0,
                victory: false
            }
        );

        let milestones = model.milestones.unwrap();
        let bucketed: usize = milestones.slices.iter().map(|s| s.count).sum();
        assert_eq!(bucketed, 4);
        assert_eq!(milestones.rates.rates[0].count, 4);
        assert_eq!(milestones.rates.rates[1].count, 1);
    }

    #[test]
    fn single_day_narrows_and_hides_daily_trends() {
        crate::i18n::init();
        let model =
            DashboardModel::build(&sample(), &DashboardConfig::classic(), DayFilter::Day(2));

        assert_eq!(model.totals.runs, 2);
        assert!(model.daily.is_none());
        assert_eq!(model.timeline.bars.len(), 1);
        // only one milestone reached on day 2: no line to fit
        assert_eq!(
            model.prediction,
            Prediction::Unavailable(TrendError::InsufficientData(1))
        );
    }

    #[test]
    fn tables_without_achievements_skip_milestone_sections() {
        crate::i18n::init();
        let data = dataset(&[], vec![record(1, 1, 10.0, "Alex", "Lava")]);
        let model = DashboardModel::build(&data, &DashboardConfig::forecast(), DayFilter::All);

        assert_eq!(model.prediction, Prediction::NoMilestones);
        assert!(model.milestones.is_none());
        assert!(matches!(model.completion, Completion::Unavailable(_)));
    }

    #[test]
    fn victories_stay_out_of_death_charts() {
        crate::i18n::init();
        let data = dataset(
            &[],
            vec![
                record(1, 1, 10.0, "Alex", "Lava"),
                record(2, 1, 90.0, "Ender Dragon", "Defeated"),
            ],
        );
        let model = DashboardModel::build(&data, &DashboardConfig::embedded(), DayFilter::All);

        assert_eq!(model.deaths.bars.len(), 1);
        assert_eq!(model.time_lost.bars.len(), 1);
        assert_eq!(model.most_common_death, Some(("Lava".to_string(), 1)));
        assert_eq!(model.totals.total_min, 100.0);
        assert_eq!(
            model.completion,
            Completion::Actual {
                run: 2,
                minutes: 90.0,
                victory: true
            }
        );
    }
}
