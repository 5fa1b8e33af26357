//! End-to-end properties over the two bundled tables: the built-in one and
//! the spreadsheet export at the repository root.

use std::path::PathBuf;

use ui::core::config::{SourceConfig, TrendAxis};
use ui::core::filter::{self, DayFilter};
use ui::core::record::{DataOrigin, Dataset};
use ui::core::source::{self, ColumnSchema};
use ui::dashboard::model::{DashboardModel, Prediction};
use ui::stats::deaths::{death_breakdown, PlayerOrder};
use ui::stats::milestones::{achievement_durations, milestone_buckets};
use ui::stats::time_lost::time_lost;
use ui::stats::totals::Totals;
use ui::stats::trend::{forecast, TrendError};
use ui::stats::victim_records;
use ui::DashboardConfig;

fn spreadsheet_config() -> DashboardConfig {
    DashboardConfig {
        source: SourceConfig::File {
            path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../stats.csv")),
        },
        ..DashboardConfig::classic()
    }
}

fn load(config: &DashboardConfig) -> Dataset {
    source::load(config).expect("bundled table loads")
}

fn every_selection(dataset: &Dataset) -> Vec<DayFilter> {
    DayFilter::options(dataset)
}

#[test]
fn spreadsheet_export_normalizes() {
    let dataset = load(&spreadsheet_config());
    assert_eq!(dataset.len(), 24);
    assert_eq!(dataset.achievements.len(), 7);
    assert_eq!(dataset.achievements[0], "Acquire Hardware");
    assert_eq!(dataset.days(), vec![1, 2, 3, 4]);

    let run = |n: u32| {
        dataset
            .records
            .iter()
            .find(|r| r.run == n)
            .expect("run present")
    };
    // "31 minutes" and "-" in the duration column.
    assert_eq!(run(5).duration_min, 31.0);
    assert_eq!(run(4).duration_min, 0.0);
    assert_eq!(run(1).player, "Sam");
    assert_eq!(run(9).notes.as_deref(), Some("First nether trip"));
    assert!(run(23).reached(4));
}

#[test]
fn embedded_table_normalizes() {
    let config = DashboardConfig::embedded();
    let dataset = load(&config);
    assert_eq!(dataset.origin, DataOrigin::Embedded);
    assert!(!dataset.has_achievements());
    assert_eq!(dataset.records.first().map(|r| r.duration_min), Some(17.0));

    let victories = dataset.records.iter().filter(|r| config.is_victory(r)).count();
    assert_eq!(victories, 1);
}

#[test]
fn filtered_records_match_the_selected_day() {
    let dataset = load(&spreadsheet_config());
    for selection in every_selection(&dataset) {
        let records = filter::apply(&dataset.records, selection);
        match selection {
            DayFilter::All => assert_eq!(records.len(), dataset.len()),
            DayFilter::Day(day) => {
                assert!(!records.is_empty());
                assert!(records.iter().all(|r| r.day == day));
            }
        }
    }
}

#[test]
fn time_lost_adds_up_to_the_death_total() {
    for config in [spreadsheet_config(), DashboardConfig::embedded()] {
        let dataset = load(&config);
        for selection in every_selection(&dataset) {
            let victims = victim_records(&filter::apply(&dataset.records, selection), &config);
            let expected = Totals::from_records(&victims).total_min;
            let summed: f64 = time_lost(&victims).iter().map(|p| p.total_min).sum();
            assert!(
                (summed - expected).abs() < 1e-9,
                "{selection}: {summed} vs {expected}"
            );
        }
    }
}

#[test]
fn death_counts_cover_every_victim() {
    let config = DashboardConfig::embedded();
    let dataset = load(&config);
    let victims = victim_records(&dataset.records, &config);
    let breakdown = death_breakdown(&victims, PlayerOrder::Ascending);

    let total: usize = breakdown.players.iter().map(|p| p.total).sum();
    assert_eq!(total, victims.len());
    assert_eq!(victims.len() + 1, dataset.len());
    assert!(breakdown.players.iter().all(|p| p.player != "Ender Dragon"));
}

#[test]
fn milestone_buckets_partition_the_runs() {
    let dataset = load(&spreadsheet_config());
    for selection in every_selection(&dataset) {
        let records = filter::apply(&dataset.records, selection);
        let buckets = milestone_buckets(&dataset.achievements, &records);
        let counted: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(counted, records.len(), "{selection}");
    }
}

#[test]
fn loading_twice_gives_the_same_dashboard() {
    ui::i18n::init();
    let config = spreadsheet_config();
    let first = load(&config);
    let second = load(&config);
    assert_eq!(first, second);

    for selection in every_selection(&first) {
        assert_eq!(
            DashboardModel::build(&first, &config, selection),
            DashboardModel::build(&second, &config, selection),
        );
    }
}

#[test]
fn spreadsheet_prediction_reaches_the_final_milestone() {
    ui::i18n::init();
    let config = DashboardConfig::forecast();
    let dataset = load(&spreadsheet_config());
    let model = DashboardModel::build(&dataset, &config, DayFilter::All);

    let Prediction::Ready(forecast) = model.prediction else {
        panic!("expected a fitted trend, got {:?}", model.prediction);
    };
    assert_eq!(forecast.fitted.len(), dataset.achievements.len());
    assert_eq!(
        forecast.final_milestone().map(|p| p.name.as_str()),
        Some("Free the End")
    );
    assert!(forecast.fit.slope > 0.0);
    assert!(forecast.predicted.iter().all(|p| p.index >= 5));
}

#[test]
fn single_reached_milestone_has_no_trend() {
    let table = "\
Run,Day,Approximate Duration (Minutes),Player Death,Cause of Death,Achievement: First,Achievement: Second
Run 1,1,10,alex,Lava,TRUE,FALSE
Run 2,1,14,sam,Zombie,TRUE,FALSE
Run 3,1,3,sam,Fall damage,FALSE,FALSE
";
    let dataset = source::read_table(
        table.as_bytes(),
        &ColumnSchema::SPREADSHEET,
        DataOrigin::Embedded,
    )
    .expect("inline table parses");

    let points = achievement_durations(&dataset.achievements, &dataset.records);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].mean_min, 12.0);
    assert_eq!(
        forecast(&dataset.achievements, &points, TrendAxis::Progression),
        Err(TrendError::InsufficientData(1))
    );
}
