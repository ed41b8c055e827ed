//! Integration tests for the submission pipeline
//!
//! Tests the complete flow from raw form input through validation,
//! persistence and classification, plus the read-only trend queries.

mod common;

use glucoguard_core::{
    classifier::{EmergencyKind, Status},
    history::{HistoryStore, MemoryHistoryStore},
    trend::{DeltaInsight, Direction, TrendColor},
    GlucoseTracker, ValidationError,
};

use common::{morning, DailyClock, WeekScenario};

#[test]
fn test_standard_week_scenarios() {
    for scenario in WeekScenario::standard_scenarios() {
        let mut tracker = GlucoseTracker::builder(MemoryHistoryStore::new())
            .clock(DailyClock::starting(morning(1)))
            .build();

        for raw in scenario.values {
            let _ = tracker.submit(raw);
        }

        let stats = tracker.stats();
        assert_eq!(stats.submissions, 7, "{}", scenario.name);
        assert_eq!(stats.saved, scenario.expected_saved, "{}", scenario.name);
        assert_eq!(stats.rejected, scenario.expected_rejected, "{}", scenario.name);
        assert_eq!(stats.emergencies, scenario.expected_emergencies, "{}", scenario.name);
        assert_eq!(
            tracker.history().unwrap().len(),
            scenario.expected_saved,
            "{}",
            scenario.name
        );
    }
}

#[test]
fn test_invalid_submission_halts_pipeline() {
    let mut tracker = GlucoseTracker::builder(MemoryHistoryStore::new()).build();

    match tracker.submit(0) {
        Err(ValidationError::NonPositive { value }) => assert_eq!(value, 0),
        other => panic!("Expected NonPositive, got {:?}", other.map(|s| s.reading)),
    }
    assert!(matches!(tracker.submit(750), Err(ValidationError::OutOfRange { .. })));

    assert!(tracker.store().is_empty().unwrap());
    assert_eq!(tracker.insight().unwrap(), DeltaInsight::NoHistory);
}

#[test]
fn test_critical_low_is_emergency_and_saved() {
    let mut tracker = GlucoseTracker::builder(MemoryHistoryStore::new())
        .clock(DailyClock::starting(morning(5)))
        .build();

    let submission = tracker.submit(35).unwrap();
    let notice = submission.outcome.emergency().expect("emergency notice");
    assert_eq!(notice.kind, EmergencyKind::CriticalLow);
    assert!(submission.outcome.guidance().is_none());
    assert!(submission.persistence.is_saved());
    assert_eq!(tracker.history().unwrap()[0].timestamp, morning(5));
}

#[test]
fn test_same_value_twice() {
    let mut tracker = GlucoseTracker::builder(MemoryHistoryStore::new())
        .clock(DailyClock::starting(morning(1)))
        .build();

    let first = tracker.submit(85).unwrap();
    assert_eq!(first.outcome.guidance().unwrap().status, Status::Normal);
    assert_eq!(tracker.insight().unwrap(), DeltaInsight::FirstEntry);

    let second = tracker.submit(85).unwrap();
    assert_eq!(second.outcome.guidance().unwrap().status, Status::Normal);
    assert_eq!(
        tracker.insight().unwrap(),
        DeltaInsight::Compared { direction: Direction::Same, magnitude: 0 }
    );

    let history = tracker.history().unwrap();
    assert!(history[0].timestamp < history[1].timestamp);
}

#[test]
fn test_unsaved_reading_still_gets_guidance() {
    let mut tracker = GlucoseTracker::builder(MemoryHistoryStore::new().fail_writes()).build();

    let submission = tracker.submit(118).unwrap();
    assert!(!submission.persistence.is_saved());
    assert_eq!(submission.outcome.guidance().unwrap().status, Status::Borderline);

    // The tracker stays usable for the next submission
    let next = tracker.submit(90).unwrap();
    assert_eq!(next.outcome.guidance().unwrap().status, Status::Normal);
    assert_eq!(tracker.stats().save_failures, 2);
}

#[test]
fn test_trend_window_and_colors() {
    let mut tracker = GlucoseTracker::builder(MemoryHistoryStore::new())
        .clock(DailyClock::starting(morning(1)))
        .build();

    for raw in [60, 72, 88, 99, 104, 120, 140, 95, 65, 210] {
        tracker.submit(raw).unwrap();
    }

    let trend = tracker.trend().unwrap();
    assert_eq!(trend.len(), 7);

    let values: Vec<u32> = trend.iter().map(|p| p.reading.value).collect();
    assert_eq!(values, vec![99, 104, 120, 140, 95, 65, 210]);

    let colors: Vec<TrendColor> = trend.iter().map(|p| p.color).collect();
    assert_eq!(
        colors,
        vec![
            TrendColor::Green,
            TrendColor::Orange,
            TrendColor::Orange,
            TrendColor::Red,
            TrendColor::Green,
            TrendColor::Red,
            TrendColor::Red,
        ]
    );
}

#[cfg(feature = "store-csv")]
#[test]
fn test_csv_backed_tracker_survives_restart() {
    use glucoguard_core::history::CsvHistoryStore;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sugar_history.csv");

    {
        let store = CsvHistoryStore::open(&path).unwrap();
        let mut tracker = GlucoseTracker::builder(store)
            .clock(DailyClock::starting(morning(1)))
            .build();
        tracker.submit(100).unwrap();
        tracker.submit(130).unwrap();

        let store = tracker.into_store();
        assert_eq!(store.stats().appends, 2);
        assert_eq!(store.stats().rows_after_last_append, 2);
    }

    let store = CsvHistoryStore::open(&path).unwrap();
    let mut tracker = GlucoseTracker::builder(store)
        .clock(DailyClock::starting(morning(3)))
        .build();
    assert_eq!(
        tracker.insight().unwrap(),
        DeltaInsight::Compared { direction: Direction::Higher, magnitude: 30 }
    );

    tracker.submit(110).unwrap();
    assert_eq!(
        tracker.insight().unwrap(),
        DeltaInsight::Compared { direction: Direction::Lower, magnitude: 20 }
    );
    assert_eq!(tracker.history().unwrap().len(), 3);
}
