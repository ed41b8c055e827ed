//! Tests for the CSV history store

#![cfg(feature = "store-csv")]

mod common;

use std::fs;
use std::io::Write;

use glucoguard_core::{
    history::{CsvHistoryStore, HistoryStore, Reading},
    trend::{DeltaInsight, Direction},
    StorageError,
};
use tempfile::{tempdir, NamedTempFile};

use common::{morning, series};

fn store_with(values: &[u32]) -> (tempfile::TempDir, CsvHistoryStore) {
    let dir = tempdir().unwrap();
    let mut store = CsvHistoryStore::open(dir.path().join("sugar_history.csv")).unwrap();
    for reading in series(values) {
        store.append(reading).unwrap();
    }
    (dir, store)
}

#[test]
fn test_append_then_read_all() {
    let (_dir, mut store) = store_with(&[80, 95, 110]);
    let before = store.read_all().unwrap();

    let latest = Reading::new(morning(20), 101);
    store.append(latest).unwrap();

    let after = store.read_all().unwrap();
    assert_eq!(after.len(), 4);
    assert_eq!(after.last(), Some(&latest));
    assert_eq!(&after[..3], &before[..]);
}

#[test]
fn test_reads_existing_log() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "datetime,sugar").unwrap();
    writeln!(temp_file, "2024-01-01 07:30:00,88").unwrap();
    writeln!(temp_file, "2024-01-02 07:45:12, 132").unwrap();
    temp_file.flush().unwrap();

    let store = CsvHistoryStore::new(temp_file.path());
    let readings = store.read_all().unwrap();

    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0], Reading::new(morning(1), 88));
    assert_eq!(readings[1].value, 132);
    assert_eq!(readings[1].timestamp.to_string(), "2024-01-02 07:45:12");
}

#[test]
fn test_latest_delta() {
    let (_dir, store) = store_with(&[]);
    assert_eq!(store.latest_delta().unwrap(), DeltaInsight::NoHistory);

    let (_dir, store) = store_with(&[120]);
    assert_eq!(store.latest_delta().unwrap(), DeltaInsight::FirstEntry);

    let (_dir, store) = store_with(&[80, 95]);
    assert_eq!(
        store.latest_delta().unwrap(),
        DeltaInsight::Compared { direction: Direction::Higher, magnitude: 15 }
    );

    let (_dir, store) = store_with(&[95, 80]);
    assert_eq!(
        store.latest_delta().unwrap(),
        DeltaInsight::Compared { direction: Direction::Lower, magnitude: 15 }
    );

    let (_dir, store) = store_with(&[90, 90]);
    assert_eq!(
        store.latest_delta().unwrap(),
        DeltaInsight::Compared { direction: Direction::Same, magnitude: 0 }
    );
}

#[test]
fn test_recent_window() {
    let (_dir, store) = store_with(&[70, 80, 90]);
    let window = store.recent_window(7).unwrap();
    assert_eq!(window, series(&[70, 80, 90]));

    let values: Vec<u32> = (1..=20).map(|v| 60 + v * 5).collect();
    let (_dir, store) = store_with(&values);
    let window = store.recent_window(7).unwrap();
    assert_eq!(window.len(), 7);
    assert_eq!(window, series(&values)[13..].to_vec());
}

#[test]
fn test_failed_append_leaves_log_untouched() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "datetime,sugar").unwrap();
    writeln!(temp_file, "2024-01-01 07:30:00,88").unwrap();
    writeln!(temp_file, "not a date,abc").unwrap();
    temp_file.flush().unwrap();
    let original = fs::read_to_string(temp_file.path()).unwrap();

    let mut store = CsvHistoryStore::new(temp_file.path());
    let result = store.append(Reading::new(morning(3), 100));

    assert!(matches!(result, Err(StorageError::Csv(_))));
    assert_eq!(fs::read_to_string(temp_file.path()).unwrap(), original);
    assert_eq!(store.stats().failed_appends, 1);
    assert_eq!(store.stats().appends, 0);
}

#[test]
fn test_zero_value_row_is_malformed() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "datetime,sugar").unwrap();
    writeln!(temp_file, "2024-01-01 07:30:00,90").unwrap();
    writeln!(temp_file, "2024-01-02 07:30:00,0").unwrap();
    temp_file.flush().unwrap();

    let store = CsvHistoryStore::new(temp_file.path());
    match store.read_all() {
        Err(StorageError::MalformedRow { row, .. }) => assert_eq!(row, 2),
        other => panic!("Expected MalformedRow, got {:?}", other),
    }
}

#[test]
fn test_init_keeps_existing_log() {
    let (dir, _store) = store_with(&[85, 86]);
    let path = dir.path().join("sugar_history.csv");

    let reopened = CsvHistoryStore::open(&path).unwrap();
    assert_eq!(reopened.read_all().unwrap().len(), 2);
}

#[test]
fn test_unwritable_location_reports_error() {
    let dir = tempdir().unwrap();
    // A directory where the log file should be
    let path = dir.path().join("occupied");
    fs::create_dir(&path).unwrap();

    let mut store = CsvHistoryStore::new(&path);
    assert!(store.append(Reading::new(morning(1), 90)).is_err());
    assert!(path.is_dir());
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_keeps_log_intact() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, mut store) = store_with(&[88, 104]);
    let path = store.path().to_path_buf();
    let original = fs::read(&path).unwrap();

    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();
    // Root ignores directory permissions
    if fs::write(dir.path().join("writable-check"), b"").is_ok() {
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = store.append(Reading::new(morning(3), 120));
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(result, Err(StorageError::Io(_))));
    assert_eq!(fs::read(&path).unwrap(), original);
    assert_eq!(store.stats().failed_appends, 1);

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name != "sugar_history.csv")
        .collect();
    assert!(leftovers.is_empty(), "stray files: {:?}", leftovers);
}

#[cfg(unix)]
#[test]
fn test_append_keeps_log_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, mut store) = store_with(&[90]);
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();

    store.append(Reading::new(morning(2), 95)).unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}
