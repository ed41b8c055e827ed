//! File-based history log
//!
//! Readings are kept in a two-column CSV table with a header row:
//!
//! ```csv
//! datetime,sugar
//! 2024-03-01 07:02:11,92
//! 2024-03-02 07:10:45,104
//! ```
//!
//! ## Atomic Appends
//!
//! An append never edits the file in place. The full log plus the new row
//! is written to a temporary file in the same directory, synced, then
//! renamed over the original:
//!
//! ```text
//! read sugar_history.csv ──► write .tmpXXXX (old rows + new row)
//!                                   │ sync
//!                                   ▼
//!                            rename over sugar_history.csv
//! ```
//!
//! A crash or failed write leaves either the old log or the new log, never
//! a truncated one. The rename is only atomic within one filesystem, which
//! is why the temporary file lives next to the log.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::{StorageError, StorageResult};
use crate::traits::{HistoryStore, Reading};

/// Statistics for the durable store
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CsvStoreStats {
    /// Appends that reached disk
    pub appends: usize,
    /// Appends that failed and left the log unchanged
    pub failed_appends: usize,
    /// Rows in the log after the last successful append
    pub rows_after_last_append: usize,
}

/// CSV-backed history log
///
/// The path is injected; there is no process-wide default location.
///
/// ## Example
///
/// ```rust,no_run
/// use glucoguard_core::history::{CsvHistoryStore, HistoryStore};
///
/// let store = CsvHistoryStore::open("sugar_history.csv")?;
/// for reading in store.read_all()? {
///     println!("{} {}", reading.timestamp, reading.value);
/// }
/// # Ok::<(), glucoguard_core::StorageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvHistoryStore {
    /// Log file location
    path: PathBuf,
    /// Statistics
    stats: CsvStoreStats,
}

impl CsvHistoryStore {
    /// Create a store handle without touching the filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            stats: CsvStoreStats::default(),
        }
    }

    /// Create a store handle and make sure the log exists
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let store = Self::new(path);
        store.init()?;
        Ok(store)
    }

    /// Create the log with just a header row if it is absent
    ///
    /// An existing log is left as is.
    pub fn init(&self) -> StorageResult<()> {
        if self.path.exists() {
            log_debug!("History log already present at {}", self.path.display());
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        self.replace_with(&[])?;
        log_info!("Created history log at {}", self.path.display());
        Ok(())
    }

    /// Log file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get statistics
    pub fn stats(&self) -> &CsvStoreStats {
        &self.stats
    }

    /// Directory that holds the log; temporary files go here
    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Atomically replace the log with exactly `readings`
    fn replace_with(&self, readings: &[Reading]) -> StorageResult<()> {
        let temp = NamedTempFile::new_in(self.directory())?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(temp);
        writer.write_record(Reading::headers())?;
        for reading in readings {
            writer.serialize(reading)?;
        }
        writer.flush()?;

        let mut temp = writer
            .into_inner()
            .map_err(|e| StorageError::Io(e.into_error()))?;
        temp.flush()?;

        // Temp files are created owner-only; keep the log's existing mode
        match fs::metadata(&self.path) {
            Ok(meta) => temp.as_file().set_permissions(meta.permissions())?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path)?;
        Ok(())
    }

    /// Parse every row, checking the stored-value invariant
    fn parse(file: File) -> StorageResult<Vec<Reading>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut readings = Vec::new();
        for (index, row) in reader.deserialize::<Reading>().enumerate() {
            let reading = row?;
            if reading.value == 0 {
                return Err(StorageError::MalformedRow {
                    row: index + 1,
                    reason: "glucose value must be above zero".into(),
                });
            }
            readings.push(reading);
        }
        Ok(readings)
    }
}

impl HistoryStore for CsvHistoryStore {
    fn append(&mut self, reading: Reading) -> StorageResult<()> {
        let result = self.read_all().and_then(|mut readings| {
            readings.push(reading);
            self.replace_with(&readings)?;
            Ok(readings.len())
        });

        match result {
            Ok(rows) => {
                self.stats.appends += 1;
                self.stats.rows_after_last_append = rows;
                log_debug!("Appended {} mg/dL, log now has {} rows", reading.value, rows);
                Ok(())
            }
            Err(e) => {
                self.stats.failed_appends += 1;
                log_debug!("Append to {} failed: {}", self.path.display(), e);
                Err(e)
            }
        }
    }

    fn read_all(&self) -> StorageResult<Vec<Reading>> {
        match File::open(&self.path) {
            Ok(file) => Self::parse(file),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}
