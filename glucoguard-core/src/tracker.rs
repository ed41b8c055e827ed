//! Submission pipeline
//!
//! One submission runs start to finish in a single synchronous call:
//!
//! ```text
//! raw ──► validate ──► stamp ──► append ──► classify ──► Submission
//!            │                      │
//!            ▼                      ▼
//!     ValidationError        NotSaved(StorageError)
//!     (nothing stored,       (guidance still returned)
//!      nothing classified)
//! ```
//!
//! Storage failures degrade the result to "computed but not saved"; they
//! never hide guidance for the reading the user just entered. Emergency
//! readings are persisted like any other.
//!
//! Delta insight and trend are read-only and can be queried at any time.

use crate::{
    classifier::{classify, band_for, Band, ClassificationOutcome},
    constants::storage::DEFAULT_TREND_WINDOW,
    errors::{StorageError, StorageResult, ValidationResult},
    time::{SystemClock, TimeSource},
    traits::{HistoryStore, Reading, Validator},
    trend::{trend_points, DeltaInsight, TrendPoint},
    validators::GlucoseValidator,
};

/// Whether the submitted reading reached the history log
#[derive(Debug)]
pub enum Persistence {
    /// Appended to history
    Saved,
    /// Classified but not stored
    NotSaved(StorageError),
}

impl Persistence {
    /// Check if the reading reached history
    pub fn is_saved(&self) -> bool {
        matches!(self, Persistence::Saved)
    }

    /// The storage failure, if any
    pub fn error(&self) -> Option<&StorageError> {
        match self {
            Persistence::Saved => None,
            Persistence::NotSaved(e) => Some(e),
        }
    }
}

/// Result of one accepted submission
#[derive(Debug)]
pub struct Submission {
    /// The stamped reading
    pub reading: Reading,
    /// What to tell the user
    pub outcome: ClassificationOutcome,
    /// Whether history was updated
    pub persistence: Persistence,
}

impl Submission {
    /// Band of the submitted reading
    pub fn band(&self) -> Band {
        band_for(self.reading.value)
    }
}

/// Running counters since the tracker was built
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrackerStats {
    /// Every call to `submit`
    pub submissions: usize,
    /// Submissions that failed validation
    pub rejected: usize,
    /// Readings appended to history
    pub saved: usize,
    /// Readings classified but not stored
    pub save_failures: usize,
    /// Readings in an emergency band
    pub emergencies: usize,
}

/// Validator, history and classifier composed into one pipeline
///
/// ## Example
///
/// ```rust
/// use glucoguard_core::{GlucoseTracker, history::MemoryHistoryStore, trend::DeltaInsight};
///
/// let mut tracker = GlucoseTracker::builder(MemoryHistoryStore::new()).build();
///
/// let submission = tracker.submit(85).unwrap();
/// assert!(submission.persistence.is_saved());
/// assert_eq!(tracker.insight().unwrap(), DeltaInsight::FirstEntry);
///
/// assert!(tracker.submit(0).is_err());
/// ```
pub struct GlucoseTracker<S, C = SystemClock> {
    validator: GlucoseValidator,
    store: S,
    clock: C,
    trend_window: usize,
    stats: TrackerStats,
}

impl<S: HistoryStore> GlucoseTracker<S, SystemClock> {
    /// Create a new tracker builder around a history store
    pub fn builder(store: S) -> TrackerBuilder<S, SystemClock> {
        TrackerBuilder::new(store)
    }
}

impl<S: HistoryStore, C: TimeSource> GlucoseTracker<S, C> {
    /// Validate, persist and classify one raw reading
    ///
    /// Returns `Err` only for invalid input. Storage problems are reported
    /// inside the `Submission`.
    pub fn submit(&mut self, raw: i64) -> ValidationResult<Submission> {
        self.stats.submissions += 1;

        let value = match self.validator.validate(raw) {
            Ok(value) => value,
            Err(e) => {
                self.stats.rejected += 1;
                log_debug!("Rejected submission: {}", e);
                return Err(e);
            }
        };

        let reading = Reading::new(self.clock.now(), value);

        let persistence = match self.store.append(reading) {
            Ok(()) => {
                self.stats.saved += 1;
                Persistence::Saved
            }
            Err(e) => {
                self.stats.save_failures += 1;
                log_warn!("Reading {} mg/dL computed but not saved: {}", value, e);
                Persistence::NotSaved(e)
            }
        };

        let outcome = classify(value);
        if outcome.is_emergency() {
            self.stats.emergencies += 1;
        }

        log_info!(
            "Submitted {} mg/dL at {} -> {:?}",
            value,
            reading.timestamp,
            band_for(value)
        );

        Ok(Submission {
            reading,
            outcome,
            persistence,
        })
    }

    /// Latest reading compared with the one before it
    pub fn insight(&self) -> StorageResult<DeltaInsight> {
        self.store.latest_delta()
    }

    /// Last `trend_window` readings with their colors, oldest first
    pub fn trend(&self) -> StorageResult<Vec<TrendPoint>> {
        self.trend_with_window(self.trend_window)
    }

    /// Last `n` readings with their colors, oldest first
    pub fn trend_with_window(&self, n: usize) -> StorageResult<Vec<TrendPoint>> {
        let window = self.store.recent_window(n)?;
        Ok(trend_points(&window))
    }

    /// Every stored reading, oldest first
    pub fn history(&self) -> StorageResult<Vec<Reading>> {
        self.store.read_all()
    }

    /// Get running counters
    pub fn stats(&self) -> &TrackerStats {
        &self.stats
    }

    /// Configured trend window
    pub fn trend_window(&self) -> usize {
        self.trend_window
    }

    /// Borrow the history store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take the history store back
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Builder for [`GlucoseTracker`]
pub struct TrackerBuilder<S, C> {
    store: S,
    clock: C,
    validator: GlucoseValidator,
    trend_window: usize,
}

impl<S: HistoryStore> TrackerBuilder<S, SystemClock> {
    /// Start from a store, the system clock and default limits
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: SystemClock,
            validator: GlucoseValidator::default(),
            trend_window: DEFAULT_TREND_WINDOW,
        }
    }
}

impl<S: HistoryStore, C: TimeSource> TrackerBuilder<S, C> {
    /// Use a different clock
    pub fn clock<T: TimeSource>(self, clock: T) -> TrackerBuilder<S, T> {
        TrackerBuilder {
            store: self.store,
            clock,
            validator: self.validator,
            trend_window: self.trend_window,
        }
    }

    /// Use a custom validator
    pub fn validator(mut self, validator: GlucoseValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Set how many readings the trend covers
    pub fn trend_window(mut self, n: usize) -> Self {
        self.trend_window = n;
        self
    }

    /// Build the tracker
    pub fn build(self) -> GlucoseTracker<S, C> {
        GlucoseTracker {
            validator: self.validator,
            store: self.store,
            clock: self.clock,
            trend_window: self.trend_window,
            stats: TrackerStats::default(),
        }
    }
}
