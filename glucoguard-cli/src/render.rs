//! Terminal rendering
//!
//! Every view is a small `Display` wrapper over core types, so the
//! classification rules never see a terminal and the views can be checked
//! as plain strings.

use std::fmt;

use serde::Serialize;

use glucoguard_core::{
    classifier::{ClassificationOutcome, EmergencyNotice, GuidanceBundle, SeverityMarker},
    constants::{
        BORDERLINE_MAX_MG_DL, DATETIME_FORMAT, DISCLAIMER, LOW_BELOW_MG_DL, NORMAL_MAX_MG_DL,
    },
    DeltaInsight, Direction, Reading, Submission, TrendColor, TrendPoint, ValidationError,
};

/// Columns used by trend bars
pub const CHART_WIDTH: usize = 40;

/// Timestamp format on the chart's time axis
const CHART_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn severity_marker(marker: SeverityMarker) -> &'static str {
    match marker {
        SeverityMarker::Red => "🔴",
        SeverityMarker::Yellow => "🟡",
        SeverityMarker::Green => "🟢",
    }
}

fn trend_marker(color: TrendColor) -> &'static str {
    match color {
        TrendColor::Red => "🔴",
        TrendColor::Orange => "🟠",
        TrendColor::Green => "🟢",
    }
}

/// Full result of one accepted submission
pub struct SubmissionView<'a>(pub &'a Submission);

impl fmt::Display for SubmissionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let submission = self.0;
        write!(f, "{}", OutcomeView::new(submission.reading.value, &submission.outcome))?;

        if let Some(e) = submission.persistence.error() {
            writeln!(f)?;
            writeln!(f, "⚠️  Reading computed but not saved: {}", e)?;
        }
        Ok(())
    }
}

/// Emergency notice or guidance bundle for one value
pub struct OutcomeView<'a> {
    value: u32,
    outcome: &'a ClassificationOutcome,
}

impl<'a> OutcomeView<'a> {
    pub fn new(value: u32, outcome: &'a ClassificationOutcome) -> Self {
        Self { value, outcome }
    }

    fn emergency(&self, f: &mut fmt::Formatter<'_>, notice: &EmergencyNotice) -> fmt::Result {
        writeln!(f, "🚨 {}", notice.kind.title())?;
        writeln!(f, "🔴 Sugar: {} mg/dL", self.value)?;
        writeln!(f)?;
        writeln!(f, "{}", notice.message)?;
        for action in notice.actions {
            writeln!(f, "  - {}", action)?;
        }
        Ok(())
    }

    fn guidance(&self, f: &mut fmt::Formatter<'_>, bundle: &GuidanceBundle) -> fmt::Result {
        writeln!(
            f,
            "{} Sugar Status: {}",
            severity_marker(bundle.severity_marker),
            bundle.status
        )?;
        writeln!(f, "Blood Sugar: {} mg/dL", self.value)?;

        writeln!(f)?;
        writeln!(f, "What This Means")?;
        writeln!(f, "  {}", bundle.meaning)?;

        writeln!(f)?;
        writeln!(f, "What to Eat Today")?;
        for item in bundle.diet_do {
            writeln!(f, "  ✅ {}", item)?;
        }
        for item in bundle.diet_avoid {
            writeln!(f, "  ❌ avoid {}", item)?;
        }

        writeln!(f)?;
        writeln!(f, "What Activity to Do")?;
        writeln!(f, "  {}", bundle.activity)?;

        writeln!(f)?;
        writeln!(f, "Today's Focus")?;
        writeln!(f, "  {}", bundle.focus)?;

        writeln!(f)?;
        writeln!(f, "⚠️  {}", DISCLAIMER)
    }
}

impl fmt::Display for OutcomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            ClassificationOutcome::Emergency(notice) => self.emergency(f, notice),
            ClassificationOutcome::Guidance(bundle) => self.guidance(f, bundle),
        }
    }
}

/// User-facing message for rejected input
pub struct InvalidInputView<'a>(pub &'a ValidationError);

impl fmt::Display for InvalidInputView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "❌ Invalid input")?;
        match self.0 {
            ValidationError::NonPositive { .. } => writeln!(
                f,
                "Blood sugar is never zero or negative. Enter the number shown on your meter."
            ),
            ValidationError::OutOfRange { value, min, max } => writeln!(
                f,
                "{} is outside the accepted range {}–{} mg/dL.",
                value, min, max
            ),
        }
    }
}

/// Input that is not a whole number at all
pub struct NotANumberView<'a>(pub &'a str);

impl fmt::Display for NotANumberView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "❌ Invalid input")?;
        writeln!(f, "{:?} is not a whole number. Enter the mg/dL value, e.g. 85.", self.0)
    }
}

/// Day-over-day comparison line
pub struct InsightView<'a>(pub &'a DeltaInsight);

impl fmt::Display for InsightView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            DeltaInsight::NoHistory => writeln!(f, "No readings recorded yet."),
            DeltaInsight::FirstEntry => {
                writeln!(f, "First reading recorded. Keep going to see your trend.")
            }
            DeltaInsight::Compared { direction: Direction::Same, .. } => {
                writeln!(f, "Same as your previous reading.")
            }
            DeltaInsight::Compared { direction, magnitude } => writeln!(
                f,
                "{} mg/dL {} than your previous reading.",
                magnitude, direction
            ),
        }
    }
}

/// Horizontal bar chart of recent readings
///
/// Bars are scaled to the largest value shown (at least a little past the
/// borderline edge so the normal band is always visible). Empty cells inside
/// the 70–100 band are shaded.
pub struct TrendView<'a> {
    points: &'a [TrendPoint],
    width: usize,
}

impl<'a> TrendView<'a> {
    pub fn new(points: &'a [TrendPoint]) -> Self {
        Self {
            points,
            width: CHART_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(10);
        self
    }

    fn scale_max(&self) -> u32 {
        self.points
            .iter()
            .map(|p| p.reading.value)
            .max()
            .unwrap_or(0)
            .max(BORDERLINE_MAX_MG_DL + 15)
    }

    /// Column index for a value, clamped to the chart
    fn column(&self, value: u32) -> usize {
        let scaled = u64::from(value) * self.width as u64 / u64::from(self.scale_max());
        (scaled as usize).min(self.width)
    }
}

impl fmt::Display for TrendView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.points.is_empty() {
            return writeln!(f, "No readings to chart yet.");
        }

        let band_start = self.column(LOW_BELOW_MG_DL);
        let band_end = self.column(NORMAL_MAX_MG_DL);
        let label_width = CHART_TIME_FORMAT.len() + 2;

        writeln!(f, "Last {} readings (mg/dL)", self.points.len())?;
        for point in self.points {
            let bar_len = self.column(point.reading.value);
            let row: String = (0..self.width)
                .map(|c| {
                    if c < bar_len {
                        '█'
                    } else if (band_start..band_end).contains(&c) {
                        '░'
                    } else {
                        ' '
                    }
                })
                .collect();

            writeln!(
                f,
                "{:<label_width$}│{}│ {:>3} {}",
                point.reading.timestamp.format(CHART_TIME_FORMAT).to_string(),
                row,
                point.reading.value,
                trend_marker(point.color),
            )?;
        }

        writeln!(f, "{:<label_width$}└{}┘", "", "─".repeat(self.width))?;

        let max_label = self.scale_max().to_string();
        writeln!(
            f,
            "{:<label_width$}0{}{}",
            "",
            " ".repeat((self.width + 1).saturating_sub(max_label.len())),
            max_label
        )?;
        writeln!(
            f,
            "{:<label_width$} {}^ normal range {}–{} mg/dL",
            "",
            " ".repeat(band_start),
            LOW_BELOW_MG_DL,
            NORMAL_MAX_MG_DL
        )
    }
}

/// Every stored reading, one per line
pub struct HistoryView<'a>(pub &'a [Reading]);

impl fmt::Display for HistoryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No readings recorded yet.");
        }
        for reading in self.0 {
            writeln!(
                f,
                "{}  {:>3} mg/dL  {}",
                reading.timestamp.format(DATETIME_FORMAT),
                reading.value,
                trend_marker(TrendColor::for_value(reading.value))
            )?;
        }
        Ok(())
    }
}

/// Machine-readable form of a submission
#[derive(Debug, Serialize)]
pub struct SubmissionReport<'a> {
    pub reading: &'a Reading,
    pub outcome: &'a ClassificationOutcome,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<DeltaInsight>,
    pub disclaimer: &'static str,
}

impl<'a> SubmissionReport<'a> {
    pub fn new(submission: &'a Submission, insight: Option<DeltaInsight>) -> Self {
        Self {
            reading: &submission.reading,
            outcome: &submission.outcome,
            saved: submission.persistence.is_saved(),
            save_error: submission.persistence.error().map(|e| e.to_string()),
            insight,
            disclaimer: DISCLAIMER,
        }
    }
}
