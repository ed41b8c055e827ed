//! GlucoGuard command line
//!
//! Enter a morning reading, get today's guidance, see how it moved since
//! last time and where the week is heading.

mod config;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, warn, LevelFilter};

use glucoguard_core::{
    history::{CsvHistoryStore, HistoryStore},
    time::TimeSource,
    DeltaInsight, GlucoseTracker, Submission,
};

use crate::config::TrackerConfig;
use crate::render::{
    HistoryView, InsightView, InvalidInputView, NotANumberView, SubmissionReport, SubmissionView,
    TrendView,
};

/// Exit status for rejected readings
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "glucoguard", version, about = "Daily blood sugar guidance and trend")]
struct Cli {
    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// History log (overrides the config file)
    #[arg(long, global = true, env = "GLUCOGUARD_HISTORY")]
    history: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a morning reading and show today's guidance
    Submit {
        /// Blood sugar in mg/dL, e.g. 85, 110, 165
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Also draw the trend chart
        #[arg(long)]
        trend: bool,
    },
    /// Compare the latest reading with the one before it
    Insight,
    /// Chart the most recent readings
    Trend {
        /// Readings to include
        #[arg(long)]
        window: Option<usize>,
    },
    /// List every stored reading
    History,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<TrackerConfig> {
    let base = match &cli.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };
    let window = match &cli.command {
        Command::Trend { window } => *window,
        _ => None,
    };
    base.with_overrides(cli.history.clone(), window)
}

/// Open the log without failing: a broken location still gets guidance,
/// the submission will just report that it was not saved.
fn open_store(config: &TrackerConfig) -> CsvHistoryStore {
    let store = CsvHistoryStore::new(&config.history_path);
    if let Err(e) = store.init() {
        warn!("Cannot prepare history at {}: {}", config.history_path.display(), e);
    }
    store
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode JSON output")?;
    println!("{}", text);
    Ok(())
}

/// Text shown after an accepted submission
///
/// Delta and chart both read the log back, so they are skipped when the
/// reading was not saved. Guidance is always included.
fn submission_text<S: HistoryStore, C: TimeSource>(
    tracker: &GlucoseTracker<S, C>,
    submission: &Submission,
    insight: Option<&DeltaInsight>,
    show_trend: bool,
) -> Result<String> {
    let mut out = SubmissionView(submission).to_string();
    if let Some(insight) = insight {
        out.push('\n');
        out.push_str(&InsightView(insight).to_string());
    }
    if show_trend && submission.persistence.is_saved() {
        let points = tracker.trend().context("Failed to read history")?;
        out.push('\n');
        out.push_str(&TrendView::new(&points).to_string());
    }
    Ok(out)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    debug!("Using history at {}", config.history_path.display());

    let mut tracker = GlucoseTracker::builder(open_store(&config))
        .trend_window(config.trend_window)
        .build();

    match &cli.command {
        Command::Submit { value, trend } => {
            let raw: i64 = match value.trim().parse() {
                Ok(raw) => raw,
                Err(_) => {
                    if cli.json {
                        print_json(&serde_json::json!({ "error": "not a number", "input": value }))?;
                    } else {
                        print!("{}", NotANumberView(value));
                    }
                    return Ok(ExitCode::from(EXIT_INVALID_INPUT));
                }
            };

            let submission: Submission = match tracker.submit(raw) {
                Ok(submission) => submission,
                Err(e) => {
                    if cli.json {
                        print_json(&serde_json::json!({ "error": e.to_string(), "input": raw }))?;
                    } else {
                        print!("{}", InvalidInputView(&e));
                    }
                    return Ok(ExitCode::from(EXIT_INVALID_INPUT));
                }
            };

            // Insight only means something once the reading is in the log
            let insight = if submission.persistence.is_saved() {
                Some(tracker.insight().context("Failed to read history")?)
            } else {
                None
            };

            if cli.json {
                print_json(&SubmissionReport::new(&submission, insight))?;
                return Ok(ExitCode::SUCCESS);
            }

            let text = submission_text(
                &tracker,
                &submission,
                insight.as_ref(),
                *trend || config.show_trend,
            )?;
            print!("{}", text);
        }
        Command::Insight => {
            let insight = tracker.insight().context("Failed to read history")?;
            if cli.json {
                print_json(&insight)?;
            } else {
                print!("{}", InsightView(&insight));
            }
        }
        Command::Trend { .. } => {
            let points = tracker.trend().context("Failed to read history")?;
            if cli.json {
                print_json(&points)?;
            } else {
                print!("{}", TrendView::new(&points));
            }
        }
        Command::History => {
            let readings = tracker.history().context("Failed to read history")?;
            if cli.json {
                print_json(&readings)?;
            } else {
                print!("{}", HistoryView(&readings));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
