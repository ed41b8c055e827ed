//! Tracker configuration
//!
//! Settings come from three layers, later ones winning:
//! 1. Built-in defaults
//! 2. An optional JSON file (`--config`)
//! 3. Command-line flags and `GLUCOGUARD_HISTORY`
//!
//! ```json
//! {
//!   "history_path": "/home/me/.local/share/glucoguard/sugar_history.csv",
//!   "trend_window": 7,
//!   "show_trend": true
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use glucoguard_core::constants::{DEFAULT_HISTORY_FILE, DEFAULT_TREND_WINDOW};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Where the reading log lives
    pub history_path: PathBuf,
    /// Readings shown in the trend chart
    pub trend_window: usize,
    /// Render the trend chart after every submission
    pub show_trend: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
            trend_window: DEFAULT_TREND_WINDOW,
            show_trend: false,
        }
    }
}

impl TrackerConfig {
    /// Load from a JSON file. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of file settings
    pub fn with_overrides(
        mut self,
        history_path: Option<PathBuf>,
        trend_window: Option<usize>,
    ) -> Result<Self> {
        if let Some(path) = history_path {
            self.history_path = path;
        }
        if let Some(window) = trend_window {
            self.trend_window = window;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.trend_window == 0 {
            bail!("trend_window must be at least 1");
        }
        if self.history_path.as_os_str().is_empty() {
            bail!("history_path must not be empty");
        }
        Ok(())
    }
}
