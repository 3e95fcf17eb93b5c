//! Calculator configuration and lifeline.toml loading
//!
//! Defaults match the calculator's original form: a 75% requirement, a
//! 50-class search ceiling for the missable search, and a 30-window chart.
//!
//! # Example lifeline.toml
//!
//! ```toml
//! required_percent = 80.0
//! max_future_classes = 40
//!
//! [series]
//! start = 1
//! end = 20
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use crate::error::ValidationError;
use crate::record::validate_required_percent;
use crate::solver::DEFAULT_MAX_FUTURE_CLASSES;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Default attendance requirement, in percent
pub const DEFAULT_REQUIRED_PERCENT: f64 = 75.0;

/// Default last window of the missable series
pub const DEFAULT_SERIES_END: u64 = 30;

/// Window sizes evaluated for the missable series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    pub start: u64,
    pub end: u64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            start: 1,
            end: DEFAULT_SERIES_END,
        }
    }
}

impl SeriesConfig {
    pub fn windows(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }

    pub fn is_empty(&self) -> bool {
        self.windows().is_empty()
    }
}

/// Settings shared by every calculation in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifelineConfig {
    /// Target attendance percentage used when none is given on the command line
    pub required_percent: f64,

    /// Largest planning window the missable search will try
    pub max_future_classes: u64,

    /// Windows plotted in the missable series
    pub series: SeriesConfig,
}

impl Default for LifelineConfig {
    fn default() -> Self {
        Self {
            required_percent: DEFAULT_REQUIRED_PERCENT,
            max_future_classes: DEFAULT_MAX_FUTURE_CLASSES,
            series: SeriesConfig::default(),
        }
    }
}

impl LifelineConfig {
    /// Load configuration from a TOML file
    ///
    /// ```no_run
    /// use lifeline::config::LifelineConfig;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = LifelineConfig::from_file("lifeline.toml")?;
    /// println!("Target: {}%", config.required_percent);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(
        mut self,
        required_percent: Option<f64>,
        max_future_classes: Option<u64>,
        series_end: Option<u64>,
    ) -> Self {
        if let Some(required) = required_percent {
            self.required_percent = required;
        }
        if let Some(ceiling) = max_future_classes {
            self.max_future_classes = ceiling;
        }
        if let Some(end) = series_end {
            self.series.end = end;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required_percent(self.required_percent)?;

        if self.max_future_classes == 0 {
            return Err(ValidationError::ZeroSearchCeiling);
        }

        if self.series.start == 0 || self.series.is_empty() {
            return Err(ValidationError::EmptySeriesRange {
                start: self.series.start,
                end: self.series.end,
            });
        }

        Ok(())
    }
}
