//! JSON output format for attendance reports
//!
//! `--format json` implementation

use crate::report::{AttendanceReport, Comparison};
use crate::solver::{ClassesNeeded, MissableOutcome, SeriesPoint};
use serde::{Deserialize, Serialize};

/// Echo of the validated input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonInput {
    pub classes_attended: u64,
    pub total_classes: u64,
    pub required_percent: f64,
}

/// Minimum-classes result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPlan {
    /// Classes to attend; `null` when the target is unreachable
    pub min_additional: Option<u64>,
    pub unreachable: bool,
    pub already_met: bool,
    pub projected_percent: f64,
}

/// Missable-class search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonMissable {
    pub found: bool,
    pub max_missable: u64,
    /// Smallest window with affordable misses (0 when not found)
    pub future_window: u64,
    /// Search ceiling used
    pub max_future_classes: u64,
}

/// A point of the missable series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSeriesPoint {
    pub window: u64,
    pub missable: u64,
}

/// Chart data: current attendance vs target, capped at 100
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonComparison {
    pub current_percent: f64,
    pub required_percent: f64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub input: JsonInput,
    pub current_percent: f64,
    pub plan: JsonPlan,
    pub missable: JsonMissable,
    pub comparison: JsonComparison,
    pub series: Vec<JsonSeriesPoint>,
}

impl JsonOutput {
    /// Convert a report into the JSON layout
    pub fn from_report(report: &AttendanceReport) -> Self {
        let (max_missable, future_window) = report.missable.as_pair();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "lifeline-json-v1".to_string(),
            input: JsonInput {
                classes_attended: report.record.classes_attended(),
                total_classes: report.record.total_classes(),
                required_percent: report.record.required_percent(),
            },
            current_percent: report.plan.current_percent,
            plan: JsonPlan {
                min_additional: report.plan.needed.count(),
                unreachable: report.plan.needed == ClassesNeeded::Unreachable,
                already_met: report.plan.needed.is_already_met(),
                projected_percent: report.plan.projected_percent,
            },
            missable: JsonMissable {
                found: matches!(report.missable, MissableOutcome::Found { .. }),
                max_missable,
                future_window,
                max_future_classes: report.max_future_classes,
            },
            comparison: JsonComparison::from(report.comparison),
            series: report.series.iter().map(JsonSeriesPoint::from).collect(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Comparison> for JsonComparison {
    fn from(comparison: Comparison) -> Self {
        Self {
            current_percent: comparison.current_percent,
            required_percent: comparison.required_percent,
        }
    }
}

impl From<&SeriesPoint> for JsonSeriesPoint {
    fn from(point: &SeriesPoint) -> Self {
        Self {
            window: point.window,
            missable: point.missable,
        }
    }
}
