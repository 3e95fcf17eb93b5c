//! Attendance report: every calculation for one record, plus text rendering
//!
//! This is the presentation side of the calculator. It runs the solver,
//! keeps the chart data (current vs target, missable series) and turns the
//! outcomes into the action-plan messages shown to the student.

use crate::config::LifelineConfig;
use crate::record::AttendanceRecord;
use crate::solver::{ClassesNeeded, MissableOutcome, RecoveryPlan, SeriesPoint};
use serde::Serialize;

/// Current attendance next to the target, each capped at 100 for charting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub current_percent: f64,
    pub required_percent: f64,
}

impl Comparison {
    fn new(current_percent: f64, required_percent: f64) -> Self {
        Self {
            current_percent: current_percent.min(100.0),
            required_percent: required_percent.min(100.0),
        }
    }
}

/// All calculator outputs for a single attendance record
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceReport {
    pub record: AttendanceRecord,
    pub plan: RecoveryPlan,
    pub missable: MissableOutcome,
    pub max_future_classes: u64,
    pub comparison: Comparison,
    pub series: Vec<SeriesPoint>,
}

impl AttendanceReport {
    /// Run the three calculations for `record` using the windows in `config`
    pub fn build(record: &AttendanceRecord, config: &LifelineConfig) -> Self {
        let plan = record.min_additional();
        let missable = record.max_missable(config.max_future_classes);
        let series = record.missable_series(config.series.windows());

        tracing::debug!(
            attended = record.classes_attended(),
            total = record.total_classes(),
            required = record.required_percent(),
            needed = ?plan.needed,
            missable = ?missable,
            "attendance report built"
        );

        if config.series.end > config.max_future_classes {
            tracing::warn!(
                "Series extends to window {} beyond the search ceiling of {}",
                config.series.end,
                config.max_future_classes
            );
        }

        Self {
            record: *record,
            plan,
            missable,
            max_future_classes: config.max_future_classes,
            comparison: Comparison::new(plan.current_percent, record.required_percent()),
            series,
        }
    }

    /// One-line action plan for the minimum-classes result
    pub fn action_plan(&self) -> String {
        let required = self.record.required_percent();
        match self.plan.needed {
            ClassesNeeded::Count(0) => format!(
                "Great news! Your current attendance is {:.2}%, which already meets or exceeds the required {:.1}%.",
                self.plan.current_percent, required
            ),
            ClassesNeeded::Unreachable => format!(
                "IMPOSSIBLE: To achieve 100.00% attendance, you must have attended all classes conducted. \
                 Since your current attendance is {:.2}%, you cannot reach this target.",
                self.plan.current_percent
            ),
            ClassesNeeded::Count(n) => format!(
                "To reach the required {:.1}%, you must attend a minimum of {} consecutive additional {}. \
                 This will bring your attendance to {:.2}%.",
                required,
                n,
                if n == 1 { "class" } else { "classes" },
                self.plan.projected_percent
            ),
        }
    }

    /// Planning-ahead hint from the missable search
    pub fn planning_ahead(&self) -> String {
        match self.missable {
            MissableOutcome::Found { missable, window } if missable > 0 => format!(
                "Planning Ahead: If you attend the next {} classes, you can afford to miss up to {} of them \
                 and still maintain {:.1}% attendance.",
                window,
                missable,
                self.record.required_percent()
            ),
            _ => "Heads-up: For the next few classes, you'll need perfect attendance to reach your goal. \
                  No misses allowed yet!"
                .to_string(),
        }
    }

    /// Closed-form derivation behind the minimum-classes answer
    pub fn explanation(&self) -> String {
        let a = self.record.classes_attended();
        let t = self.record.total_classes();
        let ratio = self.record.required_percent() / 100.0;
        let mut out = String::new();

        out.push_str("How the math works:\n");
        out.push_str(&format!("  ({} + x) / ({} + x) >= {:.4}\n", a, t, ratio));
        if ratio < 1.0 {
            out.push_str(&format!(
                "  x >= ({:.4} * {} - {}) / (1 - {:.4}) = {:.4}\n",
                ratio,
                t,
                a,
                ratio,
                (ratio * t as f64 - a as f64) / (1.0 - ratio)
            ));
            out.push_str("  The answer is the smallest whole number x satisfying this.\n");
        } else {
            out.push_str("  With a 100% target this only holds when every class was attended.\n");
        }
        out
    }

    /// Human-readable report
    pub fn to_text(&self, explain: bool) -> String {
        let mut out = String::new();

        out.push_str("=== Attendance Lifeline ===\n");
        out.push_str(&format!(
            "Classes attended: {} of {} (required {:.1}%)\n",
            self.record.classes_attended(),
            self.record.total_classes(),
            self.record.required_percent()
        ));
        out.push_str(&format!(
            "Your Current Attendance: {:.2}%\n\n",
            self.plan.current_percent
        ));

        out.push_str("Action Plan\n");
        out.push_str("─────────────────────────────────────────\n");
        out.push_str(&format!("{}\n", self.action_plan()));
        out.push_str(&format!("{}\n\n", self.planning_ahead()));

        out.push_str("Current vs. Target\n");
        out.push_str("─────────────────────────────────────────\n");
        out.push_str(&format!(
            "  Current Attendance  {:>7.2}%\n",
            self.comparison.current_percent
        ));
        out.push_str(&format!(
            "  Required Target     {:>7.2}%\n\n",
            self.comparison.required_percent
        ));

        if !self.series.is_empty() {
            out.push_str("How Flexible Can You Be?\n");
            out.push_str("─────────────────────────────────────────\n");
            out.push_str(&format!("  {:>8}  {:>8}\n", "window", "missable"));
            for point in &self.series {
                out.push_str(&format!("  {:>8}  {:>8}\n", point.window, point.missable));
            }
            out.push_str("The more classes you commit to attending, the more flexibility you gain.\n");
        }

        if explain {
            out.push('\n');
            out.push_str(&self.explanation());
        }

        out
    }
}
