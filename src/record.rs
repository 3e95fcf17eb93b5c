//! Validated attendance input
//!
//! The solver trusts its arguments. `AttendanceRecord` is the gate the
//! command line (or any other front end) passes raw numbers through first.

use crate::error::ValidationError;
use crate::solver::{self, MissableOutcome, RecoveryPlan, SeriesPoint};
use serde::Serialize;

/// Attendance counts and the percentage the student must keep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttendanceRecord {
    classes_attended: u64,
    total_classes: u64,
    required_percent: f64,
}

impl AttendanceRecord {
    /// Validate and build a record
    ///
    /// # Example
    /// ```
    /// use lifeline::record::AttendanceRecord;
    ///
    /// let record = AttendanceRecord::new(10, 15, 75.0).unwrap();
    /// assert_eq!(record.total_classes(), 15);
    /// assert!(AttendanceRecord::new(16, 15, 75.0).is_err());
    /// ```
    pub fn new(
        classes_attended: u64,
        total_classes: u64,
        required_percent: f64,
    ) -> Result<Self, ValidationError> {
        if total_classes == 0 {
            return Err(ValidationError::ZeroTotalClasses);
        }
        if classes_attended > total_classes {
            return Err(ValidationError::AttendedExceedsTotal {
                attended: classes_attended,
                total: total_classes,
            });
        }
        validate_required_percent(required_percent)?;

        Ok(Self {
            classes_attended,
            total_classes,
            required_percent,
        })
    }

    pub fn classes_attended(&self) -> u64 {
        self.classes_attended
    }

    pub fn total_classes(&self) -> u64 {
        self.total_classes
    }

    pub fn required_percent(&self) -> f64 {
        self.required_percent
    }

    pub fn min_additional(&self) -> RecoveryPlan {
        solver::compute_min_additional(
            self.classes_attended,
            self.total_classes,
            self.required_percent,
        )
    }

    pub fn max_missable(&self, max_future_classes: u64) -> MissableOutcome {
        solver::compute_max_missable(
            self.classes_attended,
            self.total_classes,
            self.required_percent,
            max_future_classes,
        )
    }

    pub fn missable_series<I>(&self, windows: I) -> Vec<SeriesPoint>
    where
        I: IntoIterator<Item = u64>,
    {
        solver::compute_missable_series(
            self.classes_attended,
            self.total_classes,
            self.required_percent,
            windows,
        )
    }
}

/// Reject NaN and anything outside `[0, 100]`
pub fn validate_required_percent(required_percent: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&required_percent) {
        Ok(())
    } else {
        Err(ValidationError::RequiredPercentOutOfRange(required_percent))
    }
}
