// Attendance solver: closed-form and scanning arithmetic over class counts
//
// Every function here is pure. Inputs are assumed validated by the caller
// (see `crate::record::AttendanceRecord`); `total_classes == 0` or
// `classes_attended > total_classes` produce meaningless numbers, not errors.
//
// The three computations:
// - minimum consecutive classes to attend to reach the target
// - first planning window in which misses become affordable
// - affordable misses for each window in a requested range (chart data)

mod min_classes;
mod missable;
mod series;

pub use min_classes::{compute_min_additional, ClassesNeeded, RecoveryPlan};
pub use missable::{
    compute_max_missable, missable_in_window, MissableOutcome, DEFAULT_MAX_FUTURE_CLASSES,
};
pub use series::{compute_missable_series, SeriesPoint};

/// Attendance as a percentage (`attended / total * 100`)
///
/// Returns NaN when `total_classes` is zero.
pub fn attendance_percent(classes_attended: u64, total_classes: u64) -> f64 {
    classes_attended as f64 / total_classes as f64 * 100.0
}

/// Whether `attended / total` meets `required_percent`.
///
/// Uses the same percentage comparison as the early exit in
/// [`compute_min_additional`], so minimality checks agree with it.
pub fn meets_requirement(classes_attended: u64, total_classes: u64, required_percent: f64) -> bool {
    attendance_percent(classes_attended, total_classes) >= required_percent
}
