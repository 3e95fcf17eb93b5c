// Maximum classes that can be missed within a planning window
//
// Attending (x - m) of the next x classes keeps the target when
//
//     (a + x - m) / (t + x) >= R   <=>   m <= x - (R * (t + x) - a)
//
// The search walks windows 1..=ceiling and stops at the first one where the
// floored bound is non-negative. It does not look for the window with the
// most slack.

use serde::{Deserialize, Serialize};

/// Default search ceiling for [`compute_max_missable`]
pub const DEFAULT_MAX_FUTURE_CLASSES: u64 = 50;

/// Outcome of the missable-class search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MissableOutcome {
    /// Smallest window with affordable misses (possibly zero misses)
    Found { missable: u64, window: u64 },
    /// No window up to the search ceiling keeps the target
    NotFound,
}

impl MissableOutcome {
    /// Legacy `(max_missable, future_window)` pair; `NotFound` maps to `(0, 0)`
    pub fn as_pair(self) -> (u64, u64) {
        match self {
            MissableOutcome::Found { missable, window } => (missable, window),
            MissableOutcome::NotFound => (0, 0),
        }
    }

    /// Whether at least one class can be skipped in the found window
    pub fn has_slack(self) -> bool {
        matches!(self, MissableOutcome::Found { missable, .. } if missable > 0)
    }
}

/// Floored affordable misses for a single window of `window` classes
///
/// Negative when even perfect attendance over the window falls short.
pub fn missable_in_window(
    classes_attended: u64,
    total_classes: u64,
    required_percent: f64,
    window: u64,
) -> i64 {
    let ratio = required_percent / 100.0;
    let window_f = window as f64;
    let bound = window_f - (ratio * (total_classes as f64 + window_f) - classes_attended as f64);
    bound.floor() as i64
}

/// Smallest window in `1..=max_future_classes` where misses are affordable
///
/// # Example
/// ```
/// use lifeline::solver::{compute_max_missable, MissableOutcome};
///
/// let outcome = compute_max_missable(10, 15, 75.0, 50);
/// assert_eq!(outcome, MissableOutcome::Found { missable: 0, window: 5 });
/// ```
pub fn compute_max_missable(
    classes_attended: u64,
    total_classes: u64,
    required_percent: f64,
    max_future_classes: u64,
) -> MissableOutcome {
    (1..=max_future_classes)
        .find_map(|window| {
            let missable =
                missable_in_window(classes_attended, total_classes, required_percent, window);
            (missable >= 0).then_some(MissableOutcome::Found {
                missable: missable as u64,
                window,
            })
        })
        .unwrap_or(MissableOutcome::NotFound)
}
