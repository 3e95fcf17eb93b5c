// Minimum consecutive classes needed to reach a target percentage
//
// Solves (a + x) / (t + x) >= R for the smallest integer x >= 0:
//
//     x >= (R * t - a) / (1 - R)        (valid for R < 1)
//
// The left side is monotone non-decreasing in x when R < 1, so ceil() of the
// real solution is the answer up to floating-point error in the division.
// That error grows with the solution itself once 1 - R is tiny, so the
// closed form only seeds a search over the monotone percentage check.

use super::{attendance_percent, meets_requirement};
use serde::{Deserialize, Serialize};

/// How many more classes must be attended
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassesNeeded {
    /// Attend this many consecutive classes (0 means the goal is already met)
    Count(u64),
    /// A 100% target cannot be reached once any class has been missed
    Unreachable,
}

impl ClassesNeeded {
    /// Class count, or `None` when unreachable
    pub fn count(self) -> Option<u64> {
        match self {
            ClassesNeeded::Count(n) => Some(n),
            ClassesNeeded::Unreachable => None,
        }
    }

    pub fn is_already_met(self) -> bool {
        self == ClassesNeeded::Count(0)
    }
}

/// Result of [`compute_min_additional`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryPlan {
    pub needed: ClassesNeeded,
    /// Attendance percentage right now
    pub current_percent: f64,
    /// Attendance percentage after attending `needed` classes
    /// (0.0 when unreachable)
    pub projected_percent: f64,
}

/// Minimum additional consecutive classes to reach `required_percent`
///
/// # Example
/// ```
/// use lifeline::solver::{compute_min_additional, ClassesNeeded};
///
/// let plan = compute_min_additional(10, 15, 75.0);
/// assert_eq!(plan.needed, ClassesNeeded::Count(5));
/// assert_eq!(plan.projected_percent, 75.0);
/// ```
pub fn compute_min_additional(
    classes_attended: u64,
    total_classes: u64,
    required_percent: f64,
) -> RecoveryPlan {
    let current_percent = attendance_percent(classes_attended, total_classes);

    if current_percent >= required_percent {
        return RecoveryPlan {
            needed: ClassesNeeded::Count(0),
            current_percent,
            projected_percent: current_percent,
        };
    }

    if required_percent == 100.0 {
        return RecoveryPlan {
            needed: ClassesNeeded::Unreachable,
            current_percent,
            projected_percent: 0.0,
        };
    }

    let ratio = required_percent / 100.0;
    let raw = (ratio * total_classes as f64 - classes_attended as f64) / (1.0 - ratio);
    let x = smallest_meeting(
        classes_attended,
        total_classes,
        required_percent,
        raw.ceil().max(1.0) as u64,
    );

    RecoveryPlan {
        needed: ClassesNeeded::Count(x),
        current_percent,
        projected_percent: attendance_percent(
            classes_attended.saturating_add(x),
            total_classes.saturating_add(x),
        ),
    }
}

/// Smallest `x` with `meets_requirement(a + x, t + x, required)`
///
/// `estimate` is the closed-form answer. The check is monotone in `x` and
/// false at `x = 0` (callers exit early otherwise), so the search keeps
/// `lo` failing and `hi` passing. It gallops up from the estimate when the
/// estimate falls short, then bisects. Saturated counts read as 100%, so the
/// gallop always stops.
fn smallest_meeting(
    classes_attended: u64,
    total_classes: u64,
    required_percent: f64,
    estimate: u64,
) -> u64 {
    let meets = |x: u64| {
        meets_requirement(
            classes_attended.saturating_add(x),
            total_classes.saturating_add(x),
            required_percent,
        )
    };

    let mut lo = 0;
    let mut hi = estimate.max(1);
    let mut step = 1u64;
    while !meets(hi) {
        lo = hi;
        hi = hi.saturating_add(step);
        step = step.saturating_mul(2);
    }

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if meets(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    hi
}
