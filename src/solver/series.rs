// Missable-class series across planning windows (chart data)

use super::missable::missable_in_window;
use serde::{Deserialize, Serialize};

/// Affordable misses for one window size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub window: u64,
    pub missable: u64,
}

/// Evaluate every requested window, clipping negative bounds at zero
///
/// Returns exactly one point per window, in the order given.
pub fn compute_missable_series<I>(
    classes_attended: u64,
    total_classes: u64,
    required_percent: f64,
    windows: I,
) -> Vec<SeriesPoint>
where
    I: IntoIterator<Item = u64>,
{
    windows
        .into_iter()
        .map(|window| SeriesPoint {
            window,
            missable: missable_in_window(classes_attended, total_classes, required_percent, window)
                .max(0) as u64,
        })
        .collect()
}
