//! Validation errors for attendance records and configuration

use thiserror::Error;

/// Rejected inputs, caught before any solver runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Total classes conducted must be greater than zero")]
    ZeroTotalClasses,

    #[error("Classes attended ({attended}) cannot be greater than total classes conducted ({total})")]
    AttendedExceedsTotal { attended: u64, total: u64 },

    #[error("Required percentage must be between 0 and 100, got {0}")]
    RequiredPercentOutOfRange(f64),

    #[error("max_future_classes must be at least 1")]
    ZeroSearchCeiling,

    #[error("Series range must start at 1 or later and not end before it starts, got {start}..={end}")]
    EmptySeriesRange { start: u64, end: u64 },
}
