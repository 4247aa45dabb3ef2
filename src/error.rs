//! Error types for the scheduler.

/// Errors returned when a review cannot be scheduled.
///
/// Every variant is raised before any new state is computed, so a caller that
/// receives one must leave the stored item record untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchedulerError {
    /// Quality grade outside 0..=5
    #[error("Invalid quality {0}: expected a value between 0 and 5")]
    InvalidQuality(u8),
    /// Coarse rating not in {easy, medium, hard} (strict parsing only)
    #[error("Unrecognized difficulty rating: {0}")]
    UnrecognizedRating(String),
    /// Stored ease factor is not finite or sits below the floor
    #[error("Invalid ease factor: {0}")]
    InvalidEaseFactor(f64),
    /// Next interval does not fit in a day count
    #[error("Interval overflow: {interval} days x {ease_factor}")]
    IntervalOverflow { interval: u32, ease_factor: f64 },
    /// Next review date is not representable
    #[error("Next review date out of range ({interval} days ahead)")]
    DateOutOfRange { interval: u32 },
    /// Scheduler configuration failed validation
    #[error("Invalid scheduler configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
