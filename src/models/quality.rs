//! Recall quality grade on the SM-2 0-5 scale.
use crate::error::{Result, SchedulerError};
use std::fmt;

pub const MAX_QUALITY: u8 = 5;

/// Validated quality grade: 0 = complete blackout, 5 = perfect response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(pub(crate) u8);

impl Quality {
    /// Rejects anything above 5 rather than clamping it.
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_QUALITY {
            return Err(SchedulerError::InvalidQuality(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_passing(self, threshold: u8) -> bool {
        self.0 >= threshold
    }

    /// Distance from a perfect grade, the `(5 - q)` term of the ease formula.
    pub(crate) fn shortfall(self) -> f64 {
        f64::from(MAX_QUALITY - self.0)
    }
}

impl TryFrom<u8> for Quality {
    type Error = SchedulerError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
