//! Tunable constants of the SM-2 scheduler.
//!
//! The defaults are the classic SuperMemo-2 values. A host application can load
//! an [`Sm2Config`] from its own settings file; any field left out keeps its default.

use crate::error::{Result, SchedulerError};
use crate::models::quality::MAX_QUALITY;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sm2Config {
    /// Ease factor assumed for items that have never been reviewed
    pub initial_ease_factor: f64,
    /// Floor the ease factor is never allowed to drop below
    pub minimum_ease_factor: f64,
    /// Lowest quality that counts as a successful recall
    pub success_threshold: u8,
    /// Interval in days after the first success in a streak
    pub first_interval: u32,
    /// Interval in days after the second success in a streak
    pub second_interval: u32,
    /// Interval in days after a lapse
    pub lapse_interval: u32,
}

impl Default for Sm2Config {
    fn default() -> Self {
        Self {
            initial_ease_factor: 2.5,
            minimum_ease_factor: 1.3,
            success_threshold: 3,
            first_interval: 1,
            second_interval: 6,
            lapse_interval: 1,
        }
    }
}

impl Sm2Config {
    pub fn validate(&self) -> Result<()> {
        if !self.minimum_ease_factor.is_finite() || self.minimum_ease_factor <= 0.0 {
            return Err(SchedulerError::InvalidConfig(format!(
                "minimum_ease_factor must be positive, got {}",
                self.minimum_ease_factor
            )));
        }
        if !self.initial_ease_factor.is_finite()
            || self.initial_ease_factor < self.minimum_ease_factor
        {
            return Err(SchedulerError::InvalidConfig(format!(
                "initial_ease_factor {} is below minimum_ease_factor {}",
                self.initial_ease_factor, self.minimum_ease_factor
            )));
        }
        if !(1..=MAX_QUALITY).contains(&self.success_threshold) {
            return Err(SchedulerError::InvalidConfig(format!(
                "success_threshold must be between 1 and {}, got {}",
                MAX_QUALITY, self.success_threshold
            )));
        }
        if self.first_interval == 0 || self.second_interval == 0 || self.lapse_interval == 0 {
            return Err(SchedulerError::InvalidConfig(
                "intervals must be at least one day".to_string(),
            ));
        }
        Ok(())
    }
}
