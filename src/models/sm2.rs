//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates review intervals based on recall quality:
//! - Each card has an easiness factor (EF) that is adjusted after every review,
//!   failed ones included, and never falls below 1.3
//! - Quality grades 0-2: the streak is lost, repetitions reset and the card comes back tomorrow
//! - Quality grades 3-5: the interval grows 1 day → 6 days → previous interval × EF
//! - The next review date is `now` plus the interval in calendar days

use super::{LearningItemState, Quality};
use crate::config::Sm2Config;
use crate::error::{Result, SchedulerError};
use chrono::{DateTime, Days, Utc};

/// SM-2 scheduler holding a validated configuration.
///
/// Stateless apart from its configuration, so one instance can be shared freely.
#[derive(Clone, Debug, Default)]
pub struct Sm2Scheduler {
    config: Sm2Config,
}

impl Sm2Scheduler {
    pub fn new(config: Sm2Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Sm2Config {
        &self.config
    }

    /// Computes the next scheduling state for a raw quality grade.
    /// quality: 0-5 (0 = complete blackout, 5 = perfect response); anything else is rejected.
    pub fn schedule_next(
        &self,
        state: &LearningItemState,
        quality: u8,
        now: DateTime<Utc>,
    ) -> Result<LearningItemState> {
        self.schedule(state, Quality::new(quality)?, now)
    }

    /// Computes the next scheduling state for a validated quality grade.
    ///
    /// `last_reviewed_at` is carried over unchanged; stamping it is the caller's job.
    pub fn schedule(
        &self,
        state: &LearningItemState,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> Result<LearningItemState> {
        let current = state.normalized(&self.config);

        if !current.ease_factor.is_finite()
            || current.ease_factor < self.config.minimum_ease_factor
        {
            return Err(SchedulerError::InvalidEaseFactor(current.ease_factor));
        }

        // Updated before branching, from the old value, for every grade
        let new_ef = self.next_ease_factor(current.ease_factor, quality);

        let (new_interval, new_repetitions) =
            if !quality.is_passing(self.config.success_threshold) {
                // Lapse: start from the beginning
                (self.config.lapse_interval, 0)
            } else {
                let new_reps = current.repetitions.saturating_add(1);
                let new_int = match new_reps {
                    1 => self.config.first_interval,
                    2 => self.config.second_interval,
                    _ => grow_interval(current.interval, new_ef)?,
                };
                (new_int, new_reps)
            };

        let next_review_at = now
            .checked_add_days(Days::new(u64::from(new_interval)))
            .ok_or(SchedulerError::DateOutOfRange {
                interval: new_interval,
            })?;

        tracing::debug!(
            quality = quality.value(),
            repetitions = current.repetitions,
            interval = current.interval,
            ease_factor = current.ease_factor,
            new_repetitions,
            new_interval,
            new_ease_factor = new_ef,
            %next_review_at,
            "Scheduled next review"
        );

        Ok(LearningItemState {
            repetitions: Some(new_repetitions),
            interval: Some(new_interval),
            ease_factor: Some(new_ef),
            last_reviewed_at: state.last_reviewed_at,
            next_review_at: Some(next_review_at),
        })
    }

    /// EF' = max(floor, EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)))
    fn next_ease_factor(&self, ease_factor: f64, quality: Quality) -> f64 {
        let d = quality.shortfall();
        let new_ef = ease_factor + (0.1 - d * (0.08 + d * 0.02));
        new_ef.max(self.config.minimum_ease_factor)
    }
}

/// Previous interval times the new ease factor, rounded half away from zero.
///
/// Never returns 0: a streak of three or more with a stored interval of 0 only
/// happens with hand-edited records, and such items are still pushed a day out.
fn grow_interval(interval: u32, ease_factor: f64) -> Result<u32> {
    let next = (f64::from(interval) * ease_factor).round();
    if next > f64::from(u32::MAX) {
        return Err(SchedulerError::IntervalOverflow {
            interval,
            ease_factor,
        });
    }
    Ok((next as u32).max(1))
}

/// Schedules a review with the default SM-2 configuration.
pub fn schedule_next(
    state: &LearningItemState,
    quality: u8,
    now: DateTime<Utc>,
) -> Result<LearningItemState> {
    Sm2Scheduler::default().schedule_next(state, quality, now)
}
