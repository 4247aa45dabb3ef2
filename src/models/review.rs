//! Recording a graded review onto an item's scheduling state.
//!
//! This is the boundary the session layer calls once per graded card: it turns the
//! learner's coarse rating into a quality grade, runs the scheduler and stamps the
//! review time. Persisting the returned state is left to the caller.

use super::{Difficulty, LearningItemState, Quality, Sm2Scheduler, difficulty_to_quality};
use crate::error::Result;
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewOutcome {
    /// New state to write back onto the item record
    pub state: LearningItemState,
    pub quality: Quality,
    /// `None` when the rating was outside the known vocabulary
    pub difficulty: Option<Difficulty>,
    /// Whether the grade reached the success threshold (card learned for this round)
    pub passed: bool,
}

/// Grades a card with a coarse rating completed at `completed_at`.
pub fn record_review(
    scheduler: &Sm2Scheduler,
    state: &LearningItemState,
    rating: &str,
    completed_at: DateTime<Utc>,
) -> Result<ReviewOutcome> {
    let difficulty = rating.parse::<Difficulty>().ok();
    let quality = difficulty_to_quality(rating);

    let mut new_state = scheduler.schedule(state, quality, completed_at)?;
    new_state.last_reviewed_at = Some(completed_at);

    let passed = quality.is_passing(scheduler.config().success_threshold);

    tracing::debug!(
        rating,
        quality = quality.value(),
        passed,
        interval = ?new_state.interval,
        "Recorded review"
    );

    Ok(ReviewOutcome {
        state: new_state,
        quality,
        difficulty,
        passed,
    })
}
