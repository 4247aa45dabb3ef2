//! Scheduling state stored on each flashcard.
use crate::config::Sm2Config;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persistent SM-2 fields for one learnable item.
///
/// Every field may be absent. Absent scheduling fields are read as their defaults
/// (see [`LearningItemState::normalized`]) each time the scheduler runs, so a freshly
/// created card and one with partially filled legacy data behave the same way.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItemState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, alias = "efactor", skip_serializing_if = "Option::is_none")]
    pub ease_factor: Option<f64>,
    #[serde(default, alias = "lastReviewed", skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "nextReviewDate", skip_serializing_if = "Option::is_none")]
    pub next_review_at: Option<DateTime<Utc>>,
}

/// Scheduling fields with defaults filled in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchedulingFields {
    pub repetitions: u32,
    pub interval: u32,
    pub ease_factor: f64,
}

impl LearningItemState {
    /// State of a never-reviewed item.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(repetitions: u32, interval: u32, ease_factor: f64) -> Self {
        Self {
            repetitions: Some(repetitions),
            interval: Some(interval),
            ease_factor: Some(ease_factor),
            ..Self::default()
        }
    }

    /// Substitutes defaults for absent fields: 0 repetitions, 0 days, initial ease.
    pub fn normalized(&self, config: &Sm2Config) -> SchedulingFields {
        SchedulingFields {
            repetitions: self.repetitions.unwrap_or(0),
            interval: self.interval.unwrap_or(0),
            ease_factor: self.ease_factor.unwrap_or(config.initial_ease_factor),
        }
    }

    /// An item with no scheduled date has never been reviewed and is due immediately.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at.is_none_or(|next| next <= now)
    }
}
