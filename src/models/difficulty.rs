//! Coarse difficulty rating chosen by the learner after flipping a card,
//! and its mapping onto the SM-2 quality scale.
use super::Quality;
use crate::error::SchedulerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quality used for any rating outside the known vocabulary.
pub const FALLBACK_QUALITY: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn quality(self) -> Quality {
        let value = match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 3,
            Difficulty::Hard => 1,
        };
        Quality(value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Strict parsing; use [`difficulty_to_quality`] for the lenient mapping.
impl FromStr for Difficulty {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(SchedulerError::UnrecognizedRating(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a coarse rating to a quality grade.
///
/// Total over all strings: easy → 5, medium → 3, hard → 1, anything else → 3.
/// Unknown ratings are logged so newer rating vocabularies can be spotted upstream.
pub fn difficulty_to_quality(rating: &str) -> Quality {
    match rating.parse::<Difficulty>() {
        Ok(difficulty) => difficulty.quality(),
        Err(_) => {
            tracing::warn!(
                rating,
                fallback = FALLBACK_QUALITY,
                "Unrecognized difficulty rating, using fallback quality"
            );
            Quality(FALLBACK_QUALITY)
        }
    }
}
