pub mod config;
pub mod error;
pub mod models;

pub use config::Sm2Config;
pub use error::{Result, SchedulerError};
pub use models::{
    Difficulty, LearningItemState, Quality, ReviewOutcome, Sm2Scheduler, difficulty_to_quality,
    record_review, schedule_next,
};
