pub mod difficulty;
pub mod learning_item_state;
pub mod quality;
pub mod review;
pub mod sm2;

pub use difficulty::{Difficulty, difficulty_to_quality};
pub use learning_item_state::{LearningItemState, SchedulingFields};
pub use quality::Quality;
pub use review::{ReviewOutcome, record_review};
pub use sm2::{Sm2Scheduler, schedule_next};
