use chrono::{DateTime, TimeZone, Utc};
use flashcard_scheduler::{
    LearningItemState, SchedulerError, Sm2Scheduler, record_review, schedule_next,
};
use std::sync::Arc;
use std::thread;

fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap() + chrono::Days::new(u64::from(n))
}

#[test]
fn review_history_with_lapse_and_recovery() {
    let scheduler = Sm2Scheduler::default();
    let mut state = LearningItemState::new();

    let mut now = day(0);
    let mut intervals = Vec::new();
    for rating in ["easy", "easy", "medium", "hard", "easy", "easy", "easy"] {
        let outcome = record_review(&scheduler, &state, rating, now).unwrap();
        state = outcome.state;
        assert_eq!(state.last_reviewed_at, Some(now));

        now = state.next_review_at.unwrap();
        intervals.push(state.interval.unwrap());
    }

    // EF: 2.6, 2.7, 2.56, 2.02 (lapse), 2.12, 2.22, 2.32
    // third success uses 6 * 2.56; after the lapse the streak restarts at 1, 6
    assert_eq!(intervals, vec![1, 6, 15, 1, 1, 6, 14]);
    assert_eq!(state.repetitions, Some(3));
    assert!((state.ease_factor.unwrap() - 2.32).abs() < 1e-9);
}

#[test]
fn ease_factor_floor_holds_for_all_grades() {
    let mut ease = 1.3;
    while ease <= 3.0 {
        for quality in 0..=5 {
            let state = LearningItemState::with_fields(4, 20, ease);
            let next = schedule_next(&state, quality, day(0)).unwrap();
            assert!(next.ease_factor.unwrap() >= 1.3);
            assert!(next.interval.unwrap() >= 1);
        }
        ease += 0.05;
    }
}

#[test]
fn lapse_discards_any_streak() {
    for repetitions in [1, 2, 7, 100] {
        for quality in 0..3 {
            let state = LearningItemState::with_fields(repetitions, 90, 2.8);
            let next = schedule_next(&state, quality, day(0)).unwrap();
            assert_eq!(next.repetitions, Some(0));
            assert_eq!(next.interval, Some(1));
            assert_eq!(next.next_review_at, Some(day(1)));
        }
    }
}

#[test]
fn rejected_quality_computes_nothing() {
    let state = LearningItemState::with_fields(2, 6, 2.5);
    for quality in [6, 10, u8::MAX] {
        assert_eq!(
            schedule_next(&state, quality, day(0)),
            Err(SchedulerError::InvalidQuality(quality))
        );
    }
}

#[test]
fn scheduler_is_shareable_across_threads() {
    let scheduler = Arc::new(Sm2Scheduler::default());
    let expected = scheduler
        .schedule_next(&LearningItemState::with_fields(2, 6, 2.5), 4, day(0))
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scheduler = Arc::clone(&scheduler);
            thread::spawn(move || {
                scheduler
                    .schedule_next(&LearningItemState::with_fields(2, 6, 2.5), 4, day(0))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn stored_record_round_trips_through_scheduler() {
    let json = r#"{ "repetitions": 2, "interval": 6, "efactor": 2.5 }"#;
    let state: LearningItemState = serde_json::from_str(json).unwrap();

    let next = schedule_next(&state, 4, day(0)).unwrap();
    let value = serde_json::to_value(&next).unwrap();

    assert_eq!(value["repetitions"], 3);
    assert_eq!(value["interval"], 15);
    assert_eq!(value["nextReviewAt"], "2024-01-16T08:00:00Z");
}
