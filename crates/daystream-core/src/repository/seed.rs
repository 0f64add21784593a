//! First-run data
//!
//! Used only when a storage key has never been written.

use crate::domain::{ExerciseLog, ExerciseSet, Item, ItemType, Priority, WeightEntry};

/// Id of the seeded starting measurement
pub const INITIAL_ENTRY_ID: &str = "init-1";

pub fn welcome_items(now: i64) -> Vec<Item> {
    let mut goal = Item::new(ItemType::LongTermGoal, "Learn advanced React".to_string(), now);
    goal.description = Some("Finish the hooks and design patterns course.".to_string());
    goal.priority = Some(Priority::High);

    let water = Item::new(ItemType::DailyTask, "Drink 2 litres of water".to_string(), now);

    let mut press = Item::new(ItemType::Exercise, "Dumbbell press".to_string(), now);
    press.exercise = Some(ExerciseLog::Detailed(
        (0..4).map(|_| ExerciseSet::new(24.0, 10.0)).collect(),
    ));

    vec![goal, water, press]
}

pub fn initial_history(now: i64, initial_weight: f64) -> Vec<WeightEntry> {
    vec![WeightEntry {
        id: INITIAL_ENTRY_ID.to_string(),
        date: now,
        weight: initial_weight,
    }]
}
