//! Domain Layer
//!
//! Entities, derived statistics and presentation rules.
//! Nothing in this layer touches storage or the network.

mod entity;
mod exercise;
mod item;
mod presentation;
mod stats;
mod time;
mod weight;

pub use entity::{new_id, DomainError, DomainResult, Entity};
pub use exercise::{coerce_number, ExerciseLog, ExerciseSet, SetInput};
pub use item::{Item, ItemType, Priority};
pub use presentation::{Accent, Cue, ItemView, Staleness};
pub use stats::{
    body_scale, current_weight, latest_entry, progress, total_volume_lifted, CategoryProgress,
    Dashboard, Progress, WeightTrend,
};
pub use time::{age_in_days, now_millis, Clock, DAY_MS};
pub use weight::{parse_weight_input, WeightEntry, WeightSignal};
