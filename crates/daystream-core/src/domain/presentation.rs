//! Presentation Rules
//!
//! Pure functions of item state and the current time: staleness levels,
//! category accents and which feedback cue an operation emits. Kept out of
//! the stores so they can be tested without any rendering layer.

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemType};
use super::time::age_in_days;
use super::weight::WeightSignal;

/// Age-based warning level for pending exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Staleness {
    Fresh,
    /// 3+ days old
    Aging,
    /// 5+ days old
    Overdue,
    /// 7+ days old
    Critical,
}

impl Staleness {
    pub fn from_age(days: i64) -> Self {
        match days {
            d if d >= 7 => Staleness::Critical,
            d if d >= 5 => Staleness::Overdue,
            d if d >= 3 => Staleness::Aging,
            _ => Staleness::Fresh,
        }
    }

    /// Only uncompleted exercises go stale
    pub fn of(item: &Item, now: i64) -> Self {
        if item.is_completed || !item.is_exercise() {
            return Staleness::Fresh;
        }
        Self::from_age(age_in_days(item.created_at, now))
    }
}

/// Category color family used by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Neutral,
    Indigo,
    Orange,
    Sky,
    Rose,
    Purple,
}

impl Accent {
    pub fn for_type(item_type: ItemType) -> Self {
        match item_type {
            ItemType::DailyTask => Accent::Neutral,
            ItemType::LongTermGoal => Accent::Indigo,
            ItemType::Exercise => Accent::Orange,
            ItemType::Work => Accent::Sky,
            ItemType::Weight => Accent::Rose,
            ItemType::HomeRepair => Accent::Purple,
        }
    }
}

/// Feedback notification emitted by a store operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    /// Completed a daily task, goal or health goal
    Applause,
    /// Completed an exercise
    Celebration,
    /// Completed a work or home-repair item
    Chime,
    /// Weight went down
    Success,
    /// Weight went up
    Alert,
}

impl Cue {
    pub fn for_completion(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Exercise => Cue::Celebration,
            ItemType::Work | ItemType::HomeRepair => Cue::Chime,
            _ => Cue::Applause,
        }
    }

    pub fn for_weight(signal: WeightSignal) -> Self {
        match signal {
            WeightSignal::Loss => Cue::Success,
            WeightSignal::Gain => Cue::Alert,
        }
    }
}

/// Item plus the read-time presentation facts the frontend needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub item: Item,
    pub age_days: i64,
    pub staleness: Staleness,
    pub accent: Accent,
}

impl ItemView {
    pub fn new(item: &Item, now: i64) -> Self {
        Self {
            age_days: age_in_days(item.created_at, now),
            staleness: Staleness::of(item, now),
            accent: Accent::for_type(item.item_type),
            item: item.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time::DAY_MS;

    #[test]
    fn test_staleness_thresholds() {
        assert_eq!(Staleness::from_age(0), Staleness::Fresh);
        assert_eq!(Staleness::from_age(2), Staleness::Fresh);
        assert_eq!(Staleness::from_age(3), Staleness::Aging);
        assert_eq!(Staleness::from_age(4), Staleness::Aging);
        assert_eq!(Staleness::from_age(5), Staleness::Overdue);
        assert_eq!(Staleness::from_age(6), Staleness::Overdue);
        assert_eq!(Staleness::from_age(7), Staleness::Critical);
        assert_eq!(Staleness::from_age(30), Staleness::Critical);
    }

    #[test]
    fn test_only_pending_exercises_go_stale() {
        let now = 10 * DAY_MS;
        let exercise = Item::new(ItemType::Exercise, "Squat".into(), 0);
        assert_eq!(Staleness::of(&exercise, now), Staleness::Critical);

        let mut done = exercise.clone();
        done.is_completed = true;
        assert_eq!(Staleness::of(&done, now), Staleness::Fresh);

        let task = Item::new(ItemType::DailyTask, "Read".into(), 0);
        assert_eq!(Staleness::of(&task, now), Staleness::Fresh);
    }

    #[test]
    fn test_completion_cues() {
        assert_eq!(Cue::for_completion(ItemType::DailyTask), Cue::Applause);
        assert_eq!(Cue::for_completion(ItemType::LongTermGoal), Cue::Applause);
        assert_eq!(Cue::for_completion(ItemType::Weight), Cue::Applause);
        assert_eq!(Cue::for_completion(ItemType::Exercise), Cue::Celebration);
        assert_eq!(Cue::for_completion(ItemType::Work), Cue::Chime);
        assert_eq!(Cue::for_completion(ItemType::HomeRepair), Cue::Chime);
    }

    #[test]
    fn test_weight_cues() {
        assert_eq!(Cue::for_weight(WeightSignal::Loss), Cue::Success);
        assert_eq!(Cue::for_weight(WeightSignal::Gain), Cue::Alert);
    }

    #[test]
    fn test_item_view() {
        let item = Item::new(ItemType::Exercise, "Row".into(), 0);
        let view = ItemView::new(&item, 4 * DAY_MS + 1);
        assert_eq!(view.age_days, 4);
        assert_eq!(view.staleness, Staleness::Aging);
        assert_eq!(view.accent, Accent::Orange);

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["accent"], "orange");
        assert_eq!(value["staleness"], "aging");
        assert_eq!(value["item"]["type"], "EXERCISE");
    }
}
