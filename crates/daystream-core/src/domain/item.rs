//! Item Entity
//!
//! A trackable task, goal, exercise, health goal, work item or home repair.
//!
//! Items are persisted in a flat camelCase record shape. Exercise data is
//! held in memory as an [`ExerciseLog`] and flattened back into the
//! `weight`/`reps`/`sets`/`detailedSets` fields on serialization.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{new_id, Entity};
use super::exercise::{ExerciseLog, ExerciseSet, SetInput};

/// Item category, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    #[default]
    DailyTask,
    LongTermGoal,
    Exercise,
    Work,
    /// Health/weight-control goal (not a weight measurement)
    Weight,
    HomeRepair,
}

impl ItemType {
    pub const ALL: [ItemType; 6] = [
        ItemType::DailyTask,
        ItemType::Work,
        ItemType::HomeRepair,
        ItemType::Exercise,
        ItemType::Weight,
        ItemType::LongTermGoal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::DailyTask => "DAILY_TASK",
            ItemType::LongTermGoal => "LONG_TERM_GOAL",
            ItemType::Exercise => "EXERCISE",
            ItemType::Work => "WORK",
            ItemType::Weight => "WEIGHT",
            ItemType::HomeRepair => "HOME_REPAIR",
        }
    }

    /// Long-term goals are tracked apart from the daily aggregate
    pub fn is_goal(&self) -> bool {
        matches!(self, ItemType::LongTermGoal)
    }
}

/// Informational priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A trackable record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    /// Unique identifier
    pub id: String,
    /// Display text
    pub title: String,
    /// Completion status
    pub is_completed: bool,
    /// Item category
    pub item_type: ItemType,
    /// Creation time (epoch millis)
    pub created_at: i64,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    /// Present for Exercise items
    pub exercise: Option<ExerciseLog>,
}

impl Item {
    /// Create a new, uncompleted item with default priority
    pub fn new(item_type: ItemType, title: String, created_at: i64) -> Self {
        let exercise = (item_type == ItemType::Exercise).then(ExerciseLog::default);
        Self {
            id: new_id(),
            title,
            is_completed: false,
            item_type,
            created_at,
            description: None,
            priority: Some(Priority::Medium),
            exercise,
        }
    }

    /// Create a new exercise with one detailed set per input row
    pub fn new_exercise(title: String, sets: &[SetInput], created_at: i64) -> Self {
        let mut item = Self::new(ItemType::Exercise, title, created_at);
        item.exercise = Some(ExerciseLog::from_inputs(sets));
        item
    }

    pub fn is_exercise(&self) -> bool {
        self.item_type == ItemType::Exercise
    }

    /// Lifted volume contributed by this item (completed exercises only)
    pub fn volume(&self) -> f64 {
        match (&self.exercise, self.is_exercise() && self.is_completed) {
            (Some(log), true) => log.volume(),
            _ => 0.0,
        }
    }
}

impl Entity for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Persisted item shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    id: String,
    title: String,
    #[serde(default)]
    is_completed: bool,
    #[serde(rename = "type")]
    item_type: ItemType,
    created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_count")]
    sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detailed_sets: Option<Vec<ExerciseSet>>,
}

/// Set counts were written by a JS number input and may carry a fraction
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map(|v| if v.is_finite() && v > 0.0 { v.trunc() as u32 } else { 0 }))
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let has_legacy = record.weight.is_some() || record.reps.is_some() || record.sets.is_some();
        let exercise = match record.detailed_sets {
            Some(sets) if !sets.is_empty() => Some(ExerciseLog::Detailed(sets)),
            _ if has_legacy => Some(ExerciseLog::Legacy {
                weight: record.weight,
                reps: record.reps,
                sets: record.sets,
            }),
            Some(_) => Some(ExerciseLog::Detailed(Vec::new())),
            None => None,
        };

        Item {
            id: record.id,
            title: record.title,
            is_completed: record.is_completed,
            item_type: record.item_type,
            created_at: record.created_at,
            description: record.description,
            priority: record.priority,
            exercise,
        }
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        let (weight, reps, sets, detailed_sets) = match item.exercise {
            None => (None, None, None, None),
            Some(ExerciseLog::Legacy { weight, reps, sets }) => (weight, reps, sets, None),
            Some(log @ ExerciseLog::Detailed(_)) => {
                let (w, r) = log.first_set();
                let count = log.set_count();
                let sets = match log {
                    ExerciseLog::Detailed(sets) => sets,
                    ExerciseLog::Legacy { .. } => Vec::new(),
                };
                (Some(w), Some(r), Some(count), Some(sets))
            }
        };

        ItemRecord {
            id: item.id,
            title: item.title,
            is_completed: item.is_completed,
            item_type: item.item_type,
            created_at: item.created_at,
            description: item.description,
            priority: item.priority,
            weight,
            reps,
            sets,
            detailed_sets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_creation() {
        let item = Item::new(ItemType::DailyTask, "Drink water".to_string(), 1_000);
        assert_eq!(item.id().len(), 36);
        assert_eq!(item.title, "Drink water");
        assert!(!item.is_completed);
        assert_eq!(item.priority, Some(Priority::Medium));
        assert!(item.exercise.is_none());
    }

    #[test]
    fn test_item_type_wire_names() {
        assert_eq!(serde_json::to_value(ItemType::HomeRepair).unwrap(), json!("HOME_REPAIR"));
        for t in ItemType::ALL {
            assert_eq!(serde_json::to_value(t).unwrap(), json!(t.as_str()));
        }
        assert!(serde_json::from_value::<ItemType>(json!("daily")).is_err());
    }

    #[test]
    fn test_detailed_exercise_serializes_mirrored_legacy_fields() {
        let item = Item::new_exercise(
            "Deadlift".to_string(),
            &[SetInput::new("100", "5"), SetInput::new("110", "3")],
            42,
        );
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], json!("EXERCISE"));
        assert_eq!(value["isCompleted"], json!(false));
        assert_eq!(value["createdAt"], json!(42));
        assert_eq!(value["weight"], json!(100.0));
        assert_eq!(value["reps"], json!(5.0));
        assert_eq!(value["sets"], json!(2));
        assert_eq!(value["detailedSets"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_legacy_record_loads_as_legacy_log() {
        let value = json!({
            "id": "old-1",
            "title": "Bench",
            "isCompleted": true,
            "type": "EXERCISE",
            "createdAt": 5,
            "weight": 20,
            "reps": 8,
            "sets": 3
        });
        let item: Item = serde_json::from_value(value).unwrap();
        assert_eq!(
            item.exercise,
            Some(ExerciseLog::Legacy { weight: Some(20.0), reps: Some(8.0), sets: Some(3) })
        );
        assert_eq!(item.volume(), 480.0);
        assert_eq!(item.priority, None);
    }

    #[test]
    fn test_empty_detailed_sets_fall_back_to_legacy_fields() {
        let value = json!({
            "id": "x",
            "title": "Row",
            "type": "EXERCISE",
            "createdAt": 0,
            "sets": 0,
            "detailedSets": []
        });
        let item: Item = serde_json::from_value(value).unwrap();
        assert!(item.exercise.as_ref().unwrap().is_legacy());
    }

    #[test]
    fn test_fractional_set_count_is_truncated() {
        let value = json!({
            "id": "x",
            "title": "Row",
            "type": "EXERCISE",
            "createdAt": 0,
            "weight": 10,
            "sets": 2.0
        });
        let item: Item = serde_json::from_value(value).unwrap();
        assert_eq!(item.exercise.unwrap().set_count(), 2);
    }

    #[test]
    fn test_plain_item_round_trips_without_exercise_fields() {
        let mut item = Item::new(ItemType::Work, "Report".to_string(), 7);
        item.description = Some("Q3".to_string());
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("detailedSets").is_none());
        assert!(value.get("weight").is_none());
        let back: Item = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_uncompleted_exercise_has_no_volume() {
        let item = Item::new_exercise("Press".to_string(), &[SetInput::new("24", "10")], 0);
        assert_eq!(item.volume(), 0.0);
    }
}
