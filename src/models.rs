//! Frontend Models
//!
//! Data structures matching backend entities and command results.

use serde::{Deserialize, Serialize};

/// Item category (matches backend wire names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    #[default]
    DailyTask,
    LongTermGoal,
    Exercise,
    Work,
    Weight,
    HomeRepair,
}

impl ItemType {
    /// Tab order
    pub const TABS: [ItemType; 6] = [
        ItemType::DailyTask,
        ItemType::Work,
        ItemType::HomeRepair,
        ItemType::Exercise,
        ItemType::Weight,
        ItemType::LongTermGoal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::DailyTask => "Daily",
            ItemType::LongTermGoal => "Long term",
            ItemType::Exercise => "Training",
            ItemType::Work => "Work",
            ItemType::Weight => "Weight",
            ItemType::HomeRepair => "Home repairs",
        }
    }

    /// CSS modifier for tab and button colors
    pub fn css(&self) -> &'static str {
        match self {
            ItemType::DailyTask => "daily",
            ItemType::LongTermGoal => "goal",
            ItemType::Exercise => "exercise",
            ItemType::Work => "work",
            ItemType::Weight => "weight",
            ItemType::HomeRepair => "repair",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ItemType::DailyTask => "What do you want to get done today?",
            ItemType::LongTermGoal => "Which big goal are you chasing?",
            ItemType::Exercise => "Exercise (e.g. Deadlift)",
            ItemType::Work => "New work task...",
            ItemType::Weight => "New health goal...",
            ItemType::HomeRepair => "What needs fixing at home?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Empty for rows added in the edit form; the backend assigns one
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub weight: f64,
    pub reps: f64,
}

/// Per-set form row, sent as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetInput {
    /// Id of the set being edited, empty for new rows
    #[serde(skip)]
    pub id: String,
    pub weight: String,
    pub reps: String,
}

impl SetInput {
    pub fn from_set(set: &ExerciseSet) -> Self {
        Self {
            id: set.id.clone(),
            weight: set.weight.to_string(),
            reps: set.reps.to_string(),
        }
    }

    /// Blank or unparsable fields become 0
    pub fn to_set(&self) -> ExerciseSet {
        ExerciseSet {
            id: self.id.clone(),
            weight: coerce_number(&self.weight),
            reps: coerce_number(&self.reps),
        }
    }
}

pub fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Grow or shrink set rows to `count`. New rows copy the last one.
pub fn resize_set_rows(rows: &mut Vec<SetInput>, count: usize) {
    if count < rows.len() {
        rows.truncate(count);
        return;
    }
    while rows.len() < count {
        let next = rows
            .last()
            .map(|last| SetInput { id: String::new(), ..last.clone() })
            .unwrap_or_default();
        rows.push(next);
    }
}

/// Item data structure (matches backend persisted shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_sets: Option<Vec<ExerciseSet>>,
}

impl Item {
    /// Detailed sets, if this item has any
    pub fn detailed(&self) -> &[ExerciseSet] {
        self.detailed_sets.as_deref().unwrap_or_default()
    }

    /// Short "4 × 24kg × 10" style summary for exercise rows
    pub fn exercise_summary(&self) -> Option<String> {
        if self.item_type != ItemType::Exercise {
            return None;
        }
        let sets = self.detailed();
        if let Some(first) = sets.first() {
            let uniform = sets.iter().all(|s| s.weight == first.weight && s.reps == first.reps);
            return Some(if uniform {
                format!("{} × {}kg × {}", sets.len(), first.weight, first.reps)
            } else {
                sets.iter()
                    .map(|s| format!("{}kg×{}", s.weight, s.reps))
                    .collect::<Vec<_>>()
                    .join(" · ")
            });
        }
        match (self.sets, self.weight, self.reps) {
            (Some(n), Some(w), Some(r)) if n > 0.0 => Some(format!("{} × {}kg × {}", n, w, r)),
            (_, Some(w), _) => Some(format!("{}kg", w)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Staleness {
    Fresh,
    Aging,
    Overdue,
    Critical,
}

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
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Neutral => "accent-neutral",
            Accent::Indigo => "accent-indigo",
            Accent::Orange => "accent-orange",
            Accent::Sky => "accent-sky",
            Accent::Rose => "accent-rose",
            Accent::Purple => "accent-purple",
        }
    }
}

/// Item with read-time presentation facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub item: Item,
    pub age_days: i64,
    pub staleness: Staleness,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Applause,
    Celebration,
    Chime,
    Success,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggled {
    pub item: Item,
    pub cue: Option<Cue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: String,
    pub date: i64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecorded {
    pub entry: WeightEntry,
    pub cue: Option<Cue>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightTrend {
    pub points: Vec<WeightEntry>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub first_date: Option<i64>,
    pub last_date: Option<i64>,
    pub change_since_start: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub item_type: ItemType,
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dashboard {
    pub categories: Vec<CategoryProgress>,
    pub daily: Progress,
    pub goals: Progress,
    pub total_volume: f64,
    pub current_weight: f64,
    pub start_weight: f64,
    pub weight_change: f64,
    pub body_scale: f64,
}

impl Dashboard {
    pub fn category(&self, item_type: ItemType) -> Progress {
        self.categories
            .iter()
            .find(|c| c.item_type == item_type)
            .map(|c| c.progress)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    pub tasks: Vec<String>,
    pub motivation: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    pub initial_weight: f64,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub seed_defaults: bool,
}

/// Partial settings update
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_defaults: Option<bool>,
}
