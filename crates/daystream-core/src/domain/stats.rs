//! Derived Statistics
//!
//! Pure functions over the item and weight collections. Nothing here is
//! cached; callers recompute on every read.

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemType};
use super::weight::WeightEntry;

/// Rounded completion percentage; 0 for an empty category
pub fn progress(total: usize, completed: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}

/// Total weight × reps over completed exercises
pub fn total_volume_lifted<'a>(items: impl IntoIterator<Item = &'a Item>) -> f64 {
    items.into_iter().map(Item::volume).fold(0.0, |acc, v| acc + v)
}

/// Weight of the most recent measurement, or `default` for an empty history.
///
/// Ties on `date` resolve to the entry stored first.
pub fn current_weight(entries: &[WeightEntry], default: f64) -> f64 {
    latest_entry(entries).map(|e| e.weight).unwrap_or(default)
}

pub fn latest_entry(entries: &[WeightEntry]) -> Option<&WeightEntry> {
    entries.iter().fold(None, |best: Option<&WeightEntry>, e| match best {
        Some(b) if b.date >= e.date => Some(b),
        _ => Some(e),
    })
}

/// Completed/total counts with the rounded percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    pub percent: u32,
}

impl Progress {
    pub fn new(total: usize, completed: usize) -> Self {
        Self {
            total,
            completed,
            percent: progress(total, completed),
        }
    }

    fn of<'a>(items: impl Iterator<Item = &'a Item>) -> Self {
        let (total, completed) = items.fold((0, 0), |(t, c), i| (t + 1, c + usize::from(i.is_completed)));
        Self::new(total, completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub item_type: ItemType,
    pub progress: Progress,
}

/// Dashboard summary shown above the lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub categories: Vec<CategoryProgress>,
    /// All categories except long-term goals, summed together
    pub daily: Progress,
    pub goals: Progress,
    pub total_volume: f64,
    pub current_weight: f64,
    pub start_weight: f64,
    /// Current weight minus starting weight
    pub weight_change: f64,
    /// Width factor of the body silhouette
    pub body_scale: f64,
}

impl Dashboard {
    pub fn compute(items: &[Item], weights: &[WeightEntry], start_weight: f64) -> Self {
        let categories = ItemType::ALL
            .into_iter()
            .map(|t| CategoryProgress {
                item_type: t,
                progress: Progress::of(items.iter().filter(|i| i.item_type == t)),
            })
            .collect();
        let current = current_weight(weights, start_weight);

        Self {
            categories,
            daily: Progress::of(items.iter().filter(|i| !i.item_type.is_goal())),
            goals: Progress::of(items.iter().filter(|i| i.item_type.is_goal())),
            total_volume: total_volume_lifted(items),
            current_weight: current,
            start_weight,
            weight_change: current - start_weight,
            body_scale: body_scale(current, start_weight),
        }
    }

    pub fn category(&self, item_type: ItemType) -> Progress {
        self.categories
            .iter()
            .find(|c| c.item_type == item_type)
            .map(|c| c.progress)
            .unwrap_or_default()
    }
}

/// Chronological weight series for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    /// Entries sorted by date, oldest first
    pub points: Vec<WeightEntry>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub first_date: Option<i64>,
    pub last_date: Option<i64>,
    /// Latest weight minus the starting weight
    pub change_since_start: Option<f64>,
}

impl WeightTrend {
    pub fn from_entries(entries: &[WeightEntry], start_weight: f64) -> Self {
        let mut points = entries.to_vec();
        points.sort_by_key(|e| e.date);

        let min_weight = points.iter().map(|e| e.weight).reduce(f64::min);
        let max_weight = points.iter().map(|e| e.weight).reduce(f64::max);

        Self {
            first_date: points.first().map(|e| e.date),
            last_date: points.last().map(|e| e.date),
            change_since_start: latest_entry(entries).map(|e| e.weight - start_weight),
            points,
            min_weight,
            max_weight,
        }
    }

    /// A line needs at least two measurements
    pub fn is_chartable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Horizontal scale of the body silhouette: 1.5% per kilogram away from the
/// starting weight, clamped to [0.7, 1.5].
pub fn body_scale(current: f64, start: f64) -> f64 {
    (1.0 + (current - start) * 0.015).clamp(0.7, 1.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::{ExerciseLog, SetInput};

    fn entry(date: i64, weight: f64) -> WeightEntry {
        WeightEntry { id: format!("w{}", date), date, weight }
    }

    fn completed(mut item: Item) -> Item {
        item.is_completed = true;
        item
    }

    #[test]
    fn test_progress_rounding() {
        assert_eq!(progress(0, 0), 0);
        assert_eq!(progress(4, 2), 50);
        assert_eq!(progress(3, 1), 33);
        assert_eq!(progress(3, 2), 67);
        assert_eq!(progress(2, 2), 100);
    }

    #[test]
    fn test_volume_counts_only_completed_exercises() {
        let sets = vec![SetInput::new("24", "10"); 4];
        let done = completed(Item::new_exercise("Press".to_string(), &sets, 0));
        let pending = Item::new_exercise("Press".to_string(), &sets, 0);
        let mut legacy = completed(Item::new(ItemType::Exercise, "Bench".to_string(), 0));
        legacy.exercise = Some(ExerciseLog::Legacy { weight: Some(20.0), reps: Some(8.0), sets: Some(3) });
        let mut weight_only = completed(Item::new(ItemType::Exercise, "Curl".to_string(), 0));
        weight_only.exercise = Some(ExerciseLog::Legacy { weight: Some(20.0), reps: None, sets: None });
        let task = completed(Item::new(ItemType::DailyTask, "Walk".to_string(), 0));

        assert_eq!(total_volume_lifted([&done]), 960.0);
        assert_eq!(total_volume_lifted([&pending]), 0.0);
        assert_eq!(total_volume_lifted([&legacy]), 480.0);
        assert_eq!(total_volume_lifted([&weight_only]), 20.0);
        assert_eq!(
            total_volume_lifted([&done, &pending, &legacy, &weight_only, &task]),
            1460.0
        );
    }

    #[test]
    fn test_empty_volume_is_positive_zero() {
        let no_sets = completed(Item::new_exercise("Plank".to_string(), &[], 0));
        assert!(total_volume_lifted([&no_sets]).is_sign_positive());

        let dash = Dashboard::compute(&[], &[], 88.5);
        assert!(dash.total_volume.is_sign_positive());
        assert_eq!(serde_json::to_string(&dash.total_volume).unwrap(), "0.0");
    }

    #[test]
    fn test_current_weight_uses_latest_date() {
        let entries = vec![entry(100, 80.0), entry(300, 78.0)];
        assert_eq!(current_weight(&entries, 88.5), 78.0);
        let reversed = vec![entry(300, 78.0), entry(100, 80.0)];
        assert_eq!(current_weight(&reversed, 88.5), 78.0);
    }

    #[test]
    fn test_current_weight_tie_prefers_first_stored() {
        let entries = vec![entry(100, 80.0), WeightEntry { id: "b".into(), date: 100, weight: 81.0 }];
        assert_eq!(current_weight(&entries, 0.0), 80.0);
    }

    #[test]
    fn test_current_weight_default_when_empty() {
        assert_eq!(current_weight(&[], 88.5), 88.5);
    }

    #[test]
    fn test_dashboard_separates_goals_from_daily() {
        let items = vec![
            completed(Item::new(ItemType::DailyTask, "a".into(), 0)),
            Item::new(ItemType::Work, "b".into(), 0),
            completed(Item::new(ItemType::HomeRepair, "c".into(), 0)),
            Item::new(ItemType::Weight, "d".into(), 0),
            completed(Item::new(ItemType::LongTermGoal, "e".into(), 0)),
            Item::new(ItemType::LongTermGoal, "f".into(), 0),
        ];
        let dash = Dashboard::compute(&items, &[entry(1, 86.0)], 88.5);

        assert_eq!(dash.daily, Progress { total: 4, completed: 2, percent: 50 });
        assert_eq!(dash.goals, Progress { total: 2, completed: 1, percent: 50 });
        assert_eq!(dash.category(ItemType::Work), Progress { total: 1, completed: 0, percent: 0 });
        assert_eq!(dash.category(ItemType::Exercise), Progress::default());
        assert_eq!(dash.current_weight, 86.0);
        assert_eq!(dash.weight_change, 86.0 - 88.5);
        assert_eq!(dash.body_scale, body_scale(86.0, 88.5));
    }

    #[test]
    fn test_trend_sorts_and_bounds() {
        let trend = WeightTrend::from_entries(&[entry(300, 78.0), entry(100, 80.0), entry(200, 81.0)], 80.0);
        let dates: Vec<i64> = trend.points.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![100, 200, 300]);
        assert_eq!(trend.min_weight, Some(78.0));
        assert_eq!(trend.max_weight, Some(81.0));
        assert_eq!((trend.first_date, trend.last_date), (Some(100), Some(300)));
        assert_eq!(trend.change_since_start, Some(-2.0));
        assert!(trend.is_chartable());
        assert!(!WeightTrend::from_entries(&[entry(1, 80.0)], 80.0).is_chartable());
        assert_eq!(WeightTrend::from_entries(&[], 80.0).change_since_start, None);
    }

    #[test]
    fn test_body_scale_is_clamped() {
        assert_eq!(body_scale(88.5, 88.5), 1.0);
        assert!((body_scale(98.5, 88.5) - 1.15).abs() < 1e-9);
        assert_eq!(body_scale(10.0, 88.5), 0.7);
        assert_eq!(body_scale(200.0, 88.5), 1.5);
    }
}
