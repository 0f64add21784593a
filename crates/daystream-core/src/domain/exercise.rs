//! Exercise Sets
//!
//! Exercise items carry either a legacy single-set summary (records created
//! before per-set tracking existed) or a list of detailed sets. Exactly one
//! of the two is authoritative for any item.

use serde::{Deserialize, Serialize};

use super::entity::new_id;

/// One physical set: weight lifted for a number of repetitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Sets written without an id get a fresh one on load
    #[serde(default = "new_id")]
    pub id: String,
    pub weight: f64,
    pub reps: f64,
}

impl ExerciseSet {
    pub fn new(weight: f64, reps: f64) -> Self {
        Self {
            id: new_id(),
            weight,
            reps,
        }
    }

    pub fn volume(&self) -> f64 {
        self.weight * self.reps
    }
}

/// Raw per-set form input, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetInput {
    pub weight: String,
    pub reps: String,
}

impl SetInput {
    pub fn new(weight: impl Into<String>, reps: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            reps: reps.into(),
        }
    }

    /// Coerce into a set; unparsable fields become 0
    pub fn to_set(&self) -> ExerciseSet {
        ExerciseSet::new(coerce_number(&self.weight), coerce_number(&self.reps))
    }
}

/// Lenient numeric coercion for form fields: blank, unparsable or
/// non-finite input yields 0.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Exercise data attached to an Exercise item
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseLog {
    /// Pre-detail record: one weight/reps pair repeated `sets` times
    Legacy {
        weight: Option<f64>,
        reps: Option<f64>,
        sets: Option<u32>,
    },
    /// One entry per set performed
    Detailed(Vec<ExerciseSet>),
}

impl Default for ExerciseLog {
    fn default() -> Self {
        ExerciseLog::Detailed(Vec::new())
    }
}

/// Zero and NaN count as "absent" for legacy fields
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

impl ExerciseLog {
    pub fn from_inputs(inputs: &[SetInput]) -> Self {
        ExerciseLog::Detailed(inputs.iter().map(SetInput::to_set).collect())
    }

    /// Weight × reps summed over the sets.
    ///
    /// Legacy records default missing (or zero) reps and sets to 1, so a
    /// record holding only a weight still counts that weight once.
    pub fn volume(&self) -> f64 {
        match self {
            ExerciseLog::Detailed(sets) => sets
                .iter()
                .map(ExerciseSet::volume)
                .fold(0.0, |acc, v| acc + v),
            ExerciseLog::Legacy { weight, reps, sets } => {
                let w = present(*weight).unwrap_or(0.0);
                let r = present(*reps).unwrap_or(1.0);
                let s = sets.filter(|s| *s != 0).map(f64::from).unwrap_or(1.0);
                w * r * s
            }
        }
    }

    /// Number of sets shown for the item
    pub fn set_count(&self) -> u32 {
        match self {
            ExerciseLog::Detailed(sets) => sets.len() as u32,
            ExerciseLog::Legacy { sets, .. } => sets.unwrap_or(0),
        }
    }

    /// Weight and reps of the first set, 0 when there is none
    pub fn first_set(&self) -> (f64, f64) {
        match self {
            ExerciseLog::Detailed(sets) => sets
                .first()
                .map(|s| (s.weight, s.reps))
                .unwrap_or((0.0, 0.0)),
            ExerciseLog::Legacy { weight, reps, .. } => {
                (weight.unwrap_or(0.0), reps.unwrap_or(0.0))
            }
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, ExerciseLog::Legacy { .. })
    }

    /// Detailed sets for editing. A legacy record becomes `sets` copies of
    /// its single weight/reps pair.
    pub fn expand_legacy(&self) -> Vec<ExerciseSet> {
        match self {
            ExerciseLog::Detailed(sets) => sets.clone(),
            ExerciseLog::Legacy { weight, reps, sets } => {
                let w = present(*weight).unwrap_or(0.0);
                let r = present(*reps).unwrap_or(0.0);
                (0..sets.unwrap_or(0)).map(|_| ExerciseSet::new(w, r)).collect()
            }
        }
    }

    /// Detailed form of this log
    pub fn into_detailed(self) -> Self {
        match self {
            ExerciseLog::Detailed(_) => self,
            legacy => ExerciseLog::Detailed(legacy.expand_legacy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(pairs: &[(f64, f64)]) -> ExerciseLog {
        ExerciseLog::Detailed(pairs.iter().map(|(w, r)| ExerciseSet::new(*w, *r)).collect())
    }

    #[test]
    fn test_detailed_volume() {
        let log = sets(&[(24.0, 10.0); 4]);
        assert_eq!(log.volume(), 960.0);
        assert_eq!(log.set_count(), 4);
    }

    #[test]
    fn test_legacy_volume_full() {
        let log = ExerciseLog::Legacy { weight: Some(20.0), reps: Some(8.0), sets: Some(3) };
        assert_eq!(log.volume(), 480.0);
    }

    #[test]
    fn test_legacy_volume_defaults_reps_and_sets_to_one() {
        let log = ExerciseLog::Legacy { weight: Some(20.0), reps: None, sets: None };
        assert_eq!(log.volume(), 20.0);

        let zeroed = ExerciseLog::Legacy { weight: Some(20.0), reps: Some(0.0), sets: Some(0) };
        assert_eq!(zeroed.volume(), 20.0);
    }

    #[test]
    fn test_legacy_without_weight_has_no_volume() {
        let log = ExerciseLog::Legacy { weight: None, reps: Some(12.0), sets: Some(3) };
        assert_eq!(log.volume(), 0.0);
    }

    #[test]
    fn test_empty_detailed_has_no_volume() {
        assert_eq!(ExerciseLog::default().volume(), 0.0);
        assert!(ExerciseLog::default().volume().is_sign_positive());
        assert_eq!(ExerciseLog::default().first_set(), (0.0, 0.0));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(" 24 "), 24.0);
        assert_eq!(coerce_number("12.5"), 12.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
    }

    #[test]
    fn test_from_inputs_coerces_each_field() {
        let log = ExerciseLog::from_inputs(&[SetInput::new("30", "x"), SetInput::new("", "5")]);
        match log {
            ExerciseLog::Detailed(sets) => {
                assert_eq!((sets[0].weight, sets[0].reps), (30.0, 0.0));
                assert_eq!((sets[1].weight, sets[1].reps), (0.0, 5.0));
                assert_ne!(sets[0].id, sets[1].id);
            }
            other => panic!("expected detailed sets, got {:?}", other),
        }
    }

    #[test]
    fn test_expand_legacy_repeats_single_set() {
        let log = ExerciseLog::Legacy { weight: Some(20.0), reps: Some(8.0), sets: Some(3) };
        let expanded = log.clone().into_detailed();
        assert_eq!(expanded.set_count(), 3);
        assert_eq!(expanded.volume(), log.volume());
        assert_eq!(expanded.first_set(), (20.0, 8.0));
    }

    #[test]
    fn test_expand_legacy_without_sets_is_empty() {
        let log = ExerciseLog::Legacy { weight: Some(20.0), reps: None, sets: None };
        assert!(log.expand_legacy().is_empty());
    }

    #[test]
    fn test_set_without_id_gets_one() {
        let set: ExerciseSet = serde_json::from_str(r#"{"weight": 40, "reps": 6}"#).unwrap();
        assert_eq!(set.id.len(), 36);
        assert_eq!(set.volume(), 240.0);
    }
}
