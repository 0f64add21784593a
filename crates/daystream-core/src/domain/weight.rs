//! Weight Entry Entity
//!
//! One timestamped body-weight measurement, in kilograms.

use serde::{Deserialize, Serialize};

use super::entity::{new_id, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WeightRecord")]
pub struct WeightEntry {
    pub id: String,
    /// Measurement time (epoch millis)
    pub date: i64,
    pub weight: f64,
}

impl WeightEntry {
    pub fn new(date: i64, weight: f64) -> Self {
        Self {
            id: new_id(),
            date,
            weight,
        }
    }
}

impl Entity for WeightEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Persisted shape; early histories were written without ids
#[derive(Deserialize)]
struct WeightRecord {
    #[serde(default)]
    id: Option<String>,
    date: i64,
    weight: f64,
}

impl From<WeightRecord> for WeightEntry {
    fn from(record: WeightRecord) -> Self {
        Self {
            id: record
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(new_id),
            date: record.date,
            weight: record.weight,
        }
    }
}

/// Direction of a new measurement relative to the current weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightSignal {
    Loss,
    Gain,
}

impl WeightSignal {
    /// Compare a new value with the current weight; equal values carry no signal
    pub fn between(current: f64, new_value: f64) -> Option<Self> {
        if new_value < current {
            Some(WeightSignal::Loss)
        } else if new_value > current {
            Some(WeightSignal::Gain)
        } else {
            None
        }
    }
}

/// Parse user weight input.
///
/// The first decimal comma is read as a point and the longest leading
/// decimal number is taken (`"85,2 kg"` reads as 85.2). Returns `None`
/// for non-numeric, non-finite or non-positive input.
pub fn parse_weight_input(raw: &str) -> Option<f64> {
    let normalized = raw.replacen(',', ".", 1);
    let value = leading_number(normalized.trim_start())?;
    (value.is_finite() && value > 0.0).then_some(value)
}

fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    // exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
