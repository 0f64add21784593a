//! Weight History Store
//!
//! Body-weight measurements persisted under [`WEIGHT_HISTORY_KEY`]. Entries
//! are kept in insertion order; anything that needs chronology sorts by
//! `date`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::collection::EntityCollection;
use super::seed;
use super::storage::Storage;
use crate::domain::{
    current_weight, now_millis, parse_weight_input, Clock, Cue, DomainResult, WeightEntry,
    WeightSignal, WeightTrend,
};

/// Storage key of the weight history
pub const WEIGHT_HISTORY_KEY: &str = "daystream_weight_history";

/// Result of a successful measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecorded {
    pub entry: WeightEntry,
    /// Direction relative to the weight current before this entry
    pub signal: Option<WeightSignal>,
    pub cue: Option<Cue>,
}

pub struct WeightStore {
    entries: EntityCollection<WeightEntry>,
    /// Current weight reported for an empty history; also the starting weight
    initial_weight: f64,
    clock: Clock,
}

impl WeightStore {
    pub fn load(
        storage: Arc<dyn Storage>,
        initial_weight: f64,
        seed_defaults: bool,
    ) -> DomainResult<Self> {
        Self::load_with_clock(storage, initial_weight, seed_defaults, now_millis)
    }

    pub fn load_with_clock(
        storage: Arc<dyn Storage>,
        initial_weight: f64,
        seed_defaults: bool,
        clock: Clock,
    ) -> DomainResult<Self> {
        let entries = EntityCollection::load(storage, WEIGHT_HISTORY_KEY, || {
            if seed_defaults {
                seed::initial_history(clock(), initial_weight)
            } else {
                Vec::new()
            }
        })?;
        Ok(Self {
            entries,
            initial_weight,
            clock,
        })
    }

    pub fn entries(&self) -> &[WeightEntry] {
        self.entries.as_slice()
    }

    pub fn initial_weight(&self) -> f64 {
        self.initial_weight
    }

    pub fn set_initial_weight(&mut self, weight: f64) {
        self.initial_weight = weight;
    }

    /// Parse and append a measurement dated now.
    ///
    /// Returns `None` (no entry created) for input that is not a positive
    /// number.
    pub fn record_weight(&mut self, raw_input: &str) -> Option<WeightRecorded> {
        let Some(weight) = parse_weight_input(raw_input) else {
            log::debug!("rejected weight input {:?}", raw_input);
            return None;
        };

        let signal = WeightSignal::between(self.current_weight(), weight);
        let entry = WeightEntry::new((self.clock)(), weight);
        self.entries.push(entry.clone());
        log::info!("recorded weight {} kg ({:?})", weight, signal);

        Some(WeightRecorded {
            entry,
            signal,
            cue: signal.map(Cue::for_weight),
        })
    }

    /// Remove an entry; the last remaining one may be removed too
    pub fn delete_entry(&mut self, id: &str) -> bool {
        self.entries.remove(id)
    }

    /// Replace the entry with the same id. Returns `None` for an unknown id
    /// or a weight that is not a positive finite number.
    pub fn update_entry(&mut self, updated: WeightEntry) -> Option<WeightEntry> {
        if !(updated.weight.is_finite() && updated.weight > 0.0) {
            return None;
        }
        self.entries.replace(updated.clone()).then_some(updated)
    }

    /// Weight of the latest-dated entry, or the initial weight when empty
    pub fn current_weight(&self) -> f64 {
        current_weight(self.entries.as_slice(), self.initial_weight)
    }

    /// History for the list view, newest first
    pub fn sorted_newest_first(&self) -> Vec<WeightEntry> {
        let mut sorted = self.entries.as_slice().to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn trend(&self) -> WeightTrend {
        WeightTrend::from_entries(self.entries.as_slice(), self.initial_weight)
    }
}
