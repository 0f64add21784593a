//! Repository Layer
//!
//! Storage backends and the two persisted stores.

mod collection;
mod item_store;
mod seed;
mod storage;
mod weight_store;


pub use collection::EntityCollection;
pub use item_store::{ItemStore, Toggled, ITEMS_KEY};
pub use seed::INITIAL_ENTRY_ID;
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
pub use weight_store::{WeightRecorded, WeightStore, WEIGHT_HISTORY_KEY};
