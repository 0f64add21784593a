//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to the stores.

mod goal_cmd;
mod item_cmd;
mod settings_cmd;
mod stats_cmd;
mod weight_cmd;

pub use goal_cmd::*;
pub use item_cmd::*;
pub use settings_cmd::*;
pub use stats_cmd::*;
pub use weight_cmd::*;
