//! DayStream core: items, weight history, derived statistics and goal
//! planning, independent of any UI shell.

pub mod domain;
pub mod repository;
pub mod services;
