//! Service Layer
//!
//! Collaborators outside the stores.

mod goal_breakdown;

pub use goal_breakdown::{
    accept_plan, parse_response, GeminiConfig, GeminiPlanner, GoalPlan, GoalPlanner,
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
