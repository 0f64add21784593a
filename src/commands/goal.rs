//! Goal Breakdown Commands

use serde::Serialize;

use super::call_with;
use crate::models::{GoalPlan, Item};

#[derive(Serialize)]
struct GoalArgs<'a> {
    goal: &'a str,
}

#[derive(Serialize)]
struct PlanArgs<'a> {
    plan: &'a GoalPlan,
}

/// `None` when no plan could be produced
pub async fn generate_goal_plan(goal: &str) -> Result<Option<GoalPlan>, String> {
    call_with("generate_goal_plan", &GoalArgs { goal }).await
}

pub async fn accept_goal_plan(plan: &GoalPlan) -> Result<Vec<Item>, String> {
    call_with("accept_goal_plan", &PlanArgs { plan }).await
}
