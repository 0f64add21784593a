//! Tauri Commands for Goal Breakdown

use tauri::State;

use daystream_core::domain::Item;
use daystream_core::services::{accept_plan, GoalPlan, GoalPlanner};

use crate::AppState;

/// Ask the planner to break a goal into daily tasks.
///
/// Returns `None` when no plan could be produced (missing key, network or
/// response failure). No store lock is held during the request.
#[tauri::command]
pub async fn generate_goal_plan(
    state: State<'_, AppState>,
    goal: String,
) -> Result<Option<GoalPlan>, String> {
    let planner = state.planner.read().await.clone();
    Ok(planner.breakdown(&goal).await)
}

/// Add the accepted plan tasks as daily tasks
#[tauri::command]
pub async fn accept_goal_plan(state: State<'_, AppState>, plan: GoalPlan) -> Result<Vec<Item>, String> {
    let mut store = state.items.lock().await;
    Ok(accept_plan(&mut store, Some(&plan)))
}
