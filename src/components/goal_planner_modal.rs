//! Goal Planner Modal
//!
//! Asks the backend planner to break a goal into daily tasks, then lets the
//! user accept the plan or try again.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{GoalPlan, ItemType};
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Input,
    Loading,
    Review(GoalPlan),
}

#[component]
pub fn GoalPlannerModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let goal = RwSignal::new(String::new());
    let phase = RwSignal::new(Phase::Input);
    let error = RwSignal::new(None::<String>);

    let close = move || {
        ctx.planner_open.set(false);
        phase.set(Phase::Input);
        error.set(None);
    };

    let generate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = goal.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        phase.set(Phase::Loading);
        error.set(None);
        spawn_local(async move {
            match commands::generate_goal_plan(&text).await {
                Ok(Some(plan)) => phase.set(Phase::Review(plan)),
                Ok(None) => {
                    phase.set(Phase::Input);
                    error.set(Some(
                        "Could not create a plan. Check the Gemini API key in settings.".to_string(),
                    ));
                }
                Err(e) => {
                    phase.set(Phase::Input);
                    error.set(Some(e));
                }
            }
        });
    };

    let accept = move |plan: GoalPlan| {
        spawn_local(async move {
            if let Ok(created) = commands::accept_goal_plan(&plan).await {
                web_sys::console::log_1(&format!("[PLANNER] Added {} tasks", created.len()).into());
                goal.set(String::new());
                close();
                store.active_tab().set(ItemType::DailyTask);
                ctx.reload();
            }
        });
    };

    let body = move || match phase.get() {
        Phase::Input | Phase::Loading => {
            let loading = phase.with(|p| *p == Phase::Loading);
            view! {
                <form on:submit=generate>
                    <label class="field">
                        <span>"What do you want to achieve?"</span>
                        <textarea
                            rows="3"
                            placeholder="Run a half marathon in spring"
                            prop:value=move || goal.get()
                            on:input=move |ev| goal.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| close()>"Close"</button>
                        <button type="submit" class="primary-btn" disabled=loading>
                            {if loading { "Thinking..." } else { "Create plan" }}
                        </button>
                    </div>
                </form>
            }
            .into_any()
        }
        Phase::Review(plan) => {
            let accepted = plan.clone();
            view! {
                <div class="plan-review">
                    <p class="plan-motivation">{plan.motivation.clone()}</p>
                    <ol class="plan-tasks">
                        {plan.tasks.into_iter().map(|task| view! { <li>{task}</li> }).collect_view()}
                    </ol>
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| phase.set(Phase::Input)>
                            "Back"
                        </button>
                        <button type="button" class="primary-btn" on:click=move |_| accept(accepted.clone())>
                            "Add to today"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Show when=move || ctx.planner_open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Goal planner"</h2>
                    {body}
                </div>
            </div>
        </Show>
    }
}
