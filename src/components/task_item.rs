//! Task Item Component
//!
//! One item row: completion toggle, details, age badge and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::RemoveButton;
use crate::audio::play_cue;
use crate::commands;
use crate::context::use_app_context;
use crate::models::{ItemView, Staleness};
use crate::store::{store_remove_item, store_update_item, use_app_store};

fn staleness_class(staleness: Staleness) -> &'static str {
    match staleness {
        Staleness::Fresh => "",
        Staleness::Aging => "stale-aging",
        Staleness::Overdue => "stale-overdue",
        Staleness::Critical => "stale-critical",
    }
}

/// Badge text for open items of three days or older
fn age_badge(view: &ItemView) -> Option<String> {
    match view.staleness {
        Staleness::Fresh => None,
        Staleness::Critical => Some("CRITICAL".to_string()),
        _ => Some(format!("{} days", view.age_days)),
    }
}

#[component]
pub fn TaskItem(view: ItemView) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let item = view.item.clone();
    let id = StoredValue::new(item.id.clone());
    let completed = item.is_completed;

    let row_class = format!(
        "task-item {} {} {}",
        view.accent.class(),
        staleness_class(view.staleness),
        if completed { "completed" } else { "" }
    );
    let badge = age_badge(&view);
    let summary = item.exercise_summary();
    let priority = item.priority;

    let toggle = move |_: web_sys::MouseEvent| {
        let id = id.get_value();
        spawn_local(async move {
            if let Ok(Some(toggled)) = commands::toggle_item(&id).await {
                if let Some(cue) = toggled.cue {
                    play_cue(cue);
                }
                store_update_item(&store, toggled.item);
                ctx.reload();
            }
        });
    };

    let edit = move |_: web_sys::MouseEvent| {
        let id = id.get_value();
        spawn_local(async move {
            if let Ok(Some(draft)) = commands::get_edit_draft(&id).await {
                ctx.editing_item.set(Some(draft));
            }
        });
    };

    let delete = move |_: ()| {
        let id = id.get_value();
        spawn_local(async move {
            if let Ok(true) = commands::delete_item(&id).await {
                store_remove_item(&store, &id);
                ctx.reload();
            }
        });
    };

    view! {
        <li class=row_class>
            <button
                type="button"
                class=if completed { "toggle-btn checked" } else { "toggle-btn" }
                title=if completed { "Mark as open" } else { "Mark as done" }
                on:click=toggle
            >
                {if completed { "✓" } else { "" }}
            </button>

            <div class="task-body">
                <span class="task-title">{item.title.clone()}</span>
                {item.description.clone().map(|d| view! { <p class="task-description">{d}</p> })}
                {summary.map(|s| view! { <span class="exercise-summary">{s}</span> })}
            </div>

            {priority.map(|p| view! {
                <span class=format!("priority-badge priority-{}", p.label().to_lowercase())>{p.label()}</span>
            })}
            {badge.filter(|_| !completed).map(|text| view! {
                <span class="age-badge">{text}</span>
            })}

            <div class="task-actions">
                <button type="button" class="edit-btn" title="Edit" on:click=edit>"✎"</button>
                <RemoveButton what="item" on_remove=delete />
            </div>
        </li>
    }
}
