//! Edit Item Modal
//!
//! Edits title, description and priority. Exercise drafts also edit their
//! detailed sets; legacy values arrive already expanded.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SetRows;
use crate::commands;
use crate::context::use_app_context;
use crate::models::{resize_set_rows, Item, ItemType, Priority, SetInput};

/// Build the item sent to `update_item` from the draft and form values
fn edited_item(draft: &Item, title: String, description: String, priority: Priority, sets: &[SetInput]) -> Item {
    let description = description.trim().to_string();
    let mut item = Item {
        title,
        description: (!description.is_empty()).then_some(description),
        priority: Some(priority),
        ..draft.clone()
    };
    if item.item_type == ItemType::Exercise {
        // Detailed sets only, so an empty list is not read as legacy data
        item.weight = None;
        item.reps = None;
        item.sets = None;
        item.detailed_sets = Some(sets.iter().map(SetInput::to_set).collect());
    }
    item
}

#[component]
pub fn EditItemModal() -> impl IntoView {
    let ctx = use_app_context();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let priority = RwSignal::new(Priority::default());
    let rows = RwSignal::new(Vec::<SetInput>::new());
    let error = RwSignal::new(None::<String>);

    // Reset the form whenever a new draft is opened
    Effect::new(move |_| {
        if let Some(draft) = ctx.editing_item.get() {
            title.set(draft.title.clone());
            description.set(draft.description.clone().unwrap_or_default());
            priority.set(draft.priority.unwrap_or_default());
            rows.set(draft.detailed().iter().map(SetInput::from_set).collect());
            error.set(None);
        }
    });

    let is_exercise = move || {
        ctx.editing_item
            .with(|d| d.as_ref().is_some_and(|d| d.item_type == ItemType::Exercise))
    };

    let close = move || ctx.editing_item.set(None);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = ctx.editing_item.get_untracked() else {
            return;
        };
        let item = edited_item(
            &draft,
            title.get_untracked(),
            description.get_untracked(),
            priority.get_untracked(),
            &rows.get_untracked(),
        );
        spawn_local(async move {
            match commands::update_item(&item).await {
                Ok(Some(_)) => {
                    ctx.editing_item.set(None);
                    ctx.reload();
                }
                Ok(None) => error.set(Some("Title cannot be empty".to_string())),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <Show when=move || ctx.editing_item.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=save>
                    <h2>"Edit"</h2>

                    <label class="field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span>"Description"</span>
                        <textarea
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="field">
                        <span>"Priority"</span>
                        <div class="priority-selector">
                            {Priority::ALL.into_iter().map(|p| view! {
                                <button
                                    type="button"
                                    class=move || {
                                        let active = if priority.get() == p { " active" } else { "" };
                                        format!("priority-btn priority-{}{}", p.label().to_lowercase(), active)
                                    }
                                    on:click=move |_| priority.set(p)
                                >
                                    {p.label()}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>

                    <Show when=is_exercise>
                        <div class="field">
                            <span>"Sets"</span>
                            <SetRows rows=rows removable=true />
                            <button
                                type="button"
                                class="add-set-btn"
                                on:click=move |_| rows.update(|r| {
                                    let next = r.len() + 1;
                                    resize_set_rows(r, next);
                                })
                            >
                                "+ Add set"
                            </button>
                        </div>
                    </Show>

                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" class="primary-btn">"Save"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
