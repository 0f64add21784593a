//! New Item Form Component
//!
//! Creates an item in the active category. Exercises also take a set count
//! and one weight/reps row per set.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SetRows;
use crate::commands::{self, CreateItemArgs};
use crate::context::use_app_context;
use crate::models::{resize_set_rows, ItemType, SetInput};
use crate::store::{use_app_store, AppStateStoreFields};

/// Suggestions offered in the exercise title field
const EXERCISE_PRESETS: &[&str] = &["Dumbbell press", "Deadlift", "Back row", "EZ-bar curl"];

/// Upper bound (exclusive) of the set count field
const MAX_SETS: usize = 20;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (set_count, set_set_count) = signal(String::new());
    let rows = RwSignal::new(Vec::<SetInput>::new());

    let is_exercise = move || store.active_tab().get() == ItemType::Exercise;

    let on_count_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        match raw.trim().parse::<usize>() {
            Ok(count) if count < MAX_SETS => rows.update(|r| resize_set_rows(r, count)),
            Ok(_) => {}
            Err(_) => rows.update(Vec::clear),
        }
        set_set_count.set(raw);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }
        let item_type = store.active_tab().get_untracked();
        let sets = rows.get_untracked();

        spawn_local(async move {
            let args = CreateItemArgs {
                item_type,
                title: &text,
                sets: (item_type == ItemType::Exercise).then_some(sets.as_slice()),
            };
            if let Ok(Some(_)) = commands::create_item(&args).await {
                set_title.set(String::new());
                set_set_count.set(String::new());
                rows.set(Vec::new());
                ctx.reload();
            }
        });
    };

    view! {
        <form class=move || format!("new-item-form form-{}", store.active_tab().get().css()) on:submit=submit>
            <div class="new-item-row">
                <input
                    type="text"
                    list=move || is_exercise().then_some("exercise-presets")
                    placeholder=move || store.active_tab().get().placeholder()
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <Show when=is_exercise>
                    <input
                        type="number"
                        class="set-count"
                        placeholder="Sets"
                        min="0"
                        max="19"
                        prop:value=move || set_count.get()
                        on:input=on_count_input
                    />
                </Show>
                <button type="submit">"Add"</button>
            </div>

            <datalist id="exercise-presets">
                {EXERCISE_PRESETS.iter().map(|name| view! { <option value=*name></option> }).collect_view()}
            </datalist>

            <Show when=move || is_exercise() && rows.with(|r| !r.is_empty())>
                <SetRows rows=rows />
            </Show>
        </form>
    }
}
