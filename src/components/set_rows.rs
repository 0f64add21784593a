//! Set Rows Component
//!
//! Editable weight/reps rows for exercise sets, shared by the new item form
//! and the edit modal.

use leptos::prelude::*;

use crate::models::SetInput;

/// Rows are keyed by position, so typing never re-creates an input
#[component]
pub fn SetRows(
    rows: RwSignal<Vec<SetInput>>,
    /// Show a remove button per row
    #[prop(optional)]
    removable: bool,
) -> impl IntoView {
    let field = move |index: usize, pick: fn(&SetInput) -> &String| {
        move || rows.with(|r| r.get(index).map(|s| pick(s).clone()).unwrap_or_default())
    };

    view! {
        <div class="set-rows">
            <For
                each=move || 0..rows.with(|r| r.len())
                key=|index| *index
                children=move |index| {
                    view! {
                        <div class="set-row">
                            <span class="set-index">{format!("#{}", index + 1)}</span>
                            <input
                                type="number"
                                class="set-weight"
                                placeholder="kg"
                                step="0.5"
                                min="0"
                                prop:value=field(index, |s| &s.weight)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    rows.update(|r| if let Some(set) = r.get_mut(index) { set.weight = value; });
                                }
                            />
                            <span class="set-times">"×"</span>
                            <input
                                type="number"
                                class="set-reps"
                                placeholder="reps"
                                min="0"
                                prop:value=field(index, |s| &s.reps)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    rows.update(|r| if let Some(set) = r.get_mut(index) { set.reps = value; });
                                }
                            />
                            {removable.then(|| view! {
                                <button
                                    type="button"
                                    class="set-remove-btn"
                                    on:click=move |_| rows.update(|r| {
                                        if index < r.len() {
                                            r.remove(index);
                                        }
                                    })
                                >
                                    "×"
                                </button>
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}
