//! Edit Weight Modal
//!
//! Corrects the value or date of a recorded measurement.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::format::{from_datetime_local, to_datetime_local};
use crate::models::WeightEntry;

#[component]
pub fn EditWeightModal() -> impl IntoView {
    let ctx = use_app_context();

    let weight = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if let Some(entry) = ctx.editing_weight.get() {
            weight.set(entry.weight.to_string());
            date.set(to_datetime_local(entry.date));
            error.set(None);
        }
    });

    let close = move || ctx.editing_weight.set(None);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(original) = ctx.editing_weight.get_untracked() else {
            return;
        };
        let parsed = weight.get_untracked().trim().replace(',', ".").parse::<f64>().ok();
        let Some(value) = parsed.filter(|w| w.is_finite() && *w > 0.0) else {
            error.set(Some("Enter a positive weight".to_string()));
            return;
        };
        let entry = WeightEntry {
            weight: value,
            date: from_datetime_local(&date.get_untracked()).unwrap_or(original.date),
            ..original
        };
        spawn_local(async move {
            match commands::update_weight_entry(&entry).await {
                Ok(Some(_)) => {
                    ctx.editing_weight.set(None);
                    ctx.reload();
                }
                Ok(None) => error.set(Some("This entry no longer exists".to_string())),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <Show when=move || ctx.editing_weight.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <form class="modal modal-small" on:click=|ev| ev.stop_propagation() on:submit=save>
                    <h2>"Edit measurement"</h2>

                    <label class="field">
                        <span>"Weight (kg)"</span>
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            prop:value=move || weight.get()
                            on:input=move |ev| weight.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span>"Date"</span>
                        <input
                            type="datetime-local"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>

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
