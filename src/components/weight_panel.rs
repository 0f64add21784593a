//! Weight Panel Component
//!
//! Measurement input, body visualizer, trend chart and history list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{RemoveButton, WeightChart};
use crate::audio::play_cue;
use crate::commands;
use crate::context::use_app_context;
use crate::format::{date_time, kg, signed_kg};
use crate::models::{Cue, WeightEntry};
use crate::store::{store_remove_weight, use_app_store, AppStateStoreFields};

/// Silhouette scaled horizontally with the weight change
#[component]
fn BodyVisualizer() -> impl IntoView {
    let store = use_app_store();
    let scale = move || store.dashboard().with(|d| d.body_scale);
    let change = move || store.dashboard().with(|d| d.weight_change);

    view! {
        <div class="body-visualizer">
            <svg viewBox="0 0 100 200" class="body-svg" style=move || format!("transform: scaleX({:.3})", scale())>
                <path
                    class="body-shape"
                    d="M50,10 C40,10 35,18 35,28 C35,38 40,45 50,45 C60,45 65,38 65,28 C65,18 60,10 50,10 Z M50,48 C35,48 20,60 20,80 L20,120 C20,130 25,135 30,135 L35,135 L35,190 C35,195 40,200 45,200 L55,200 C60,200 65,195 65,190 L65,135 L70,135 C75,135 80,130 80,120 L80,80 C80,60 65,48 50,48 Z"
                />
            </svg>
            <div class="body-belt" style=move || format!("width: {:.0}px", 60.0 * scale())></div>
            <p class="current-weight">
                {move || kg(store.dashboard().with(|d| d.current_weight))}
                <span class="unit">" kg"</span>
            </p>
            <p class=move || {
                match change() {
                    c if c > 0.0 => "weight-change up",
                    c if c < 0.0 => "weight-change down",
                    _ => "weight-change",
                }
            }>
                {move || format!("{} kg since start", signed_kg(change()))}
            </p>
        </div>
    }
}

fn feedback_text(cue: Option<Cue>) -> &'static str {
    match cue {
        Some(Cue::Success) => "Down from last time, keep going!",
        Some(Cue::Alert) => "Up from last time.",
        _ => "Saved.",
    }
}

#[component]
fn WeightHistory() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let delete = move |id: String| {
        spawn_local(async move {
            if let Ok(true) = commands::delete_weight_entry(&id).await {
                store_remove_weight(&store, &id);
                ctx.reload();
            }
        });
    };

    view! {
        <ul class="weight-history">
            {move || store.weights().get().into_iter().map(|entry: WeightEntry| {
                let id = entry.id.clone();
                let editing = entry.clone();
                view! {
                    <li class="weight-row">
                        <span class="weight-value">{format!("{} kg", kg(entry.weight))}</span>
                        <span class="weight-date">{date_time(entry.date)}</span>
                        <button
                            type="button"
                            class="edit-btn"
                            title="Edit"
                            on:click=move |_| ctx.editing_weight.set(Some(editing.clone()))
                        >
                            "✎"
                        </button>
                        <RemoveButton
                            what="weigh-in"
                            on_remove=move |_: ()| delete(id.clone())
                        />
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}

#[component]
pub fn WeightPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (input, set_input) = signal(String::new());
    let (feedback, set_feedback) = signal(None::<String>);

    let record = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = input.get();
        spawn_local(async move {
            match commands::record_weight(&raw).await {
                Ok(Some(recorded)) => {
                    if let Some(cue) = recorded.cue {
                        play_cue(cue);
                    }
                    set_feedback.set(Some(feedback_text(recorded.cue).to_string()));
                    set_input.set(String::new());
                    ctx.reload();
                }
                Ok(None) => set_feedback.set(Some("Enter a positive number, e.g. 85.2".to_string())),
                Err(e) => set_feedback.set(Some(e)),
            }
        });
    };

    view! {
        <section class="weight-panel">
            <div class="weight-top">
                <BodyVisualizer />
                <form class="weight-form" on:submit=record>
                    <label for="weight-input">"Today's weight"</label>
                    <div class="new-item-row">
                        <input
                            id="weight-input"
                            type="text"
                            inputmode="decimal"
                            placeholder="85.2"
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                        />
                        <button type="submit">"Record"</button>
                    </div>
                    {move || feedback.get().map(|text| view! { <p class="weight-feedback">{text}</p> })}
                </form>
            </div>
            <WeightChart trend=Signal::derive(move || store.trend().get()) />
            <WeightHistory />
        </section>
    }
}
