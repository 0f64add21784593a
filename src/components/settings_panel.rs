//! Settings Panel
//!
//! Starting weight, Gemini access and first-run seeding, plus the tail of
//! the backend log.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{AppSettings, SettingsUpdate};

const LOG_LINES: usize = 100;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_app_context();

    let initial_weight = RwSignal::new(String::new());
    let api_key = RwSignal::new(String::new());
    let model = RwSignal::new(String::new());
    let seed_defaults = RwSignal::new(true);
    let logs = RwSignal::new(Vec::<String>::new());
    let status = RwSignal::new(None::<String>);

    let fill = move |settings: AppSettings| {
        initial_weight.set(settings.initial_weight.to_string());
        api_key.set(settings.gemini_api_key);
        model.set(settings.gemini_model);
        seed_defaults.set(settings.seed_defaults);
    };

    // Load on open
    Effect::new(move |_| {
        if !ctx.settings_open.get() {
            return;
        }
        status.set(None);
        spawn_local(async move {
            if let Ok(settings) = commands::get_settings().await {
                fill(settings);
            }
            if let Ok(lines) = commands::get_recent_logs(Some(LOG_LINES)).await {
                logs.set(lines);
            }
        });
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let weight = initial_weight.get_untracked().trim().replace(',', ".");
        let update = SettingsUpdate {
            initial_weight: weight.parse::<f64>().ok(),
            gemini_api_key: Some(api_key.get_untracked()),
            gemini_model: Some(model.get_untracked()),
            seed_defaults: Some(seed_defaults.get_untracked()),
        };
        spawn_local(async move {
            match commands::update_settings(&update).await {
                Ok(settings) => {
                    fill(settings);
                    status.set(Some("Saved".to_string()));
                    ctx.reload();
                }
                Err(e) => status.set(Some(e)),
            }
        });
    };

    view! {
        <Show when=move || ctx.settings_open.get()>
            <div class="modal-backdrop" on:click=move |_| ctx.settings_open.set(false)>
                <div class="modal modal-wide" on:click=|ev| ev.stop_propagation()>
                    <h2>"Settings"</h2>
                    <form on:submit=save>
                        <label class="field">
                            <span>"Starting weight (kg)"</span>
                            <input
                                type="text"
                                inputmode="decimal"
                                prop:value=move || initial_weight.get()
                                on:input=move |ev| initial_weight.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Gemini API key"</span>
                            <input
                                type="password"
                                autocomplete="off"
                                prop:value=move || api_key.get()
                                on:input=move |ev| api_key.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Gemini model"</span>
                            <input
                                type="text"
                                prop:value=move || model.get()
                                on:input=move |ev| model.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field checkbox-field">
                            <input
                                type="checkbox"
                                prop:checked=move || seed_defaults.get()
                                on:change=move |ev| seed_defaults.set(event_target_checked(&ev))
                            />
                            <span>"Add welcome data when storage is empty"</span>
                        </label>
                        {move || status.get().map(|s| view! { <p class="form-status">{s}</p> })}
                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| ctx.settings_open.set(false)>
                                "Close"
                            </button>
                            <button type="submit" class="primary-btn">"Save"</button>
                        </div>
                    </form>

                    <details class="log-viewer">
                        <summary>"Recent log"</summary>
                        <pre>{move || logs.get().join("\n")}</pre>
                    </details>
                </div>
            </div>
        </Show>
    }
}
