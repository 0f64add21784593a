//! Stats Summary Component
//!
//! Headline numbers from the dashboard.

use leptos::prelude::*;

use crate::format::{kg, signed_kg};
use crate::models::Progress;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn ProgressCard(#[prop(into)] label: String, #[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">
                {move || progress.with(|p| format!("{}/{}", p.completed, p.total))}
            </span>
            <div class="progress-bar">
                <div class="progress-fill" style=move || format!("width: {}%", progress.with(|p| p.percent))></div>
            </div>
        </div>
    }
}

#[component]
pub fn StatsSummary() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="stats-summary">
            <ProgressCard label="Today" progress=Signal::derive(move || store.dashboard().with(|d| d.daily)) />
            <ProgressCard label="Goals" progress=Signal::derive(move || store.dashboard().with(|d| d.goals)) />
            <div class="stat-card">
                <span class="stat-label">"Volume lifted"</span>
                <span class="stat-value">
                    {move || format!("{} kg", kg(store.dashboard().with(|d| d.total_volume)))}
                </span>
            </div>
            <div class="stat-card">
                <span class="stat-label">"Weight"</span>
                <span class="stat-value">
                    {move || format!("{} kg", kg(store.dashboard().with(|d| d.current_weight)))}
                </span>
                <span class="stat-detail">
                    {move || format!("{} kg", signed_kg(store.dashboard().with(|d| d.weight_change)))}
                </span>
            </div>
        </div>
    }
}
