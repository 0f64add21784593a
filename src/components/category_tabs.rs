//! Category Tabs Component
//!
//! One tab per item category, with the completion count of each.

use leptos::prelude::*;

use crate::models::ItemType;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryTabs() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="category-tabs">
            {ItemType::TABS.into_iter().map(|tab| {
                let is_active = move || store.active_tab().get() == tab;
                let count = move || {
                    let progress = store.dashboard().with(|d| d.category(tab));
                    format!("{}/{}", progress.completed, progress.total)
                };
                view! {
                    <button
                        type="button"
                        class=move || {
                            if is_active() {
                                format!("tab-btn tab-{} active", tab.css())
                            } else {
                                format!("tab-btn tab-{}", tab.css())
                            }
                        }
                        on:click=move |_| store.active_tab().set(tab)
                    >
                        <span class="tab-label">{tab.label()}</span>
                        <span class="tab-count">{count}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
