//! DayStream Frontend App
//!
//! Category tabs over a single column. The daily and long-term tabs show
//! both lists side by side; the weight tab shows the weight panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{
    CategoryTabs, EditItemModal, EditWeightModal, GoalPlannerModal, ItemList, NewItemForm,
    SettingsPanel, StatsSummary, WeightPanel,
};
use crate::context::AppContext;
use crate::models::ItemType;
use crate::store::{shows_daily_and_goals, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Statistics and weight data, on mount and after every mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading dashboard, trigger={}", trigger).into());
        spawn_local(async move {
            if let Ok(dashboard) = commands::get_dashboard().await {
                store.dashboard().set(dashboard);
            }
            if let Ok(weights) = commands::list_weight_history().await {
                store.weights().set(weights);
            }
            if let Ok(trend) = commands::get_weight_trend().await {
                store.trend().set(trend);
            }
        });
    });

    // Item lists for the active tab
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let tab = store.active_tab().get();
        spawn_local(async move {
            if shows_daily_and_goals(tab) {
                if let Ok(daily) = commands::list_items_by_type(ItemType::DailyTask).await {
                    store.daily().set(daily);
                }
                if let Ok(goals) = commands::list_items_by_type(ItemType::LongTermGoal).await {
                    store.goals().set(goals);
                }
            } else if let Ok(items) = commands::list_items_by_type(tab).await {
                web_sys::console::log_1(&format!("[APP] Loaded {} {:?} items", items.len(), tab).into());
                store.items().set(items);
            }
        });
    });

    let tab = move || store.active_tab().get();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"DayStream"</h1>
                <div class="header-actions">
                    <button type="button" class="planner-btn" on:click=move |_| ctx.planner_open.set(true)>
                        "✨ Plan a goal"
                    </button>
                    <button type="button" class="settings-btn" title="Settings" on:click=move |_| ctx.settings_open.set(true)>
                        "⚙"
                    </button>
                </div>
            </header>

            <StatsSummary />
            <CategoryTabs />

            <main class="main-content">
                <NewItemForm />
                {move || match tab() {
                    t if shows_daily_and_goals(t) => view! {
                        <div class="two-columns">
                            <ItemList
                                title="Today"
                                items=Signal::derive(move || store.daily().get())
                                empty_text="Nothing planned yet. Add a task or plan a goal."
                            />
                            <ItemList
                                title="Long term"
                                items=Signal::derive(move || store.goals().get())
                                empty_text="No long-term goals yet."
                            />
                        </div>
                    }
                    .into_any(),
                    ItemType::Weight => view! {
                        <WeightPanel />
                        <ItemList
                            title="Health goals"
                            items=Signal::derive(move || store.items().get())
                            empty_text="No health goals yet."
                        />
                    }
                    .into_any(),
                    t => view! {
                        <ItemList
                            title=t.label()
                            items=Signal::derive(move || store.items().get())
                            empty_text="Nothing here yet."
                        />
                    }
                    .into_any(),
                }}
            </main>

            <EditItemModal />
            <EditWeightModal />
            <GoalPlannerModal />
            <SettingsPanel />
        </div>
    }
}
