//! Item List Component

use leptos::prelude::*;

use super::TaskItem;
use crate::models::ItemView;

/// Titled list of item rows
#[component]
pub fn ItemList(
    #[prop(into)] title: String,
    #[prop(into)] items: Signal<Vec<ItemView>>,
    #[prop(into)] empty_text: String,
) -> impl IntoView {
    view! {
        <section class="item-list">
            <header class="item-list-header">
                <h2>{title}</h2>
                <span class="item-list-count">
                    {move || {
                        let (done, total) = items.with(|list| {
                            (list.iter().filter(|v| v.item.is_completed).count(), list.len())
                        });
                        format!("{}/{}", done, total)
                    }}
                </span>
            </header>
            {move || {
                let list = items.get();
                if list.is_empty() {
                    view! { <p class="empty-state">{empty_text.clone()}</p> }.into_any()
                } else {
                    view! {
                        <ul class="items">
                            {list.into_iter().map(|view| view! { <TaskItem view=view /> }).collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
