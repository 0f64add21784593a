//! Two-step remove control shared by item rows and weigh-in history rows.

use leptos::prelude::*;

/// Trash button that asks "Remove this <what>?" before calling `on_remove`.
///
/// Clicks never reach the row underneath, so pressing it does not also
/// toggle the item or open an editor.
#[component]
pub fn RemoveButton(what: &'static str, #[prop(into)] on_remove: Callback<()>) -> impl IntoView {
    let asking = RwSignal::new(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    type="button"
                    class="remove-btn"
                    title=format!("Remove {}", what)
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        asking.set(true);
                    }
                >
                    "🗑"
                </button>
            }
        >
            <span class="remove-prompt">
                {format!("Remove this {}?", what)}
                <button
                    type="button"
                    class="remove-yes"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        asking.set(false);
                        on_remove.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="remove-no"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        asking.set(false);
                    }
                >
                    "Keep"
                </button>
            </span>
        </Show>
    }
}
