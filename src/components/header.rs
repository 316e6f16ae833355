//! Dashboard Header Component
//!
//! Title, refresh control, loading state and the last failure.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let status_text = move || {
        if store.is_loading().get() {
            "Loading missions...".to_string()
        } else {
            match store.pending().get() {
                0 => format!("{} missions", store.missions().read().len()),
                n => format!("Saving ({} pending)...", n),
            }
        }
    };

    view! {
        <header class="dashboard-header">
            <h1>"Mission Control Dashboard"</h1>
            <span class="sync-status">{status_text}</span>
            <button
                class="refresh-btn"
                disabled=move || store.is_loading().get()
                on:click=move |_| ctx.refresh()
            >
                "Refresh"
            </button>
        </header>
        {move || store.last_error().get().map(|err| view! {
            <div class="error-banner">{err.to_string()}</div>
        })}
    }
}
