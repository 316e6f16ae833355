//! Mission List Component
//!
//! Every cached mission, newest first.

use leptos::prelude::*;

use crate::components::MissionCard;
use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn MissionList() -> impl IntoView {
    let store = use_app_store();

    // Re-rendered wholesale: updates keep the id, so keyed rows would go stale
    let cards = move || {
        store
            .missions()
            .get()
            .into_iter()
            .map(|mission| view! { <MissionCard mission=mission /> })
            .collect_view()
    };

    view! {
        <section class="mission-list">
            <Show
                when=move || !store.missions().read().is_empty()
                fallback=move || view! {
                    <p class="empty-state">
                        {move || if store.is_loading().get() { "Loading missions..." } else { "No missions yet." }}
                    </p>
                }
            >
                {cards}
            </Show>
        </section>
    }
}
