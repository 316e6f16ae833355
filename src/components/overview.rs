//! Overview Component
//!
//! Stat cards, active mission progress and mission locations.

use leptos::prelude::*;

use crate::components::{ProgressBar, StatCards};
use crate::models::MissionStats;
use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn Overview() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| MissionStats::from_missions(store.missions().read().iter()));

    let active_missions = move || {
        store
            .missions()
            .get()
            .into_iter()
            .filter(|mission| mission.is_active())
            .map(|mission| {
                view! {
                    <div class="active-mission">
                        <div class="active-mission-row">
                            <span class="mission-name">{mission.details.name.clone()}</span>
                            <span class="mission-location">{mission.details.location.clone()}</span>
                        </div>
                        <ProgressBar progress=mission.details.progress />
                        <span class="progress-label">
                            {format!("{} Complete", mission.details.progress)}
                        </span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="overview">
            <StatCards stats=stats />
            <div class="overview-panels">
                <div class="panel">
                    <h2>"Active Mission Status"</h2>
                    {active_missions}
                </div>
                <div class="panel">
                    <h2>"Mission Locations"</h2>
                    <ul class="location-list">
                        {move || stats.get().locations.into_iter()
                            .map(|location| view! { <li>{location}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
