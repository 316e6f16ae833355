//! Stat Cards Component
//!
//! Summary counters across all cached missions.

use leptos::prelude::*;

use crate::models::MissionStats;

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn StatCards(stats: Memo<MissionStats>) -> impl IntoView {
    view! {
        <div class="stat-cards">
            <StatCard
                label="Active Missions"
                value=Signal::derive(move || stats.get().active.to_string())
            />
            <StatCard
                label="Completed"
                value=Signal::derive(move || stats.get().completed.to_string())
            />
            <StatCard
                label="Critical Priority"
                value=Signal::derive(move || stats.get().critical.to_string())
            />
            <StatCard
                label="Personnel Deployed"
                value=Signal::derive(move || stats.get().team_members.to_string())
            />
            <StatCard
                label="Average Progress"
                value=Signal::derive(move || format!("{:.0}%", stats.get().average_progress))
            />
        </div>
    }
}
