//! Mission Control Frontend App
//!
//! Builds the session's sync layer and lays out the tabbed dashboard.

use leptos::prelude::*;
use reactive_stores::Store;

use mission_sync::{HttpStore, MissionSync, StoreConfig};

use crate::components::{Header, MissionList, NewMissionForm, Overview, TabBar, ToastStack};
use crate::context::AppContext;
use crate::models::{Notice, Tab};
use crate::store::{store_push_toast, DashboardState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(DashboardState::new());
    provide_context(store);

    let config = StoreConfig::from_build_env();
    let http = match HttpStore::new(&config) {
        Ok(http) => http,
        Err(e) => {
            log::error!("Failed to build HTTP client for {}: {}", config.base_url, e);
            return view! {
                <div class="error-banner">{format!("Cannot reach the mission API: {}", e)}</div>
            }
            .into_any();
        }
    };
    log::info!("Mission API at {}", config.normalized_base_url());

    // One sync layer per dashboard session; notices become toasts
    let sync = MissionSync::with_notifier(http, move |notice: Notice| store_push_toast(&store, notice));
    let ctx = AppContext::new(sync, store);
    provide_context(ctx);

    let (current_tab, set_current_tab) = signal(Tab::Overview);

    // Load missions on mount
    Effect::new(move |_| ctx.refresh());

    view! {
        <div class="app-layout">
            <Header />
            <TabBar current_tab=current_tab set_current_tab=set_current_tab />
            <main class="main-content">
                {move || match current_tab.get() {
                    Tab::Overview => view! { <Overview /> }.into_any(),
                    Tab::Missions => view! { <MissionList /> }.into_any(),
                    Tab::Create => view! {
                        <NewMissionForm on_created=move |_: ()| set_current_tab.set(Tab::Missions) />
                    }
                    .into_any(),
                }}
            </main>
            <ToastStack />
        </div>
    }
    .into_any()
}
