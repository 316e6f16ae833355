//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mirrors the
//! mission-sync view after every settled operation, plus the toast queue.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use mission_sync::{MissionView, StoreError};

use crate::models::{Mission, Notice, Toast};

/// How long a toast stays on screen
const TOAST_MILLIS: u32 = 4_000;

/// Global dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Cached missions, newest creations first
    pub missions: Vec<Mission>,
    /// A refresh is in flight
    pub is_loading: bool,
    /// Most recent failure, cleared by a successful refresh
    pub last_error: Option<StoreError>,
    /// Operations awaiting the remote store
    pub pending: usize,
    /// Notices currently shown
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            // The first refresh starts on mount
            is_loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<DashboardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy a settled sync view into the store
pub fn store_apply_view(store: &AppStore, view: MissionView) {
    store.missions().set(view.missions);
    store.is_loading().set(view.is_loading);
    store.last_error().set(view.last_error);
    store.pending().set(view.pending);
}

/// Show a notice and schedule its dismissal
pub fn store_push_toast(store: &AppStore, notice: Notice) {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast { id, notice });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_MILLIS).await;
        store_dismiss_toast(&store, id);
    });
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
