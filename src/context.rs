//! Application Context
//!
//! Shared handle to the mission sync layer, provided via Leptos Context API.
//! Each action awaits the sync layer, then mirrors its view into the store.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use mission_sync::{HttpStore, MissionDraft, MissionPatch, MissionSync, StoreResult};

use crate::models::Mission;
use crate::store::{store_apply_view, AppStore, DashboardStateStoreFields};

/// Sync layer used by the dashboard session
pub type DashboardSync = MissionSync<HttpStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Sync layer; futures are not `Send`, so it lives in local storage
    sync: StoredValue<Rc<DashboardSync>, LocalStorage>,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(sync: DashboardSync, store: AppStore) -> Self {
        Self {
            sync: StoredValue::new_local(Rc::new(sync)),
            store,
        }
    }

    fn sync(&self) -> Rc<DashboardSync> {
        self.sync.get_value()
    }

    /// Mirror the sync layer's current view into the store
    fn publish(&self) {
        store_apply_view(&self.store, self.sync().snapshot());
    }

    /// Reload every mission from the remote store
    pub fn refresh(&self) {
        let ctx = *self;
        self.store.is_loading().set(true);
        spawn_local(async move {
            ctx.sync().refresh().await;
            ctx.publish();
        });
    }

    pub async fn create(self, draft: MissionDraft) -> StoreResult<Mission> {
        let result = self.sync().create(&draft).await;
        self.publish();
        result
    }

    pub async fn update(self, id: String, patch: MissionPatch) -> StoreResult<Mission> {
        let result = self.sync().update(&id, &patch).await;
        self.publish();
        result
    }

    pub async fn advance_progress(self, id: String, delta: i32) -> StoreResult<Mission> {
        let result = self.sync().advance_progress(&id, delta).await;
        self.publish();
        result
    }

    pub async fn delete(self, id: String) -> StoreResult<()> {
        let result = self.sync().delete(&id).await;
        self.publish();
        result
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
