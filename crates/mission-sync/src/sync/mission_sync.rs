//! Mission Sync
//!
//! Owns the cached mission list shown by the dashboard and keeps it consistent
//! with the remote store.
//!
//! Every operation goes `Idle -> Pending -> {Applied, Failed} -> Idle`:
//! - `Applied`: the remote store confirmed the change, the cache is updated.
//! - `Failed`: the cache is left as it was, `last_error` records the failure.
//!
//! Updates are never optimistic: the cache only changes after the remote store
//! confirms, and it takes the entity the store returned.
//!
//! Known limitation: there is no ordering between concurrent operations on the
//! same id. Whichever remote call completes last decides the final cache state.
//! An update that completes after a delete of the same mission does not bring
//! the entry back.

use parking_lot::RwLock;

use super::notice::{LogNotifier, Notice, Notifier};
use crate::domain::{dedup_by_id, Mission, MissionDraft, MissionPatch, MissionStats};
use crate::error::{StoreError, StoreResult};
use crate::remote::RemoteStore;

/// Everything the presentation layer reads after an operation settles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionView {
    /// Cached missions, newest creations first
    pub missions: Vec<Mission>,
    /// At least one refresh is in flight
    pub is_loading: bool,
    /// Most recent failure; cleared by a successful refresh
    pub last_error: Option<StoreError>,
    /// Operations currently pending against the remote store
    pub pending: usize,
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Refresh,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::Refresh => "refresh",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Toast text on success; loading missions is silent
    fn success_message(self) -> Option<&'static str> {
        match self {
            Operation::Refresh => None,
            Operation::Create => Some("Mission created successfully"),
            Operation::Update => Some("Mission updated successfully"),
            Operation::Delete => Some("Mission deleted successfully"),
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Operation::Refresh => "Failed to load missions from database",
            Operation::Create => "Failed to create mission",
            Operation::Update => "Failed to update mission",
            Operation::Delete => "Failed to delete mission",
        }
    }
}

/// Published view plus bookkeeping that is not part of it
#[derive(Debug, Default)]
struct SyncState {
    view: MissionView,
    /// Refreshes in flight; `is_loading` holds while this is non-zero
    refreshes: usize,
}

/// Marks an operation pending for as long as it lives
struct PendingGuard<'a> {
    state: &'a RwLock<SyncState>,
    refresh: bool,
}

impl<'a> PendingGuard<'a> {
    fn enter(state: &'a RwLock<SyncState>, refresh: bool) -> Self {
        let mut guarded = state.write();
        guarded.view.pending += 1;
        if refresh {
            guarded.refreshes += 1;
            guarded.view.is_loading = true;
        }
        Self { state, refresh }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut guarded = self.state.write();
        guarded.view.pending = guarded.view.pending.saturating_sub(1);
        if self.refresh {
            guarded.refreshes = guarded.refreshes.saturating_sub(1);
            guarded.view.is_loading = guarded.refreshes > 0;
        }
    }
}

/// Cache of the remote mission collection with confirmed-only writes
///
/// Built once per dashboard session and dropped with it.
pub struct MissionSync<S> {
    store: S,
    notifier: Box<dyn Notifier>,
    state: RwLock<SyncState>,
}

impl<S: RemoteStore> MissionSync<S> {
    /// Empty cache; notices go to the log
    pub fn new(store: S) -> Self {
        Self::with_notifier(store, LogNotifier)
    }

    pub fn with_notifier(store: S, notifier: impl Notifier + 'static) -> Self {
        Self {
            store,
            notifier: Box::new(notifier),
            state: RwLock::new(SyncState::default()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> MissionView {
        self.state.read().view.clone()
    }

    pub fn missions(&self) -> Vec<Mission> {
        self.state.read().view.missions.clone()
    }

    pub fn find(&self, id: &str) -> Option<Mission> {
        self.state.read().view.missions.iter().find(|m| m.id == id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().view.is_loading
    }

    pub fn last_error(&self) -> Option<StoreError> {
        self.state.read().view.last_error.clone()
    }

    pub fn stats(&self) -> MissionStats {
        MissionStats::from_missions(&self.state.read().view.missions)
    }

    /// Replace the cache with the remote collection.
    ///
    /// Failures are not returned; they land in `last_error` and the notifier.
    pub async fn refresh(&self) {
        let _pending = PendingGuard::enter(&self.state, true);
        log::debug!("refresh: pending");

        match self.store.list().await {
            Ok(missions) => {
                let missions = dedup_by_id(missions);
                log::info!("refresh: applied {} missions", missions.len());
                let mut state = self.state.write();
                state.view.missions = missions;
                state.view.last_error = None;
            }
            Err(err) => {
                self.fail(Operation::Refresh, err);
            }
        }
    }

    /// Persist a new mission and put it at the front of the cache
    pub async fn create(&self, draft: &MissionDraft) -> StoreResult<Mission> {
        let _pending = PendingGuard::enter(&self.state, false);
        log::debug!("create: pending ({})", draft.name);

        let mission = self
            .store
            .create(draft)
            .await
            .map_err(|err| self.fail(Operation::Create, err))?;

        {
            let mut state = self.state.write();
            state.view.missions.retain(|m| m.id != mission.id);
            state.view.missions.insert(0, mission.clone());
        }
        self.applied(Operation::Create, &mission.id);
        Ok(mission)
    }

    /// Apply `patch` remotely, then swap in the entity the store returned
    pub async fn update(&self, id: &str, patch: &MissionPatch) -> StoreResult<Mission> {
        let _pending = PendingGuard::enter(&self.state, false);
        log::debug!("update: pending ({})", id);

        let mission = self
            .store
            .update(id, patch)
            .await
            .map_err(|err| self.fail(Operation::Update, err))?;

        {
            let mut state = self.state.write();
            match state.view.missions.iter_mut().find(|m| m.id == id) {
                Some(entry) => *entry = mission.clone(),
                None => log::debug!("update: {} no longer cached, not re-inserting", id),
            }
        }
        self.applied(Operation::Update, id);
        Ok(mission)
    }

    /// Move a cached mission's progress by `delta` points (saturating at 0 and 100)
    pub async fn advance_progress(&self, id: &str, delta: i32) -> StoreResult<Mission> {
        let current = match self.find(id) {
            Some(mission) => mission.details.progress,
            None => {
                return Err(self.fail(Operation::Update, StoreError::NotFound(id.to_string())));
            }
        };
        self.update(id, &MissionPatch::progress(current.advance(delta))).await
    }

    /// Delete remotely, then drop the entry from the cache
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let _pending = PendingGuard::enter(&self.state, false);
        log::debug!("delete: pending ({})", id);

        self.store
            .delete(id)
            .await
            .map_err(|err| self.fail(Operation::Delete, err))?;

        self.state.write().view.missions.retain(|m| m.id != id);
        self.applied(Operation::Delete, id);
        Ok(())
    }

    /// Read one mission straight from the remote store; the cache is not touched
    pub async fn get(&self, id: &str) -> StoreResult<Mission> {
        self.store.get(id).await
    }

    fn applied(&self, op: Operation, subject: &str) {
        log::info!("{}: applied ({})", op.name(), subject);
        if let Some(message) = op.success_message() {
            self.notifier.notify(Notice::success(message));
        }
    }

    /// Record a failure and hand the error back for propagation
    fn fail(&self, op: Operation, err: StoreError) -> StoreError {
        log::warn!("{}: failed: {}", op.name(), err);
        self.state.write().view.last_error = Some(err.clone());
        self.notifier
            .notify(Notice::error(op.failure_message(), err.to_string()));
        err
    }
}
