//! In-Memory Remote Store
//!
//! Keeps the mission collection in-process, behaving like the REST API:
//! ids are assigned on create, required fields are checked, unknown ids
//! yield `NotFound`. Failures can be injected for the next request.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::{Mutex, MutexGuard};

use super::traits::RemoteStore;
use crate::domain::{Mission, MissionDraft, MissionPatch};
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default)]
struct Collection {
    missions: Vec<Mission>,
    next_id: u64,
    injected: VecDeque<StoreError>,
    requests: usize,
}

impl Collection {
    fn allocate_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("mission-{}", self.next_id);
            if !self.missions.iter().any(|m| m.id == id) {
                return id;
            }
        }
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.missions
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

/// Remote store held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: Mutex<Collection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with already persisted missions
    pub fn with_missions(missions: Vec<Mission>) -> Self {
        let store = Self::new();
        store.collection.lock().missions = missions;
        store
    }

    /// Make the next request fail with `err` instead of touching the collection
    pub fn fail_next(&self, err: StoreError) {
        self.collection.lock().injected.push_back(err);
    }

    /// Number of requests received so far, failed ones included
    pub fn request_count(&self) -> usize {
        self.collection.lock().requests
    }

    /// Server-side view of the collection
    pub fn missions(&self) -> Vec<Mission> {
        self.collection.lock().missions.clone()
    }

    /// Count the request and surface any injected failure
    fn begin(&self) -> StoreResult<MutexGuard<'_, Collection>> {
        let mut collection = self.collection.lock();
        collection.requests += 1;
        match collection.injected.pop_front() {
            Some(err) => Err(err),
            None => Ok(collection),
        }
    }
}

#[async_trait(?Send)]
impl RemoteStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Mission>> {
        Ok(self.begin()?.missions.clone())
    }

    async fn get(&self, id: &str) -> StoreResult<Mission> {
        let collection = self.begin()?;
        let index = collection.position(id)?;
        Ok(collection.missions[index].clone())
    }

    async fn create(&self, draft: &MissionDraft) -> StoreResult<Mission> {
        let mut collection = self.begin()?;
        let missing = draft.missing_required_fields();
        if !missing.is_empty() {
            return Err(StoreError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }
        let mission = Mission::new(collection.allocate_id(), draft.clone());
        collection.missions.push(mission.clone());
        Ok(mission)
    }

    async fn update(&self, id: &str, patch: &MissionPatch) -> StoreResult<Mission> {
        let mut collection = self.begin()?;
        let index = collection.position(id)?;
        let mission = &mut collection.missions[index];
        patch.apply_to(&mut mission.details);
        Ok(mission.clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut collection = self.begin()?;
        let index = collection.position(id)?;
        collection.missions.remove(index);
        Ok(())
    }
}
