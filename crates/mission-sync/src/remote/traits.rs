//! Remote Store Layer - Core Trait
//!
//! Defines the five operations against the remote mission collection.
//! Implementations issue exactly one request per call and never retry.

use async_trait::async_trait;

use crate::domain::{Mission, MissionDraft, MissionPatch};
use crate::error::StoreResult;

/// CRUD access to the remote mission collection
///
/// Futures are not `Send`: the client runs on a single cooperative thread
/// (the browser event loop), where the HTTP transport is not `Send` either.
#[async_trait(?Send)]
pub trait RemoteStore {
    /// Fetch every mission
    async fn list(&self) -> StoreResult<Vec<Mission>>;

    /// Fetch one mission by id
    async fn get(&self, id: &str) -> StoreResult<Mission>;

    /// Persist a new mission; the returned entity carries its assigned id
    async fn create(&self, draft: &MissionDraft) -> StoreResult<Mission>;

    /// Apply a partial update and return the full, updated mission
    async fn update(&self, id: &str, patch: &MissionPatch) -> StoreResult<Mission>;

    /// Remove a mission
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
