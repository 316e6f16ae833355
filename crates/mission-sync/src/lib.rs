//! Mission Sync
//!
//! Layered architecture:
//! - domain: Mission entity, drafts, patches and summaries
//! - remote: Remote store client (REST API or in-process)
//! - sync: Cache of the remote collection kept for the dashboard
//! - config / error: Store configuration and the uniform failure type

pub mod config;
pub mod domain;
pub mod error;
pub mod remote;
pub mod sync;

pub use config::StoreConfig;
pub use domain::{priority, status, Mission, MissionDraft, MissionPatch, MissionStats, Progress};
pub use error::{ErrorKind, StoreError, StoreResult};
pub use remote::{HttpStore, MemoryStore, RemoteStore};
pub use sync::{LogNotifier, MissionSync, MissionView, Notice, NoticeLevel, Notifier};
