//! Domain Layer
//!
//! Contains the mission entity, its draft/patch forms and dashboard summaries.
//! This layer has NO transport dependencies (only serde and chrono).

mod entity;
mod iso_date;
mod mission;
mod progress;
mod stats;

pub use entity::{dedup_by_id, Entity};
pub use mission::{priority, status, Mission, MissionDraft, MissionPatch};
pub use progress::Progress;
pub use stats::MissionStats;
