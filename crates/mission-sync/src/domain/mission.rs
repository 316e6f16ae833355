//! Mission Entity
//!
//! A tracked unit of work with status, priority, progress and staffing data.
//! `MissionDraft` is a mission before the remote store has assigned it an id;
//! `Mission` only exists once it has been persisted.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::iso_date;
use super::progress::Progress;

/// Well-known status values.
///
/// Status stays an open string: dashboard variants have disagreed on the exact
/// set, so only the presentation layer decides what it accepts.
pub mod status {
    pub const ACTIVE: &str = "active";
    pub const COMPLETED: &str = "completed";
    pub const PAUSED: &str = "paused";

    pub const ALL: &[&str] = &[ACTIVE, COMPLETED, PAUSED];
}

/// Well-known priority values (open string, see [`status`])
pub mod priority {
    pub const LOW: &str = "low";
    pub const MEDIUM: &str = "medium";
    pub const HIGH: &str = "high";
    pub const CRITICAL: &str = "critical";

    pub const ALL: &[&str] = &[LOW, MEDIUM, HIGH, CRITICAL];
}

/// Mission fields without an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionDraft {
    pub name: String,
    pub status: String,
    pub progress: Progress,
    pub priority: String,
    #[serde(with = "iso_date")]
    pub start_date: NaiveDate,
    #[serde(with = "iso_date")]
    pub estimated_completion: NaiveDate,
    pub description: String,
    pub team_members: u32,
    pub location: String,
}

impl MissionDraft {
    /// New active mission starting on `start_date` with no progress yet
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            status: status::ACTIVE.to_string(),
            progress: Progress::MIN,
            priority: priority.into(),
            start_date,
            estimated_completion: start_date,
            description: description.into(),
            team_members: 1,
            location: String::new(),
        }
    }

    /// Set the estimated completion `days` after the start date
    pub fn with_estimated_days(mut self, days: u64) -> Self {
        self.estimated_completion = self
            .start_date
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        self
    }

    /// Team size; zero is bumped to one
    pub fn with_team_members(mut self, team_members: u32) -> Self {
        self.team_members = team_members.max(1);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Names of the required fields that are blank
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("priority", &self.priority),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// A mission persisted by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MissionRecord")]
pub struct Mission {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub details: MissionDraft,
}

/// Wire shape of a mission; the identity may arrive as `_id`, `id` or both
#[derive(Deserialize)]
struct MissionRecord {
    #[serde(rename = "_id", default)]
    object_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(flatten)]
    details: MissionDraft,
}

impl TryFrom<MissionRecord> for Mission {
    type Error = &'static str;

    fn try_from(record: MissionRecord) -> Result<Self, Self::Error> {
        let id = record
            .object_id
            .or(record.id)
            .ok_or("missing field `_id`")?;
        Ok(Mission::new(id, record.details))
    }
}

impl Mission {
    pub fn new(id: impl Into<String>, details: MissionDraft) -> Self {
        Self {
            id: id.into(),
            details,
        }
    }

    pub fn is_active(&self) -> bool {
        self.details.status == status::ACTIVE
    }

    pub fn is_completed(&self) -> bool {
        self.details.status == status::COMPLETED
    }

    pub fn is_critical(&self) -> bool {
        self.details.priority == priority::CRITICAL
    }
}

impl Entity for Mission {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial field replacement; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso_date::option")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso_date::option")]
    pub estimated_completion: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_members: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl MissionPatch {
    /// Patch that only sets progress (clamped into [0, 100])
    pub fn progress(progress: impl Into<Progress>) -> Self {
        Self {
            progress: Some(progress.into()),
            ..Default::default()
        }
    }

    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply every present field onto `draft`
    pub fn apply_to(&self, draft: &mut MissionDraft) {
        if let Some(name) = &self.name {
            draft.name = name.clone();
        }
        if let Some(status) = &self.status {
            draft.status = status.clone();
        }
        if let Some(progress) = self.progress {
            draft.progress = progress;
        }
        if let Some(priority) = &self.priority {
            draft.priority = priority.clone();
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = start_date;
        }
        if let Some(estimated_completion) = self.estimated_completion {
            draft.estimated_completion = estimated_completion;
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if let Some(team_members) = self.team_members {
            draft.team_members = team_members;
        }
        if let Some(location) = &self.location {
            draft.location = location.clone();
        }
    }
}
