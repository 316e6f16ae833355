//! Frontend Models
//!
//! Mission types come from mission-sync; the rest is dashboard-only state.

pub use mission_sync::{priority, status, Mission, MissionStats, Notice, NoticeLevel};

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Missions,
    Create,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Missions, Tab::Create];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Missions => "Missions",
            Tab::Create => "Create Mission",
        }
    }
}

/// A notice on screen, dismissed by id
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Badge CSS class for a status value
pub fn status_class(value: &str) -> &'static str {
    match value {
        status::ACTIVE => "badge status-active",
        status::COMPLETED => "badge status-completed",
        status::PAUSED => "badge status-paused",
        _ => "badge",
    }
}

/// Choices for the status select; an unknown current value is kept so it stays selected
pub fn status_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = status::ALL.iter().map(|value| value.to_string()).collect();
    if !current.is_empty() && !status::ALL.contains(&current) {
        options.push(current.to_string());
    }
    options
}

/// Badge CSS class for a priority value
pub fn priority_class(value: &str) -> &'static str {
    match value {
        priority::CRITICAL => "badge priority-critical",
        priority::HIGH => "badge priority-high",
        priority::MEDIUM => "badge priority-medium",
        priority::LOW => "badge priority-low",
        _ => "badge",
    }
}
