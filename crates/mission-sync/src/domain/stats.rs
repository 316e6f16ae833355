//! Dashboard summary figures computed over a set of missions.

use serde::Serialize;

use super::mission::Mission;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MissionStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub critical: usize,
    pub team_members: u64,
    /// Mean progress in percent; 0 when there are no missions
    pub average_progress: f64,
    /// Distinct non-empty locations in first-seen order
    pub locations: Vec<String>,
}

impl MissionStats {
    pub fn from_missions<'a>(missions: impl IntoIterator<Item = &'a Mission>) -> Self {
        let mut stats = Self::default();
        let mut progress_sum = 0u64;

        for mission in missions {
            stats.total += 1;
            if mission.is_active() {
                stats.active += 1;
            }
            if mission.is_completed() {
                stats.completed += 1;
            }
            if mission.is_critical() {
                stats.critical += 1;
            }
            stats.team_members += u64::from(mission.details.team_members);
            progress_sum += u64::from(mission.details.progress.value());

            let location = mission.details.location.trim();
            if !location.is_empty() && !stats.locations.iter().any(|l| l == location) {
                stats.locations.push(location.to_string());
            }
        }

        if stats.total > 0 {
            stats.average_progress = progress_sum as f64 / stats.total as f64;
        }
        stats
    }
}
