//! New Mission Form Input
//!
//! Raw text from the create form and the precondition checks applied before
//! anything is sent to the remote store.

use std::fmt;

use chrono::NaiveDate;
use mission_sync::{priority, MissionDraft};

/// Used when the estimated days field is left blank
const DEFAULT_ESTIMATED_DAYS: u64 = 30;

/// Create-form fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionForm {
    pub name: String,
    pub description: String,
    pub priority: String,
    pub estimated_days: String,
    pub team_size: String,
    pub location: String,
}

/// Why the form cannot be submitted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingFields(Vec<&'static str>),
    UnknownPriority(String),
    InvalidNumber { field: &'static str, value: String },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingFields(fields) => {
                write!(f, "Please fill in: {}", fields.join(", "))
            }
            FormError::UnknownPriority(value) => write!(f, "Unknown priority: {}", value),
            FormError::InvalidNumber { field, value } => {
                write!(f, "{} must be a whole number, got \"{}\"", field, value)
            }
        }
    }
}

impl MissionForm {
    /// Check the input and build a draft starting `today`
    pub fn to_draft(&self, today: NaiveDate) -> Result<MissionDraft, FormError> {
        let draft = MissionDraft::new(
            self.name.trim(),
            self.description.trim(),
            self.priority.trim(),
            today,
        );

        let missing = draft.missing_required_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        if !priority::ALL.contains(&draft.priority.as_str()) {
            return Err(FormError::UnknownPriority(draft.priority));
        }

        let days = match self.estimated_days.trim() {
            "" => DEFAULT_ESTIMATED_DAYS,
            raw => raw.parse().map_err(|_| FormError::InvalidNumber {
                field: "Estimated days",
                value: raw.to_string(),
            })?,
        };
        // Blank or unparseable team size falls back to one member
        let team_size = self.team_size.trim().parse().unwrap_or(1);

        Ok(draft
            .with_estimated_days(days)
            .with_team_members(team_size)
            .with_location(self.location.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mission_sync::{status, Progress};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    fn filled() -> MissionForm {
        MissionForm {
            name: " Deep Dive ".to_string(),
            description: "Map the trench".to_string(),
            priority: "high".to_string(),
            estimated_days: "10".to_string(),
            team_size: "6".to_string(),
            location: "Mariana".to_string(),
        }
    }

    #[test]
    fn test_to_draft() {
        let draft = filled().to_draft(today()).unwrap();
        assert_eq!(draft.name, "Deep Dive");
        assert_eq!(draft.status, status::ACTIVE);
        assert_eq!(draft.progress, Progress::MIN);
        assert_eq!(draft.start_date, today());
        assert_eq!(draft.estimated_completion, NaiveDate::from_ymd_opt(2024, 4, 11).unwrap());
        assert_eq!(draft.team_members, 6);
        assert_eq!(draft.location, "Mariana");
    }

    #[test]
    fn test_missing_fields() {
        let form = MissionForm {
            description: "   ".to_string(),
            ..filled()
        };
        assert_eq!(
            form.to_draft(today()),
            Err(FormError::MissingFields(vec!["description"]))
        );
        assert_eq!(
            MissionForm::default().to_draft(today()),
            Err(FormError::MissingFields(vec!["name", "description", "priority"]))
        );
    }

    #[test]
    fn test_unknown_priority() {
        let form = MissionForm {
            priority: "urgent".to_string(),
            ..filled()
        };
        assert_eq!(
            form.to_draft(today()),
            Err(FormError::UnknownPriority("urgent".to_string()))
        );
    }

    #[test]
    fn test_number_defaults_and_errors() {
        let form = MissionForm {
            estimated_days: String::new(),
            team_size: "lots".to_string(),
            ..filled()
        };
        let draft = form.to_draft(today()).unwrap();
        assert_eq!(draft.estimated_completion, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(draft.team_members, 1);

        let form = MissionForm {
            estimated_days: "-3".to_string(),
            ..filled()
        };
        let err = form.to_draft(today()).unwrap_err();
        assert_eq!(err.to_string(), "Estimated days must be a whole number, got \"-3\"");
    }
}
