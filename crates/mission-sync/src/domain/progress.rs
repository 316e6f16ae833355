//! Progress Percentage
//!
//! A mission's completion percentage. Values outside [0, 100] are clamped on
//! construction, on decode and on every increment, so a `Progress` can never
//! hold an out-of-range value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion percentage in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const MIN: Progress = Progress(0);
    pub const MAX: Progress = Progress(100);

    /// Clamp any integer into a valid percentage
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move by `delta` points, saturating at both bounds
    pub fn advance(self, delta: i32) -> Self {
        Self::new(i64::from(self.0) + i64::from(delta))
    }

    pub fn is_complete(self) -> bool {
        self == Self::MAX
    }
}

impl From<i64> for Progress {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
