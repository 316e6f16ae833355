//! Remote Store Configuration
//!
//! Where the mission collection lives and how long a request may take.

use serde::{Deserialize, Serialize};

/// API base used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

const URL_VAR: &str = "MISSION_API_URL";
const TIMEOUT_VAR: &str = "MISSION_API_TIMEOUT_SECS";

/// Remote store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// API root; missions live under `{base_url}/missions`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Only honoured on native targets.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: None,
        }
    }

    /// Parse a JSON config document; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read `MISSION_API_URL` / `MISSION_API_TIMEOUT_SECS` from the process environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(URL_VAR) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        match std::env::var(TIMEOUT_VAR).map(|raw| raw.parse::<u64>()) {
            Ok(Ok(secs)) => config.request_timeout_secs = Some(secs),
            Ok(Err(e)) => log::warn!("Ignoring {}: {}", TIMEOUT_VAR, e),
            Err(_) => {}
        }
        config
    }

    /// `MISSION_API_URL` captured at compile time (browser builds have no environment)
    pub fn from_build_env() -> Self {
        match option_env!("MISSION_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Base URL without trailing slashes
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
