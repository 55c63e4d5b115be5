//! Environment-driven application configuration.
//!
//! # Invariants
//! - Unset or empty variables fall back to defaults.
//! - Set but malformed values are a `ConfigError`, never silently ignored.

use crate::briefing::{DEFAULT_BARANGAY_NAME, DEFAULT_GEMINI_MODEL};
use crate::logging::{default_log_level, normalize_level};
use crate::render::Letterhead;
use crate::repo::DEFAULT_LATENCY;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

/// Loads `.env` from the working directory; a missing file is fine.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { key, value, reason } => {
                write!(f, "invalid value `{value}` for {key}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated store latency.
    pub api_latency: Duration,
    pub log_level: String,
    /// Absolute directory for rolling log files; stderr when unset.
    pub log_dir: Option<PathBuf>,
    pub print_dir: PathBuf,
    /// Barangay name used in the briefing prompt.
    pub barangay_name: String,
    pub letterhead: Letterhead,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_latency: DEFAULT_LATENCY,
            log_level: default_log_level().to_string(),
            log_dir: None,
            print_dir: std::env::temp_dir().join("barangay-print"),
            barangay_name: DEFAULT_BARANGAY_NAME.to_string(),
            letterhead: Letterhead::default(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment (call `load_dotenv()` first).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let api_latency = match get("BARANGAY_API_LATENCY_MS") {
            Some(raw) => Duration::from_millis(raw.trim().parse::<u64>().map_err(|err| {
                ConfigError::Invalid {
                    key: "BARANGAY_API_LATENCY_MS",
                    value: raw.clone(),
                    reason: err.to_string(),
                }
            })?),
            None => defaults.api_latency,
        };

        let log_level = match get("BARANGAY_LOG_LEVEL") {
            Some(raw) => normalize_level(&raw)
                .map_err(|err| ConfigError::Invalid {
                    key: "BARANGAY_LOG_LEVEL",
                    value: raw.clone(),
                    reason: err.to_string(),
                })?
                .to_string(),
            None => defaults.log_level,
        };

        let log_dir = match get("BARANGAY_LOG_DIR").map(PathBuf::from) {
            Some(dir) if !dir.is_absolute() => {
                return Err(ConfigError::Invalid {
                    key: "BARANGAY_LOG_DIR",
                    value: dir.display().to_string(),
                    reason: "must be an absolute path".to_string(),
                })
            }
            other => other,
        };

        let letterhead = Letterhead {
            province: get("BARANGAY_LETTERHEAD_PROVINCE").unwrap_or(defaults.letterhead.province),
            city: get("BARANGAY_LETTERHEAD_CITY").unwrap_or(defaults.letterhead.city),
            barangay: get("BARANGAY_LETTERHEAD_BARANGAY").unwrap_or(defaults.letterhead.barangay),
            captain: get("BARANGAY_LETTERHEAD_CAPTAIN").unwrap_or(defaults.letterhead.captain),
        };

        Ok(Self {
            api_latency,
            log_level,
            log_dir,
            print_dir: get("BARANGAY_PRINT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.print_dir),
            barangay_name: get("BARANGAY_NAME").unwrap_or(defaults.barangay_name),
            letterhead,
            gemini_api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
        })
    }
}
