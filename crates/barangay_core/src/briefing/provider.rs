use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Text generation backend for the daily briefing.
#[async_trait]
pub trait BriefingProvider: Send + Sync {
    /// Short provider label for log events.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, BriefingError>;
}

#[derive(Debug)]
pub enum BriefingError {
    /// No API key was configured.
    NotConfigured,
    Http(reqwest::Error),
    Api { status: u16, body: String },
    Parse(String),
}

impl BriefingError {
    /// Stable label for log events; never includes response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Http(_) => "http",
            Self::Api { .. } => "api",
            Self::Parse(_) => "parse",
        }
    }
}

impl Display for BriefingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => f.write_str("briefing provider is not configured"),
            Self::Http(err) => write!(f, "briefing request failed: {err}"),
            Self::Api { status, body } => write!(f, "briefing API error {status}: {body}"),
            Self::Parse(message) => write!(f, "failed to parse briefing response: {message}"),
        }
    }
}

impl Error for BriefingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BriefingError {
    /// Strips the request URL so endpoints and query strings stay out of logs.
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value.without_url())
    }
}

/// Stand-in used when no API key is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredProvider;

#[async_trait]
impl BriefingProvider for UnconfiguredProvider {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, BriefingError> {
        Err(BriefingError::NotConfigured)
    }
}
