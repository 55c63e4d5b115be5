//! Daily briefing with a fixed fallback.

use crate::briefing::provider::BriefingProvider;
use crate::logging::sanitize_message;
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

pub const DEFAULT_BARANGAY_NAME: &str = "Starlight Haven";

/// Returned whenever the provider fails or produces no text.
pub const FALLBACK_BRIEFING: &str = "**COMMUNICATION INTERFERENCE**\n\n\
We're experiencing unexpected solar flare activity, disrupting our connection to the AI core. \
The system is operating on local backups. Please try again later.\n\n\
*Error logged for diagnostics.*";

/// Prompt asking for a short Markdown "Captain's Daily Briefing".
pub fn briefing_prompt(user_name: &str, barangay_name: &str) -> String {
    format!(
        "You are the AI for the Barangay Starship \"BSS {barangay_name}\", a futuristic barangay management system.\n\
         The user, {user_name}, has just logged into the command center dashboard.\n\
         Generate a short, inspiring, and slightly sci-fi \"Captain's Daily Briefing\".\n\
         \n\
         Include the following elements:\n\
         1. A formal but inspiring greeting to the user.\n\
         2. A fictional, positive status update on one or two key community metrics (e.g., \"life support stable at 100%\", \"community morale is high\", \"resource allocation optimal\").\n\
         3. A motivational closing statement.\n\
         \n\
         Keep it concise, under 100 words. Format it using Markdown.\n\
         Example Tone: Star Trek captain's log, futuristic mission control."
    )
}

pub struct DailyBriefing {
    provider: Arc<dyn BriefingProvider>,
    barangay_name: String,
}

impl DailyBriefing {
    pub fn new(provider: Arc<dyn BriefingProvider>) -> Self {
        Self {
            provider,
            barangay_name: DEFAULT_BARANGAY_NAME.to_string(),
        }
    }

    pub fn with_barangay_name(mut self, name: impl Into<String>) -> Self {
        self.barangay_name = name.into();
        self
    }

    pub fn barangay_name(&self) -> &str {
        &self.barangay_name
    }

    /// Briefing Markdown for `user_name`. Never fails.
    pub async fn get_daily_briefing(&self, user_name: &str) -> String {
        let started_at = Instant::now();
        let prompt = briefing_prompt(user_name, &self.barangay_name);

        match self.provider.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(
                    "event=briefing_fetch module=briefing provider={} status=ok chars={} duration_ms={}",
                    self.provider.name(),
                    text.chars().count(),
                    started_at.elapsed().as_millis()
                );
                text
            }
            Ok(_) => {
                warn!(
                    "event=briefing_fetch module=briefing provider={} status=fallback error=empty_text",
                    self.provider.name()
                );
                FALLBACK_BRIEFING.to_string()
            }
            Err(err) => {
                warn!(
                    "event=briefing_fetch module=briefing provider={} status=fallback error={} detail={}",
                    self.provider.name(),
                    err.kind(),
                    sanitize_message(&err.to_string(), 160)
                );
                FALLBACK_BRIEFING.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{briefing_prompt, DailyBriefing, FALLBACK_BRIEFING};
    use crate::briefing::provider::{BriefingError, BriefingProvider, UnconfiguredProvider};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct Scripted {
        reply: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn replying(reply: Result<&str, u16>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(str::to_string),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl BriefingProvider for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, prompt: &str) -> Result<String, BriefingError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(BriefingError::Api {
                    status: *status,
                    body: "quota exceeded".to_string(),
                }),
            }
        }
    }

    #[test]
    fn prompt_names_user_and_ship() {
        let prompt = briefing_prompt("Captain Reyes", "Starlight Haven");
        assert!(prompt.contains("\"BSS Starlight Haven\""));
        assert!(prompt.contains("The user, Captain Reyes, has just logged in"));
        assert!(prompt.contains("under 100 words"));
    }

    #[tokio::test]
    async fn provider_text_is_returned_as_is() {
        let provider = Scripted::replying(Ok("**All systems nominal.**"));
        let briefing = DailyBriefing::new(provider.clone()).with_barangay_name("Dumlog");

        assert_eq!(
            briefing.get_daily_briefing("Alex").await,
            "**All systems nominal.**"
        );
        let prompts = provider.prompts.lock().unwrap();
        assert!(prompts[0].contains("BSS Dumlog"));
    }

    #[tokio::test]
    async fn failures_and_blank_text_fall_back() {
        let failing = DailyBriefing::new(Scripted::replying(Err(429)));
        assert_eq!(failing.get_daily_briefing("Alex").await, FALLBACK_BRIEFING);

        let blank = DailyBriefing::new(Scripted::replying(Ok("  \n")));
        assert_eq!(blank.get_daily_briefing("Alex").await, FALLBACK_BRIEFING);

        let unconfigured = DailyBriefing::new(Arc::new(UnconfiguredProvider));
        assert_eq!(unconfigured.get_daily_briefing("Alex").await, FALLBACK_BRIEFING);
    }
}
