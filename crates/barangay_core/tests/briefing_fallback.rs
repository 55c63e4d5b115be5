use async_trait::async_trait;
use barangay_core::{
    BriefingError, BriefingProvider, DailyBriefing, GeminiProvider, FALLBACK_BRIEFING,
};
use std::sync::Arc;

struct Exploding;

#[async_trait]
impl BriefingProvider for Exploding {
    fn name(&self) -> &str {
        "exploding"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, BriefingError> {
        Err(BriefingError::Parse("connection reset".to_string()))
    }
}

#[tokio::test]
async fn failing_provider_resolves_to_fallback() {
    let briefing = DailyBriefing::new(Arc::new(Exploding));
    assert_eq!(briefing.get_daily_briefing("Alex").await, FALLBACK_BRIEFING);
}

#[tokio::test]
async fn unreachable_gemini_endpoint_resolves_to_fallback() {
    // Port 9 (discard) is closed on test hosts; the request fails fast.
    let provider = GeminiProvider::new("test-key", "gemini-2.5-flash")
        .with_base_url("http://127.0.0.1:9/v1beta");
    let briefing = DailyBriefing::new(Arc::new(provider));

    let text = briefing.get_daily_briefing("Alex").await;
    assert_eq!(text, FALLBACK_BRIEFING);
    assert!(text.starts_with("**COMMUNICATION INTERFERENCE**"));
}
