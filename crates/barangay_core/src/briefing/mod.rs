//! AI-generated daily briefing for the dashboard.
//!
//! # Responsibility
//! - Build the briefing prompt and ask a text-generation provider for it.
//! - Replace every provider failure with a fixed fallback message.
//!
//! # Invariants
//! - `DailyBriefing::get_daily_briefing` always returns text; errors are
//!   logged at warn level and never propagated.

pub mod daily;
pub mod gemini;
pub mod provider;

pub use daily::{briefing_prompt, DailyBriefing, DEFAULT_BARANGAY_NAME, FALLBACK_BRIEFING};
pub use gemini::{GeminiProvider, DEFAULT_GEMINI_MODEL};
pub use provider::{BriefingError, BriefingProvider, UnconfiguredProvider};
