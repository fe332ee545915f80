//! Insight generation — narrative commentary on a ranked list.
//!
//! `AppState` holds an `Arc<dyn InsightGenerator>`. Failures never fail the
//! request: `insight_or_fallback` swaps any error for a fixed fallback string.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::{LlmClient, LlmError};
use crate::models::StudentProfile;
use crate::recommendation::prompts::build_insight_prompt;
use crate::recommendation::ranker::ScoredRecommendation;

pub const MISSING_KEY_FALLBACK: &str = "API key not loaded.";
pub const EMPTY_INSIGHT_FALLBACK: &str = "AI insight unavailable.";
pub const SERVICE_DOWN_FALLBACK: &str = "AI service temporarily unavailable.";

#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn generate(
        &self,
        student: &StudentProfile,
        recommendations: &[ScoredRecommendation],
    ) -> Result<String, LlmError>;
}

/// Gemini-backed generator. Built without a client when no API key is configured.
pub struct GeminiInsightGenerator {
    llm: Option<LlmClient>,
}

impl GeminiInsightGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm: Some(llm) }
    }

    pub fn unconfigured() -> Self {
        Self { llm: None }
    }
}

#[async_trait]
impl InsightGenerator for GeminiInsightGenerator {
    async fn generate(
        &self,
        student: &StudentProfile,
        recommendations: &[ScoredRecommendation],
    ) -> Result<String, LlmError> {
        let llm = self.llm.as_ref().ok_or(LlmError::MissingApiKey)?;
        let prompt = build_insight_prompt(student, recommendations);
        llm.call_text(&prompt).await
    }
}

pub fn fallback_for(error: &LlmError) -> &'static str {
    match error {
        LlmError::MissingApiKey => MISSING_KEY_FALLBACK,
        LlmError::EmptyContent => EMPTY_INSIGHT_FALLBACK,
        _ => SERVICE_DOWN_FALLBACK,
    }
}

/// Runs the generator under `timeout`; on any failure logs and returns the fallback text.
pub async fn insight_or_fallback(
    generator: &dyn InsightGenerator,
    student: &StudentProfile,
    recommendations: &[ScoredRecommendation],
    timeout: Duration,
) -> String {
    let result = tokio::time::timeout(timeout, generator.generate(student, recommendations))
        .await
        .unwrap_or_else(|_| Err(LlmError::Timeout(timeout)));

    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("Insight generation degraded: {e}");
            fallback_for(&e).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Fixed {
        Text(&'static str),
        Empty,
        ApiDown,
    }

    #[async_trait]
    impl InsightGenerator for Fixed {
        async fn generate(
            &self,
            _student: &StudentProfile,
            _recommendations: &[ScoredRecommendation],
        ) -> Result<String, LlmError> {
            match self {
                Fixed::Text(text) => Ok(text.to_string()),
                Fixed::Empty => Err(LlmError::EmptyContent),
                Fixed::ApiDown => Err(LlmError::Api {
                    status: 500,
                    message: "boom".to_string(),
                }),
            }
        }
    }

    struct Stalled;

    #[async_trait]
    impl InsightGenerator for Stalled {
        async fn generate(
            &self,
            _student: &StudentProfile,
            _recommendations: &[ScoredRecommendation],
        ) -> Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    fn student() -> StudentProfile {
        StudentProfile {
            cgpa: 8.5,
            ielts: 7.0,
            gre: 320,
            budget: 50_000.0,
            course: "Computer".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_passes_text_through() {
        let text =
            insight_or_fallback(&Fixed::Text("Looks good."), &student(), &[], Duration::from_secs(1))
                .await;
        assert_eq!(text, "Looks good.");
    }

    #[tokio::test]
    async fn test_unconfigured_generator_reports_missing_key() {
        let generator = GeminiInsightGenerator::unconfigured();
        let text = insight_or_fallback(&generator, &student(), &[], Duration::from_secs(1)).await;
        assert_eq!(text, MISSING_KEY_FALLBACK);
    }

    #[tokio::test]
    async fn test_empty_content_fallback() {
        let text =
            insight_or_fallback(&Fixed::Empty, &student(), &[], Duration::from_secs(1)).await;
        assert_eq!(text, EMPTY_INSIGHT_FALLBACK);
    }

    #[tokio::test]
    async fn test_api_error_fallback() {
        let text =
            insight_or_fallback(&Fixed::ApiDown, &student(), &[], Duration::from_secs(1)).await;
        assert_eq!(text, SERVICE_DOWN_FALLBACK);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_degrades_to_fallback() {
        let text = insight_or_fallback(&Stalled, &student(), &[], Duration::from_secs(20)).await;
        assert_eq!(text, SERVICE_DOWN_FALLBACK);
    }
}
