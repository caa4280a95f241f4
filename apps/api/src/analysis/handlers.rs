//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::models::{
    PostAnalysis, PostAnalyzeRequest, ProfileAnalysis, ProfileAnalyzeRequest,
};
use crate::analysis::normalizer::{extract_json, normalize_post, normalize_profile};
use crate::analysis::prompts::{build_post_prompt, build_profile_prompt};
use crate::analysis::reconcile::{reconcile_post, reconcile_profile};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/generate
///
/// Raw proxy to the text provider: `{prompt}` in, `{summary}` out.
/// Callers that compose their own prompts and parse their own replies go
/// through here.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt is required".to_string()));
    }

    let summary = state.llm.generate(&request.prompt).await?;

    Ok(Json(GenerateResponse { summary }))
}

/// POST /api/v1/analyze/profile
///
/// Full profile pipeline: validate → build rubric prompt → one provider
/// call → normalize → reconcile. Provider failures are hard errors;
/// unparseable model output degrades to the fallback result.
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileAnalyzeRequest>,
) -> Result<Json<ProfileAnalysis>, AppError> {
    if request.headline.trim().is_empty()
        || request.summary.trim().is_empty()
        || request.skills.is_empty()
        || request.target_role.trim().is_empty()
    {
        return Err(AppError::Validation(
            "headline, summary, skills and target_role are required".to_string(),
        ));
    }

    let prompt = build_profile_prompt(&request);
    let raw = state.llm.generate(&prompt).await?;

    let mut analysis = match extract_json(&raw) {
        Some(value) => normalize_profile(&value),
        None => {
            warn!("Profile analysis reply was not parseable as JSON");
            ProfileAnalysis::fallback()
        }
    };
    reconcile_profile(&mut analysis);

    Ok(Json(analysis))
}

/// POST /api/v1/analyze/post
///
/// Same pipeline for a single post: hook score, structure feedback, three
/// rewrite variants, hashtags, best posting time.
pub async fn handle_analyze_post(
    State(state): State<AppState>,
    Json(request): Json<PostAnalyzeRequest>,
) -> Result<Json<PostAnalysis>, AppError> {
    if request.post_text.trim().is_empty() {
        return Err(AppError::Validation(
            "post_text cannot be empty".to_string(),
        ));
    }

    let prompt = build_post_prompt(&request);
    let raw = state.llm.generate(&prompt).await?;

    let mut analysis = match extract_json(&raw) {
        Some(value) => normalize_post(&value),
        None => {
            warn!("Post analysis reply was not parseable as JSON");
            PostAnalysis::fallback()
        }
    };
    reconcile_post(&mut analysis);

    Ok(Json(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::UNPARSEABLE_TIP;
    use crate::llm_client::{LlmError, TextGenerator};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Stub provider returning a canned reply (or a canned failure).
    struct StubGenerator {
        reply: Result<String, fn() -> LlmError>,
    }

    impl StubGenerator {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
            }
        }

        fn failing(err: fn() -> LlmError) -> Self {
            Self { reply: Err(err) }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make_err) => Err(make_err()),
            }
        }
    }

    fn make_state(stub: StubGenerator) -> AppState {
        AppState {
            llm: Arc::new(stub),
            config: crate::config::Config {
                gemini_api_key: "test-key".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    fn profile_request() -> ProfileAnalyzeRequest {
        ProfileAnalyzeRequest {
            headline: "Fullstack Developer".to_string(),
            summary: "I build web apps".to_string(),
            skills: vec!["React".to_string()],
            target_role: "Senior Engineer".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_prompt() {
        let state = make_state(StubGenerator::replying("ignored"));
        let result = handle_generate(
            State(state),
            Json(GenerateRequest {
                prompt: "   ".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_returns_summary() {
        let state = make_state(StubGenerator::replying("a generated reply"));
        let Json(response) = handle_generate(
            State(state),
            Json(GenerateRequest {
                prompt: "say something".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.summary, "a generated reply");
    }

    #[tokio::test]
    async fn test_profile_requires_all_fields() {
        let state = make_state(StubGenerator::replying("ignored"));
        let mut request = profile_request();
        request.target_role = String::new();
        let result = handle_analyze_profile(State(state), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_profile_reconciles_inflated_score() {
        // Model claims 999 but components sum to exactly 100.
        let reply = "```json\n{\"score\":999,\"components\":{\"headline_quality\":20,\
                     \"summary_clarity\":20,\"skills_target_match\":20,\
                     \"experience_relevance\":15,\"keyword_optimization\":15,\
                     \"branding_consistency\":10}}\n```";
        let state = make_state(StubGenerator::replying(reply));
        let Json(analysis) = handle_analyze_profile(State(state), Json(profile_request()))
            .await
            .unwrap();
        assert_eq!(analysis.score, 100.0);
        assert_eq!(analysis.components.headline_quality, 20.0);
        // coerced absent fields
        assert_eq!(analysis.headline_suggestion, "");
        assert!(analysis.improvement_tips.is_empty());
    }

    #[tokio::test]
    async fn test_profile_unparseable_reply_degrades_to_fallback() {
        let state = make_state(StubGenerator::replying("not json at all"));
        let Json(analysis) = handle_analyze_profile(State(state), Json(profile_request()))
            .await
            .unwrap();
        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.improvement_tips, vec![UNPARSEABLE_TIP.to_string()]);
    }

    #[tokio::test]
    async fn test_profile_provider_failure_is_hard_error() {
        let state = make_state(StubGenerator::failing(|| LlmError::EmptyContent));
        let result = handle_analyze_profile(State(state), Json(profile_request())).await;
        assert!(matches!(result, Err(AppError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_post_rejects_empty_text() {
        let state = make_state(StubGenerator::replying("ignored"));
        let result = handle_analyze_post(
            State(state),
            Json(PostAnalyzeRequest {
                post_text: String::new(),
                niche: String::new(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_post_extracts_embedded_object_and_clamps() {
        let reply = r#"Sure! Here's the result: {"hook_score":12,"hashtags":["ai","growth"]}"#;
        let state = make_state(StubGenerator::replying(reply));
        let Json(analysis) = handle_analyze_post(
            State(state),
            Json(PostAnalyzeRequest {
                post_text: "I shipped a thing".to_string(),
                niche: "tech".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(analysis.hook_score, 10.0);
        assert_eq!(analysis.hashtags.len(), 2);
        assert_eq!(analysis.structure_feedback, "");
        assert_eq!(analysis.variants.story, "");
    }
}
