//! Axum route handler for application-letter generation.

use axum::{extract::State, Json};
use tracing::warn;

use crate::analysis::normalizer::extract_json;
use crate::errors::AppError;
use crate::letter::prompts::build_letter_prompt;
use crate::letter::{Letter, LetterRequest};
use crate::state::AppState;

/// POST /api/v1/letter
///
/// Validates inputs, makes one provider call, parses `{subject, body}` out
/// of the reply. A reply with no extractable JSON is a hard 502.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<Letter>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text is required".to_string()));
    }
    if request.job_post.trim().is_empty() {
        return Err(AppError::Validation("job_post is required".to_string()));
    }

    let prompt = build_letter_prompt(&request);
    let raw = state.llm.generate(&prompt).await?;

    let value = extract_json(&raw).ok_or_else(|| {
        warn!("Letter reply was not parseable as JSON");
        AppError::Unparseable
    })?;

    let letter = Letter {
        subject: value
            .get("subject")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        body: value
            .get("body")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
    };

    Ok(Json(letter))
}
