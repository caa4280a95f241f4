pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::letter::handlers as letter_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Raw prompt proxy — caller composes the prompt and parses the reply
        .route("/api/ai/generate", post(analysis_handlers::handle_generate))
        // Full analysis pipelines
        .route(
            "/api/v1/analyze/profile",
            post(analysis_handlers::handle_analyze_profile),
        )
        .route(
            "/api/v1/analyze/post",
            post(analysis_handlers::handle_analyze_post),
        )
        // Application letter
        .route(
            "/api/v1/letter",
            post(letter_handlers::handle_generate_letter),
        )
        .with_state(state)
}
