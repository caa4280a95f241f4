//! Profile and post analysis — the core scoring pipeline.
//!
//! Flow: handler validates input → `prompts` renders the rubric prompt →
//! `llm_client` makes one provider call → `normalizer` coerces the free-text
//! reply into the fixed result shape → `reconcile` recomputes the total
//! score from its components.

pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod reconcile;
