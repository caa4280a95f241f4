//! Response Normalizer — turns free-form model output into the fixed result
//! shapes, no matter how the model misbehaves.
//!
//! Extraction is an ordered list of parse strategies, tried in sequence until
//! one yields valid JSON. If all fail the caller gets `None` (never an error)
//! and substitutes the designated fallback object.
//!
//! Field coercion is unconditional: it runs even on a cleanly parsed object,
//! because a model may return the right keys with the wrong types.

use serde_json::Value;

use crate::analysis::models::{ComponentScores, PostAnalysis, PostVariants, ProfileAnalysis};

/// Ordered parse strategies. First success wins.
const PARSE_STRATEGIES: &[fn(&str) -> Option<Value>] =
    &[parse_fence_stripped, parse_braced, parse_verbatim];

/// Extracts a JSON value from arbitrary model output, or `None` if every
/// strategy fails. Never panics, never errors.
pub fn extract_json(text: &str) -> Option<Value> {
    PARSE_STRATEGIES.iter().find_map(|strategy| strategy(text))
}

/// Strategy 1: strip a wrapping ``` / ```json fence if present at both ends,
/// then strict-parse the remainder.
fn parse_fence_stripped(text: &str) -> Option<Value> {
    serde_json::from_str(strip_json_fences(text)).ok()
}

/// Strategy 2: greedy whole-object match — first `{` through last `}`.
/// Recovers JSON embedded in surrounding prose.
fn parse_braced(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Strategy 3: strict parse of the entire original text verbatim.
fn parse_verbatim(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field coercion
// ────────────────────────────────────────────────────────────────────────────

/// Numeric field: absent, non-numeric, or non-finite values become 0.
fn number_field(value: &Value, key: &str) -> f64 {
    value
        .get(key)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// String field: absent or non-string values become "". Wrong types are
/// discarded, not stringified.
fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// String-list field: absent or non-array values become []. Non-string
/// elements are dropped, not wrapped.
fn string_list_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Coerces any parsed value into the profile result shape. The returned
/// `score` is the model's raw claim; callers must reconcile it against the
/// components before returning it anywhere.
pub fn normalize_profile(value: &Value) -> ProfileAnalysis {
    let components = value.get("components").unwrap_or(&Value::Null);

    ProfileAnalysis {
        score: number_field(value, "score"),
        components: ComponentScores {
            headline_quality: number_field(components, "headline_quality"),
            summary_clarity: number_field(components, "summary_clarity"),
            skills_target_match: number_field(components, "skills_target_match"),
            experience_relevance: number_field(components, "experience_relevance"),
            keyword_optimization: number_field(components, "keyword_optimization"),
            branding_consistency: number_field(components, "branding_consistency"),
        },
        headline_suggestion: string_field(value, "headline_suggestion"),
        summary_suggestion: string_field(value, "summary_suggestion"),
        missing_keywords: string_list_field(value, "missing_keywords"),
        improvement_tips: string_list_field(value, "improvement_tips"),
        notes: string_field(value, "notes"),
    }
}

/// Coerces any parsed value into the post result shape. `hook_score` is the
/// model's raw claim; callers clamp it during reconciliation.
pub fn normalize_post(value: &Value) -> PostAnalysis {
    let variants = value.get("variants").unwrap_or(&Value::Null);

    PostAnalysis {
        hook_score: number_field(value, "hook_score"),
        structure_feedback: string_field(value, "structure_feedback"),
        variants: PostVariants {
            story: string_field(variants, "story"),
            educational: string_field(variants, "educational"),
            authority: string_field(variants, "authority"),
        },
        hashtags: string_list_field(value, "hashtags"),
        best_time: string_field(value, "best_time"),
    }
}
