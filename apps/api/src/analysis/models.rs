//! Request and result shapes for the profile and post analyzers.

use serde::{Deserialize, Serialize};

/// Fallback improvement tip shown when the model reply cannot be parsed.
pub const UNPARSEABLE_TIP: &str = "Unable to parse AI response. Please try again.";
/// Note attached to fallback results.
pub const UNPARSEABLE_NOTE: &str = "AI returned non-JSON; using fallback.";

// ────────────────────────────────────────────────────────────────────────────
// Profile analyzer
// ────────────────────────────────────────────────────────────────────────────

/// Profile fields submitted for analysis. Only headline, summary, skills and
/// target_role are required by the handler; the rest are optional context.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileAnalyzeRequest {
    #[serde(default)]
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub target_role: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_region")]
    pub target_region: String,
}

fn default_languages() -> Vec<String> {
    vec!["Indonesian".to_string()]
}

fn default_region() -> String {
    "Asia/Jakarta".to_string()
}

/// Per-category scores from the 100-point profile rubric.
/// Weights: 20/20/20/15/15/10.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub headline_quality: f64,
    pub summary_clarity: f64,
    pub skills_target_match: f64,
    pub experience_relevance: f64,
    pub keyword_optimization: f64,
    pub branding_consistency: f64,
}

impl ComponentScores {
    /// Sum of all component scores, before clamping.
    pub fn sum(&self) -> f64 {
        self.headline_quality
            + self.summary_clarity
            + self.skills_target_match
            + self.experience_relevance
            + self.keyword_optimization
            + self.branding_consistency
    }
}

/// Canonical profile analysis result. Invariants after normalization:
/// `score` equals the clamped sum of `components`, every list field is a
/// list, every string field is a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub score: f64,
    pub components: ComponentScores,
    pub headline_suggestion: String,
    pub summary_suggestion: String,
    pub missing_keywords: Vec<String>,
    pub improvement_tips: Vec<String>,
    pub notes: String,
}

impl ProfileAnalysis {
    /// Safe default returned when the model reply is unparseable.
    pub fn fallback() -> Self {
        Self {
            improvement_tips: vec![UNPARSEABLE_TIP.to_string()],
            notes: UNPARSEABLE_NOTE.to_string(),
            ..Self::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Post analyzer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PostAnalyzeRequest {
    pub post_text: String,
    #[serde(default)]
    pub niche: String,
}

/// Three rewritten captions of the original post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostVariants {
    pub story: String,
    pub educational: String,
    pub authority: String,
}

/// Canonical post analysis result. `hook_score` is clamped to [0, 10].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostAnalysis {
    pub hook_score: f64,
    pub structure_feedback: String,
    pub variants: PostVariants,
    pub hashtags: Vec<String>,
    pub best_time: String,
}

impl PostAnalysis {
    /// Safe default returned when the model reply is unparseable.
    pub fn fallback() -> Self {
        Self {
            structure_feedback: UNPARSEABLE_NOTE.to_string(),
            ..Self::default()
        }
    }
}
