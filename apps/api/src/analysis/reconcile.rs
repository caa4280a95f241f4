//! Score Reconciler — recomputes aggregate scores from their components so
//! an internally-inconsistent model claim (e.g. "score": 95 over components
//! summing to 60) never reaches the caller.
//!
//! Individual component values are deliberately NOT capped at their rubric
//! maxima before summation; only the total is clamped. A model claiming
//! components that sum past 100 reconciles to exactly 100.

use crate::analysis::models::{PostAnalysis, ProfileAnalysis};

/// Upper bound of the profile rubric (component weights 20/20/20/15/15/10).
pub const PROFILE_SCORE_MAX: f64 = 100.0;
/// Upper bound of the post hook score.
pub const HOOK_SCORE_MAX: f64 = 10.0;

/// Replaces the model-claimed total with the clamped sum of the components.
/// Idempotent: reconciling twice yields the same total.
pub fn reconcile_profile(analysis: &mut ProfileAnalysis) {
    analysis.score = analysis.components.sum().clamp(0.0, PROFILE_SCORE_MAX);
}

/// Clamps the hook score to its valid range. No sub-components to reconcile.
pub fn reconcile_post(analysis: &mut PostAnalysis) {
    analysis.hook_score = analysis.hook_score.clamp(0.0, HOOK_SCORE_MAX);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::ComponentScores;

    fn analysis_with(components: ComponentScores) -> ProfileAnalysis {
        ProfileAnalysis {
            score: 999.0, // model claim, should be discarded
            components,
            ..Default::default()
        }
    }

    #[test]
    fn test_inconsistent_total_recomputed_from_components() {
        let mut analysis = analysis_with(ComponentScores {
            headline_quality: 20.0,
            summary_clarity: 20.0,
            skills_target_match: 20.0,
            experience_relevance: 15.0,
            keyword_optimization: 15.0,
            branding_consistency: 10.0,
        });
        reconcile_profile(&mut analysis);
        assert_eq!(analysis.score, 100.0);
    }

    #[test]
    fn test_overshooting_components_clamp_to_100() {
        let mut analysis = analysis_with(ComponentScores {
            headline_quality: 40.0,
            summary_clarity: 30.0,
            skills_target_match: 30.0,
            experience_relevance: 15.0,
            keyword_optimization: 10.0,
            branding_consistency: 5.0,
        });
        assert_eq!(analysis.components.sum(), 130.0);
        reconcile_profile(&mut analysis);
        assert_eq!(analysis.score, 100.0);
    }

    #[test]
    fn test_negative_components_clamp_to_0() {
        let mut analysis = analysis_with(ComponentScores {
            headline_quality: -10.0,
            summary_clarity: 5.0,
            ..Default::default()
        });
        assert_eq!(analysis.components.sum(), -5.0);
        reconcile_profile(&mut analysis);
        assert_eq!(analysis.score, 0.0);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut analysis = analysis_with(ComponentScores {
            headline_quality: 12.0,
            summary_clarity: 8.0,
            skills_target_match: 14.0,
            experience_relevance: 9.0,
            keyword_optimization: 7.0,
            branding_consistency: 4.0,
        });
        reconcile_profile(&mut analysis);
        let first = analysis.score;
        reconcile_profile(&mut analysis);
        assert_eq!(analysis.score, first);
        assert_eq!(first, 54.0);
    }

    #[test]
    fn test_hook_score_clamped_high_and_low() {
        let mut analysis = PostAnalysis {
            hook_score: 14.0,
            ..Default::default()
        };
        reconcile_post(&mut analysis);
        assert_eq!(analysis.hook_score, 10.0);

        analysis.hook_score = -2.0;
        reconcile_post(&mut analysis);
        assert_eq!(analysis.hook_score, 0.0);
    }

    #[test]
    fn test_in_range_hook_score_unchanged() {
        let mut analysis = PostAnalysis {
            hook_score: 8.5,
            ..Default::default()
        };
        reconcile_post(&mut analysis);
        assert_eq!(analysis.hook_score, 8.5);
    }
}
