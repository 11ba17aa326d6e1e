//! Confidence toggles — the only post-creation change an analysis supports.
//!
//! Toggling is a reducer: it takes a result by reference and returns a new one.
//! The readiness score is recomputed from `base_score` and the number of known
//! skills instead of being nudged incrementally, so any toggle sequence that
//! returns to the same map returns to the same score, even near the 100 cap.
//! Results without a `base_score` get one inferred on their first toggle.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::analysis::readiness::{readiness_with_known, KNOW_BONUS};
use crate::models::analysis::{AnalysisResult, Confidence};

/// How many practice skills `weak_skills` reports.
const WEAK_SKILL_LIMIT: usize = 3;

/// Flips `skill` between practice and know and refreshes the score and `updated_at`.
/// A skill that is not in the confidence map leaves the result unchanged.
pub fn toggle_skill_confidence(result: &AnalysisResult, skill: &str) -> AnalysisResult {
    apply_toggle_at(result, skill, Utc::now())
}

pub fn apply_toggle_at(result: &AnalysisResult, skill: &str, now: DateTime<Utc>) -> AnalysisResult {
    let mut next = result.clone();
    let Some(current) = next.skill_confidence_map.get_mut(skill) else {
        return next;
    };
    *current = current.flipped();

    let base = base_score_of(result);
    next.base_score = Some(base);
    next.readiness_score = readiness_with_known(base, known_count(&next));
    next.updated_at = now;

    debug!(
        analysis_id = %next.id,
        skill,
        readiness = next.readiness_score,
        "Toggled skill confidence"
    );
    next
}

/// Stored base score, or the readiness score minus the known-skill bonus.
pub fn base_score_of(result: &AnalysisResult) -> u32 {
    result.base_score.unwrap_or_else(|| {
        let bonus = (known_count(result) as u32).saturating_mul(KNOW_BONUS);
        result.readiness_score.saturating_sub(bonus)
    })
}

pub fn known_count(result: &AnalysisResult) -> usize {
    result
        .skill_confidence_map
        .values()
        .filter(|c| **c == Confidence::Know)
        .count()
}

/// Up to three skills still marked practice, in extraction order.
pub fn weak_skills(result: &AnalysisResult) -> Vec<&str> {
    result
        .all_skills()
        .filter(|skill| result.skill_confidence_map.get(*skill) == Some(&Confidence::Practice))
        .take(WEAK_SKILL_LIMIT)
        .collect()
}
