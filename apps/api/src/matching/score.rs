//! Match Scoring — rates how well a job posting fits a user's declared preferences.
//!
//! Pure, deterministic, additive point rules. Each rule fires at most once:
//! 1. role keyword in title → +25
//! 2. role keyword in description → +15
//! 3. preferred location in job location → +15
//! 4. work mode preferred → +10
//! 5. experience band equal → +10
//! 6. any skill overlap → +15
//! 7. posted ≤ 2 days ago → +5
//! 8. sourced from LinkedIn → +5
//!
//! The weights sum to exactly 100; the final clamp stays in case rules are added.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::job::{JobPosting, JobSource, UserPreferences};

pub const MAX_MATCH_SCORE: u32 = 100;

const TITLE_POINTS: u32 = 25;
const DESCRIPTION_POINTS: u32 = 15;
const LOCATION_POINTS: u32 = 15;
const MODE_POINTS: u32 = 10;
const EXPERIENCE_POINTS: u32 = 10;
const SKILL_POINTS: u32 = 15;
const RECENCY_POINTS: u32 = 5;
const SOURCE_POINTS: u32 = 5;

const RECENT_DAYS: u32 = 2;

/// Presentation bucket for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Good,
    Fair,
    Low,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => MatchTier::Strong,
            s if s >= 60 => MatchTier::Good,
            s if s >= 40 => MatchTier::Fair,
            _ => MatchTier::Low,
        }
    }
}

/// Computes the 0–100 match score of `job` against `prefs`.
pub fn calculate_match_score(job: &JobPosting, prefs: &UserPreferences) -> u32 {
    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();
    let location = job.location.to_lowercase();

    let mut score = 0;

    if any_contained_in(&prefs.role_keywords, &title) {
        score += TITLE_POINTS;
    }
    if any_contained_in(&prefs.role_keywords, &description) {
        score += DESCRIPTION_POINTS;
    }
    if any_contained_in(&prefs.preferred_locations, &location) {
        score += LOCATION_POINTS;
    }
    if prefs.preferred_mode.contains(&job.mode) {
        score += MODE_POINTS;
    }
    if prefs.experience_level == Some(job.experience) {
        score += EXPERIENCE_POINTS;
    }
    if skills_overlap(&job.skills, &prefs.skills) {
        score += SKILL_POINTS;
    }
    if job.posted_days_ago <= RECENT_DAYS {
        score += RECENCY_POINTS;
    }
    if job.source == JobSource::LinkedIn {
        score += SOURCE_POINTS;
    }

    let score = score.min(MAX_MATCH_SCORE);
    debug!(job_id = %job.id, score, "Scored job against preferences");
    score
}

/// True when any trimmed, non-empty needle is a substring of `haystack_lower`.
fn any_contained_in(needles: &[String], haystack_lower: &str) -> bool {
    needles.iter().any(|needle| {
        let needle = needle.trim();
        !needle.is_empty() && haystack_lower.contains(&needle.to_lowercase())
    })
}

fn skills_overlap(job_skills: &[String], user_skills: &[String]) -> bool {
    job_skills.iter().any(|skill| {
        let skill_lower = skill.to_lowercase();
        user_skills.iter().any(|user_skill| {
            let user_skill = user_skill.trim();
            !user_skill.is_empty() && skill_lower == user_skill.to_lowercase()
        })
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
