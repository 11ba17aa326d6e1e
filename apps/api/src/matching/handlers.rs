//! Axum route handlers for the Match API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::ranking::{rank_jobs, JobQuery, ScoredJob};
use crate::matching::score::{calculate_match_score, MatchTier, MAX_MATCH_SCORE};
use crate::models::job::{JobPosting, UserPreferences};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job: JobPosting,
    #[serde(default)]
    pub preferences: UserPreferences,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u32,
    pub tier: MatchTier,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub query: JobQuery,
}

/// POST /api/v1/match/score
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let score = calculate_match_score(&request.job, &request.preferences);
    Json(ScoreResponse {
        score,
        tier: MatchTier::from_score(score),
    })
}

/// POST /api/v1/match/rank
///
/// Scores every job, applies the query filters, and sorts.
pub async fn handle_rank(
    Json(request): Json<RankRequest>,
) -> Result<Json<Vec<ScoredJob>>, AppError> {
    if request.preferences.min_match_score > MAX_MATCH_SCORE {
        return Err(AppError::Validation(format!(
            "minMatchScore must be between 0 and {MAX_MATCH_SCORE}, got {}",
            request.preferences.min_match_score
        )));
    }

    let ranked = rank_jobs(&request.jobs, &request.preferences, &request.query);
    info!("Ranked {} of {} jobs", ranked.len(), request.jobs.len());
    Ok(Json(ranked))
}
