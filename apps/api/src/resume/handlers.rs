//! Axum route handlers for the Resume API.

use axum::Json;
use tracing::info;

use crate::models::resume::ResumeDocument;
use crate::resume::ats::{calculate_ats_score, AtsScoreResult};
use crate::resume::bullets::{review_experience_bullets, BulletReview};

/// POST /api/v1/resume/ats-score
pub async fn handle_ats_score(Json(resume): Json<ResumeDocument>) -> Json<AtsScoreResult> {
    let result = calculate_ats_score(&resume);
    info!("ATS score {} ({})", result.score, result.band.label());
    Json(result)
}

/// POST /api/v1/resume/bullets
///
/// Returns an action-verb and metrics check for every non-blank experience bullet.
pub async fn handle_bullet_review(Json(resume): Json<ResumeDocument>) -> Json<Vec<BulletReview>> {
    Json(review_experience_bullets(&resume))
}
