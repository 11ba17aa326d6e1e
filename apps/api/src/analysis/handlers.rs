//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::analysis::{toggle_skill_confidence, JobDescriptionAnalyzer};
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub analysis: AnalysisResult,
    pub skill: String,
}

/// POST /api/v1/analysis
///
/// Runs the full JD analysis. Empty fields degrade to fallback output rather than erroring.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    let analyzer = JobDescriptionAnalyzer::new(&state.knowledge);
    let result = analyzer.analyze_with(
        &request.company,
        &request.role,
        &request.jd_text,
        &mut state.random_source(),
    );
    info!(
        "Analysis {} created (readiness {})",
        result.id, result.readiness_score
    );
    Json(result)
}

/// POST /api/v1/analysis/toggle
///
/// Returns the analysis with `skill` flipped between practice and know.
pub async fn handle_toggle(
    Json(request): Json<ToggleRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if !request
        .analysis
        .skill_confidence_map
        .contains_key(&request.skill)
    {
        return Err(AppError::NotFound(format!(
            "Skill '{}' is not part of analysis {}",
            request.skill, request.analysis.id
        )));
    }
    Ok(Json(toggle_skill_confidence(
        &request.analysis,
        &request.skill,
    )))
}
