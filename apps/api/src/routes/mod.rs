pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/score", post(matching::handle_score))
        .route("/api/v1/match/rank", post(matching::handle_rank))
        // Resume API
        .route("/api/v1/resume/ats-score", post(resume::handle_ats_score))
        .route("/api/v1/resume/bullets", post(resume::handle_bullet_review))
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/analysis/toggle", post(analysis::handle_toggle))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
