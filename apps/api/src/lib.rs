//! Heuristic career-prep scoring: job match scores, résumé ATS readiness, and
//! job-description analysis with a confidence-driven readiness score.
//!
//! Every scorer is a pure function over its input snapshot. The HTTP layer in
//! `routes` is a thin JSON wrapper around them.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod knowledge;
pub mod matching;
pub mod models;
pub mod resume;
pub mod routes;
pub mod state;

pub use analysis::{analyze_job_description, toggle_skill_confidence};
pub use matching::calculate_match_score;
pub use resume::calculate_ats_score;
