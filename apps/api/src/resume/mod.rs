//! Résumé readiness: the ATS completeness score and per-bullet quality hints.

pub mod ats;
pub mod bullets;
pub mod handlers;

pub use ats::{calculate_ats_score, AtsBand, AtsScoreResult};
pub use bullets::{check_bullet_quality, review_experience_bullets, BulletQuality};
