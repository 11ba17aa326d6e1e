//! Job-to-preferences matching: the additive match score and dashboard ranking.

pub mod handlers;
pub mod ranking;
pub mod score;

pub use ranking::{rank_jobs, JobQuery, ScoredJob, SortOrder};
pub use score::{calculate_match_score, MatchTier};
