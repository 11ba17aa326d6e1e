//! Job ranking — scores a job set against preferences and applies dashboard filters.

use serde::{Deserialize, Serialize};

use crate::matching::score::{calculate_match_score, MatchTier};
use crate::models::job::{ExperienceBand, JobPosting, JobSource, UserPreferences, WorkMode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Latest,
    Oldest,
    MatchScore,
}

/// Filters applied after scoring. Unset fields do not filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub experience: Option<ExperienceBand>,
    pub mode: Option<WorkMode>,
    pub source: Option<JobSource>,
    /// Keep only jobs at or above `UserPreferences::min_match_score`.
    pub matches_only: bool,
    pub sort: SortOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: u32,
    pub tier: MatchTier,
}

/// Scores, filters and sorts `jobs`. Sorting is stable, so equal keys keep input order.
pub fn rank_jobs(jobs: &[JobPosting], prefs: &UserPreferences, query: &JobQuery) -> Vec<ScoredJob> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let location = query.location.as_deref().filter(|s| !s.is_empty());

    let mut ranked: Vec<ScoredJob> = jobs
        .iter()
        .filter(|job| {
            search.as_deref().map_or(true, |term| {
                job.title.to_lowercase().contains(term) || job.company.to_lowercase().contains(term)
            })
        })
        .filter(|job| location.map_or(true, |loc| job.location.contains(loc)))
        .filter(|job| query.experience.map_or(true, |e| job.experience == e))
        .filter(|job| query.mode.map_or(true, |m| job.mode == m))
        .filter(|job| query.source.map_or(true, |s| job.source == s))
        .map(|job| {
            let match_score = calculate_match_score(job, prefs);
            ScoredJob {
                job: job.clone(),
                match_score,
                tier: MatchTier::from_score(match_score),
            }
        })
        .filter(|scored| !query.matches_only || scored.match_score >= prefs.min_match_score)
        .collect();

    match query.sort {
        SortOrder::Latest => ranked.sort_by_key(|s| s.job.posted_days_ago),
        SortOrder::Oldest => ranked.sort_by(|a, b| b.job.posted_days_ago.cmp(&a.job.posted_days_ago)),
        SortOrder::MatchScore => ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
    }

    ranked
}
