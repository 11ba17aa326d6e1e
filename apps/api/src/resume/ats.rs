//! ATS readiness — completeness checks over a résumé snapshot.
//!
//! Called after every edit, so it must stay cheap and carry no state. Each rule
//! either awards its points or records a suggestion naming those points; the
//! higher-impact rules also record a longer improvement statement.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::ResumeDocument;

pub const MAX_ATS_SCORE: u32 = 100;
const MAX_IMPROVEMENTS: usize = 3;
const MIN_SUMMARY_CHARS: usize = 50;
const MIN_SKILLS: usize = 5;

/// Verbs that signal impact when they appear anywhere in the summary.
const SUMMARY_ACTION_VERBS: &[&str] = &[
    "built",
    "led",
    "designed",
    "improved",
    "developed",
    "created",
    "managed",
    "implemented",
    "achieved",
    "launched",
    "optimized",
    "increased",
    "reduced",
    "established",
    "spearheaded",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsBand {
    Strong,
    GettingThere,
    NeedsWork,
}

impl AtsBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 71 => AtsBand::Strong,
            s if s >= 41 => AtsBand::GettingThere,
            _ => AtsBand::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AtsBand::Strong => "Strong Resume",
            AtsBand::GettingThere => "Getting There",
            AtsBand::NeedsWork => "Needs Work",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScoreResult {
    pub score: u32,
    pub suggestions: Vec<String>,
    pub improvements: Vec<String>,
    pub band: AtsBand,
}

/// Accumulates points, suggestions and improvements as rules are checked.
#[derive(Default)]
struct AtsTally {
    score: u32,
    suggestions: Vec<String>,
    improvements: Vec<String>,
}

impl AtsTally {
    fn check(&mut self, passed: bool, points: u32, suggestion: String, improvement: Option<&str>) {
        if passed {
            self.score += points;
            return;
        }
        self.suggestions.push(format!("{suggestion} (+{points} points)"));
        if let Some(improvement) = improvement {
            self.improvements.push(improvement.to_string());
        }
    }

    fn finish(mut self) -> AtsScoreResult {
        let score = self.score.min(MAX_ATS_SCORE);
        self.improvements.truncate(MAX_IMPROVEMENTS);
        AtsScoreResult {
            score,
            suggestions: self.suggestions,
            improvements: self.improvements,
            band: AtsBand::from_score(score),
        }
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn calculate_ats_score(resume: &ResumeDocument) -> AtsScoreResult {
    let info = &resume.personal_info;
    let summary = resume.summary.trim();
    let summary_lower = summary.to_lowercase();
    let mut tally = AtsTally::default();

    tally.check(
        present(&info.full_name),
        10,
        "Add your full name".to_string(),
        Some("Add your full name to personalize your resume."),
    );
    tally.check(
        present(&info.email),
        10,
        "Add your email address".to_string(),
        Some("Add a professional email address for contact."),
    );
    tally.check(
        summary.chars().count() > MIN_SUMMARY_CHARS,
        10,
        "Write a professional summary (50+ characters)".to_string(),
        Some("Add a compelling professional summary (aim for 50-150 characters)."),
    );
    tally.check(
        resume
            .experience
            .iter()
            .any(|exp| present(&exp.title) && exp.bullets.iter().any(|b| present(b))),
        15,
        "Add at least 1 work experience with bullet points".to_string(),
        Some("Add work experience with specific accomplishments in bullet points."),
    );
    tally.check(
        resume
            .education
            .iter()
            .any(|edu| present(&edu.degree) && present(&edu.school)),
        10,
        "Add your education details".to_string(),
        Some("Include your educational background (degree and institution)."),
    );

    let skill_count = resume.skills.non_blank_count();
    tally.check(
        skill_count >= MIN_SKILLS,
        10,
        format!("Add {} more skill(s)", MIN_SKILLS.saturating_sub(skill_count)),
        Some("List at least 5 relevant skills across technical, soft, and tools."),
    );
    tally.check(
        resume
            .projects
            .iter()
            .any(|p| present(&p.title) && present(&p.description)),
        10,
        "Add at least 1 project".to_string(),
        Some("Showcase your work with at least one detailed project."),
    );
    tally.check(
        present(&info.phone),
        5,
        "Add your phone number".to_string(),
        None,
    );
    tally.check(
        present(&resume.links.linkedin),
        5,
        "Add your LinkedIn profile".to_string(),
        None,
    );
    tally.check(
        present(&resume.links.github),
        5,
        "Add your GitHub profile".to_string(),
        None,
    );
    tally.check(
        SUMMARY_ACTION_VERBS
            .iter()
            .any(|verb| summary_lower.contains(verb)),
        10,
        "Use action verbs in summary (built, led, designed, etc.)".to_string(),
        Some("Start sentences with strong action verbs to demonstrate impact."),
    );

    let result = tally.finish();
    debug!(
        score = result.score,
        suggestions = result.suggestions.len(),
        "Computed ATS score"
    );
    result
}
