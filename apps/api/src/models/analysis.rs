use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of keyword categories. Declaration order is the scan order and
/// the iteration order of every `BTreeMap<SkillCategory, _>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Core CS")]
    CoreCs,
    Languages,
    Web,
    Data,
    #[serde(rename = "Cloud/DevOps")]
    CloudDevOps,
    Testing,
    Other,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "Core CS",
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web",
            SkillCategory::Data => "Data",
            SkillCategory::CloudDevOps => "Cloud/DevOps",
            SkillCategory::Testing => "Testing",
            SkillCategory::Other => "Other",
        }
    }
}

/// Category → matched keywords. Only categories with at least one match are present.
pub type ExtractedSkills = BTreeMap<SkillCategory, Vec<String>>;

/// Self-assessed confidence for one extracted skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Know,
    #[default]
    Practice,
}

impl Confidence {
    pub fn flipped(self) -> Self {
        match self {
            Confidence::Know => Confidence::Practice,
            Confidence::Practice => Confidence::Know,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    Startup,
    Enterprise,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyIntel {
    pub name: String,
    pub industry: String,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
    pub hiring_focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfo {
    pub round_name: String,
    pub description: String,
    pub why_it_matters: String,
}

/// Full output of a job-description analysis.
///
/// `readiness_score` moves with confidence toggles; `base_score` is the
/// untouched automated score. Analyses saved before `base_score` existed
/// deserialize with `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: ExtractedSkills,
    pub plan: Vec<PlanDay>,
    pub checklist: BTreeMap<String, Vec<String>>,
    pub questions: Vec<String>,
    pub readiness_score: u32,
    #[serde(default)]
    pub base_score: Option<u32>,
    #[serde(default)]
    pub skill_confidence_map: BTreeMap<String, Confidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_intel: Option<CompanyIntel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_mapping: Option<Vec<RoundInfo>>,
}

impl AnalysisResult {
    /// All extracted skills flattened in category order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.extracted_skills
            .values()
            .flat_map(|skills| skills.iter().map(String::as_str))
    }
}
