//! Company classification and interview round mapping.
//!
//! Classification is a roster lookup: a company whose name contains a known
//! enterprise name is Enterprise, everything else is treated as a Startup.

use crate::analysis::extraction::SkillExtraction;
use crate::knowledge::KnowledgeBase;
use crate::models::analysis::{CompanyIntel, CompanyType, RoundInfo, SkillCategory};

pub fn classify_company(company: &str, kb: &KnowledgeBase) -> CompanyType {
    let company_lower = company.to_lowercase();
    let is_enterprise = kb
        .enterprise_roster
        .iter()
        .any(|name| company_lower.contains(&name.to_lowercase()));
    if is_enterprise {
        CompanyType::Enterprise
    } else {
        CompanyType::Startup
    }
}

pub fn build_company_intel(company: &str, kb: &KnowledgeBase) -> CompanyIntel {
    let company_type = classify_company(company, kb);
    let name = if company.is_empty() {
        "Target Company".to_string()
    } else {
        company.to_string()
    };

    let (industry, hiring_focus) = match company_type {
        CompanyType::Enterprise => (
            "Technology Services",
            "Strong emphasis on DSA, CS Fundamentals (OS, DBMS, Networks), and Problem Solving.",
        ),
        CompanyType::Startup => (
            "Tech Product / Startup",
            "Focus on practical development skills, framework knowledge, and ability to ship code.",
        ),
    };

    CompanyIntel {
        name,
        industry: industry.to_string(),
        company_type,
        hiring_focus: hiring_focus.to_string(),
    }
}

fn round(name: &str, description: impl Into<String>, why: &str) -> RoundInfo {
    RoundInfo {
        round_name: name.to_string(),
        description: description.into(),
        why_it_matters: why.to_string(),
    }
}

/// Expected interview stages for the company type, mentioning detected stacks.
pub fn build_round_map(company_type: CompanyType, extraction: &SkillExtraction) -> Vec<RoundInfo> {
    match company_type {
        CompanyType::Enterprise => {
            let tech_stack = extraction
                .skills
                .get(&SkillCategory::Languages)
                .filter(|s| !s.is_empty())
                .map(|s| s.join("/"))
                .unwrap_or_else(|| "Core CS".to_string());
            vec![
                round(
                    "Round 1: Online Assessment",
                    "Aptitude + DSA (2-3 coding problems).",
                    "Filters candidates on basic problem-solving speed.",
                ),
                round(
                    "Round 2: Technical Interview I",
                    format!("DSA & {tech_stack} concepts."),
                    "Validates deep understanding of algorithms and data structures.",
                ),
                round(
                    "Round 3: Technical Interview II",
                    "System Design (LLD) or Project deep dive.",
                    "Tests ability to write scalable, maintainable code.",
                ),
                round(
                    "Round 4: HR / Managerial",
                    "Behavioral & Cultural fit.",
                    "Ensures alignment with company values.",
                ),
            ]
        }
        CompanyType::Startup => {
            let web_stack = extraction
                .skills
                .get(&SkillCategory::Web)
                .filter(|s| !s.is_empty())
                .map(|s| s.join(", "))
                .unwrap_or_else(|| "Full Stack".to_string());
            let db_stack = extraction.first_in(SkillCategory::Data).unwrap_or("Database");
            vec![
                round(
                    "Round 1: Screening / Task",
                    format!("Take-home assignment or Live Coding ({web_stack} focus)."),
                    "Pragmatic test of 'Can you build this?'.",
                ),
                round(
                    "Round 2: Technical Discussion",
                    format!("Code review of task + {db_stack} & System Design."),
                    "Assesses code quality and framework mastery.",
                ),
                round(
                    "Round 3: Culture & Founder Round",
                    "Vision alignment & adaptability.",
                    "CRITICAL: Startups hire for attitude and ownership.",
                ),
            ]
        }
    }
}
