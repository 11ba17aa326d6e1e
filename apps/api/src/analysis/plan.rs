//! Study plan and round checklist synthesis.

use std::collections::BTreeMap;

use crate::analysis::extraction::SkillExtraction;
use crate::knowledge::{
    KnowledgeBase, COMPANY_PLACEHOLDER, SKILL_REVIEW_PLACEHOLDER, TOP_SKILL_PLACEHOLDER,
    WEAK_AREA_PLACEHOLDER,
};
use crate::models::analysis::{PlanDay, SkillCategory};

const DEFAULT_TOP_SKILL: &str = "Core Skills";
const WEAK_AREA_LABEL: &str = "weak/uncommon";
const DEFAULT_COMPANY_LABEL: &str = "the company";
/// Skills given their own revision task in the tech round.
const SKILL_REVIEW_LIMIT: usize = 3;
/// Template day that receives the web build task ("Project & Stack").
const PROJECT_DAY: usize = 2;
/// Template day that receives the SQL drill ("Basics & Core CS").
const BASICS_DAY: usize = 0;

/// Category with the most matches. On a tie the later category wins.
pub fn dominant_category(extraction: &SkillExtraction) -> Option<SkillCategory> {
    let mut best: Option<(SkillCategory, usize)> = None;
    for (category, skills) in &extraction.skills {
        if best.map_or(true, |(_, count)| skills.len() >= count) {
            best = Some((*category, skills.len()));
        }
    }
    best.map(|(category, _)| category)
}

/// Renders a fresh plan from the immutable template.
pub fn render_plan(extraction: &SkillExtraction, kb: &KnowledgeBase) -> Vec<PlanDay> {
    let top_skill = dominant_category(extraction)
        .and_then(|c| extraction.first_in(c))
        .unwrap_or(DEFAULT_TOP_SKILL);

    let mut plan: Vec<PlanDay> = kb
        .plan_template
        .iter()
        .map(|day| PlanDay {
            day: day.day.clone(),
            focus: day.focus.clone(),
            tasks: day
                .tasks
                .iter()
                .map(|task| {
                    task.replace(TOP_SKILL_PLACEHOLDER, top_skill)
                        .replace(WEAK_AREA_PLACEHOLDER, WEAK_AREA_LABEL)
                })
                .collect(),
        })
        .collect();

    if let Some(web) = extraction.first_in(SkillCategory::Web) {
        if let Some(day) = plan.get_mut(PROJECT_DAY) {
            day.tasks
                .push(format!("Build/Refactor a small feature using {web}"));
        }
    }
    if extraction.has(SkillCategory::Data) {
        if let Some(day) = plan.get_mut(BASICS_DAY) {
            day.tasks.push("Write 5 complex SQL queries".to_string());
        }
    }

    plan
}

/// Renders the round checklist. Round labels sort in round order.
pub fn build_checklist(
    extraction: &SkillExtraction,
    company: &str,
    kb: &KnowledgeBase,
) -> BTreeMap<String, Vec<String>> {
    let company_label = if company.is_empty() {
        DEFAULT_COMPANY_LABEL
    } else {
        company
    };

    kb.checklist_template
        .iter()
        .map(|round| {
            let mut tasks = Vec::with_capacity(round.tasks.len());
            for task in &round.tasks {
                if task == SKILL_REVIEW_PLACEHOLDER {
                    tasks.extend(
                        extraction
                            .flattened()
                            .into_iter()
                            .take(SKILL_REVIEW_LIMIT)
                            .map(|skill| format!("Revise advanced {skill} concepts")),
                    );
                } else {
                    tasks.push(task.replace(COMPANY_PLACEHOLDER, company_label));
                }
            }
            (round.round.clone(), tasks)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extraction::extract_skills;
    use crate::knowledge::ChecklistRound;

    fn extraction(jd: &str) -> SkillExtraction {
        extract_skills(jd, KnowledgeBase::builtin())
    }

    #[test]
    fn test_plan_always_has_five_days() {
        for jd in ["", "Java, SQL", "React, Node.js, HTML, MySQL"] {
            let plan = render_plan(&extraction(jd), KnowledgeBase::builtin());
            assert_eq!(plan.len(), 5, "jd: {jd:?}");
        }
    }

    #[test]
    fn test_placeholders_are_substituted() {
        let plan = render_plan(&extraction("Kotlin"), KnowledgeBase::builtin());
        assert_eq!(plan[2].tasks[2], "Deep dive into Kotlin concepts");
        assert_eq!(plan[3].tasks[2], "Review weak/uncommon concepts");
        assert!(plan
            .iter()
            .flat_map(|d| &d.tasks)
            .all(|t| !t.contains('{')));
    }

    #[test]
    fn test_fallback_top_skill_comes_from_other() {
        let plan = render_plan(&extraction(""), KnowledgeBase::builtin());
        assert_eq!(plan[2].tasks[2], "Deep dive into Communication concepts");
    }

    #[test]
    fn test_tie_resolves_to_later_category() {
        // Languages and Data each have one match; Data comes later.
        let ext = extraction("Java, SQL");
        assert_eq!(dominant_category(&ext), Some(SkillCategory::Data));
        let plan = render_plan(&ext, KnowledgeBase::builtin());
        assert_eq!(plan[2].tasks[2], "Deep dive into SQL concepts");
    }

    #[test]
    fn test_web_and_data_add_tasks() {
        let plan = render_plan(&extraction("Angular with MySQL"), KnowledgeBase::builtin());
        assert_eq!(
            plan[2].tasks.last().unwrap(),
            "Build/Refactor a small feature using Angular"
        );
        assert_eq!(plan[0].tasks.last().unwrap(), "Write 5 complex SQL queries");
    }

    #[test]
    fn test_no_web_or_data_leaves_template_task_counts() {
        let plan = render_plan(&extraction("Kotlin"), KnowledgeBase::builtin());
        assert!(plan.iter().all(|d| d.tasks.len() == 3));
    }

    #[test]
    fn test_checklist_has_four_rounds_in_order() {
        let checklist =
            build_checklist(&extraction("Java, SQL"), "Google", KnowledgeBase::builtin());
        let rounds: Vec<&str> = checklist.keys().map(String::as_str).collect();
        assert_eq!(
            rounds,
            vec![
                "Round 1: Aptitude & Basics",
                "Round 2: DSA & Core CS",
                "Round 3: Tech Interview",
                "Round 4: Managerial / HR",
            ]
        );
        assert_eq!(checklist["Round 4: Managerial / HR"][0], "Research about Google");
    }

    #[test]
    fn test_tech_round_uses_first_three_skills() {
        let checklist = build_checklist(
            &extraction("Selenium, Python, DSA, Kotlin"),
            "",
            KnowledgeBase::builtin(),
        );
        let tech = &checklist["Round 3: Tech Interview"];
        assert_eq!(
            tech,
            &vec![
                "Prepare Project Deep-dive".to_string(),
                "Revise advanced DSA concepts".to_string(),
                "Revise advanced Python concepts".to_string(),
                "Revise advanced Kotlin concepts".to_string(),
                "System Design Basics (if applicable)".to_string(),
            ]
        );
        assert_eq!(
            checklist["Round 4: Managerial / HR"][0],
            "Research about the company"
        );
    }

    #[test]
    fn test_checklist_follows_custom_template() {
        let mut kb = KnowledgeBase::default();
        kb.checklist_template = vec![ChecklistRound {
            round: "Onsite".to_string(),
            tasks: vec![
                "{SKILL_REVIEW}".to_string(),
                "Meet the {COMPANY} team".to_string(),
            ],
        }];
        let checklist = build_checklist(&extraction("Kotlin"), "Acme", &kb);
        assert_eq!(checklist.len(), 1);
        assert_eq!(
            checklist["Onsite"],
            vec!["Revise advanced Kotlin concepts", "Meet the Acme team"]
        );
    }
}
