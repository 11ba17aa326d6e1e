//! Skill extraction — unanchored, case-insensitive keyword scan of the JD.
//!
//! Short keywords over-match ("Go" inside "Google", "OS" inside "across").
//! That fuzziness is accepted heuristic behaviour.

use crate::knowledge::KnowledgeBase;
use crate::models::analysis::{ExtractedSkills, SkillCategory};

/// Matched skills plus the counts the readiness score is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillExtraction {
    pub skills: ExtractedSkills,
    /// Matched keywords, fallback skills included.
    pub total_skills: usize,
    /// Categories with at least one match; 1 when the fallback was used.
    pub detected_categories: usize,
    pub used_fallback: bool,
}

impl SkillExtraction {
    pub fn has(&self, category: SkillCategory) -> bool {
        self.skills.get(&category).is_some_and(|s| !s.is_empty())
    }

    pub fn first_in(&self, category: SkillCategory) -> Option<&str> {
        self.skills
            .get(&category)
            .and_then(|s| s.first())
            .map(String::as_str)
    }

    /// Every extracted skill in category order.
    pub fn flattened(&self) -> Vec<&str> {
        self.skills
            .values()
            .flat_map(|s| s.iter().map(String::as_str))
            .collect()
    }
}

pub fn extract_skills(jd_text: &str, kb: &KnowledgeBase) -> SkillExtraction {
    let jd_lower = jd_text.to_lowercase();
    let mut skills = ExtractedSkills::new();

    for (category, keywords) in &kb.keywords {
        let found: Vec<String> = keywords
            .iter()
            .filter(|keyword| jd_lower.contains(&keyword.to_lowercase()))
            .cloned()
            .collect();
        if !found.is_empty() {
            skills.insert(*category, found);
        }
    }

    let total_skills: usize = skills.values().map(Vec::len).sum();

    if total_skills == 0 {
        skills.insert(SkillCategory::Other, kb.fallback_skills.clone());
        return SkillExtraction {
            skills,
            total_skills: kb.fallback_skills.len(),
            detected_categories: 1,
            used_fallback: true,
        };
    }

    SkillExtraction {
        detected_categories: skills.len(),
        skills,
        total_skills,
        used_fallback: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(jd: &str) -> SkillExtraction {
        extract_skills(jd, KnowledgeBase::builtin())
    }

    #[test]
    fn test_groups_matches_by_category() {
        let result = extract("Java and MySQL with Docker.");
        assert_eq!(result.skills[&SkillCategory::Languages], vec!["Java"]);
        assert_eq!(result.skills[&SkillCategory::Data], vec!["SQL", "MySQL"]);
        assert_eq!(result.skills[&SkillCategory::CloudDevOps], vec!["Docker"]);
        assert_eq!(result.total_skills, 4);
        assert_eq!(result.detected_categories, 3);
        assert!(!result.used_fallback);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let result = extract("experience with REACT.JS required");
        assert_eq!(result.skills[&SkillCategory::Web], vec!["React", "React.js"]);
    }

    #[test]
    fn test_short_keywords_over_match() {
        let result = extract("Ongoing work");
        assert!(result.skills[&SkillCategory::Languages].contains(&"Go".to_string()));
    }

    #[test]
    fn test_empty_text_falls_back_to_other() {
        let result = extract("");
        assert!(result.used_fallback);
        assert_eq!(result.skills.len(), 1);
        assert_eq!(
            result.skills[&SkillCategory::Other],
            vec!["Communication", "Problem Solving", "Basic Coding", "Projects"]
        );
        assert_eq!(result.total_skills, 4);
        assert_eq!(result.detected_categories, 1);
    }

    #[test]
    fn test_categories_without_matches_are_absent() {
        let result = extract("Kotlin");
        assert_eq!(result.skills.len(), 1);
        assert!(!result.has(SkillCategory::Web));
        assert_eq!(result.first_in(SkillCategory::Languages), Some("Kotlin"));
    }

    #[test]
    fn test_flattened_follows_category_order() {
        let result = extract("Selenium, Python, DSA");
        assert_eq!(result.flattened(), vec!["DSA", "Python", "Selenium"]);
    }
}
