//! Readiness scoring — breadth, depth and context bonuses, capped below 100.
//!
//! The automated score tops out at `AUTOMATED_CAP` so the remaining headroom
//! can only be earned through confidence toggles.

use crate::analysis::extraction::SkillExtraction;

pub const MAX_READINESS: u32 = 100;
pub const AUTOMATED_CAP: u32 = 70;
pub const KNOW_BONUS: u32 = 3;

const BASE_POINTS: u32 = 10;
const PER_CATEGORY: u32 = 5;
const PER_SKILL: u32 = 2;
const DEPTH_CAP: u32 = 30;
const CONTEXT_BONUS: u32 = 5;
const DETAILED_JD_CHARS: usize = 800;

/// Score computed once per analysis; stored as both readiness and base score.
pub fn compute_base_score(
    extraction: &SkillExtraction,
    company: &str,
    role: &str,
    jd_text: &str,
) -> u32 {
    let breadth = extraction.detected_categories as u32 * PER_CATEGORY;
    let depth = (extraction.total_skills as u32)
        .saturating_mul(PER_SKILL)
        .min(DEPTH_CAP);

    let mut score = BASE_POINTS + breadth + depth;
    if !company.trim().is_empty() {
        score += CONTEXT_BONUS;
    }
    if !role.trim().is_empty() {
        score += CONTEXT_BONUS;
    }
    if jd_text.chars().count() > DETAILED_JD_CHARS {
        score += CONTEXT_BONUS;
    }

    score.min(AUTOMATED_CAP)
}

/// Live score for a base score and the number of skills marked as known.
pub fn readiness_with_known(base_score: u32, known: usize) -> u32 {
    let bonus = (known as u32).saturating_mul(KNOW_BONUS);
    base_score.saturating_add(bonus).min(MAX_READINESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extraction::extract_skills;
    use crate::knowledge::KnowledgeBase;

    fn base_for(company: &str, role: &str, jd: &str) -> u32 {
        let extraction = extract_skills(jd, KnowledgeBase::builtin());
        compute_base_score(&extraction, company, role, jd)
    }

    #[test]
    fn test_fallback_only_scores_23() {
        // 10 base + 5 (one category) + 8 (4 fallback skills) + 0 context
        assert_eq!(base_for("", "", ""), 23);
        assert_eq!(base_for("Acme", "SDE", ""), 33);
    }

    #[test]
    fn test_two_categories_two_skills() {
        // 10 + 10 breadth + 4 depth + 10 context
        assert_eq!(base_for("Google", "SDE", "Java, SQL"), 34);
    }

    #[test]
    fn test_whitespace_context_does_not_count() {
        assert_eq!(base_for("   ", "\t", "Java, SQL"), 24);
    }

    #[test]
    fn test_long_jd_bonus_requires_more_than_800_chars() {
        let exactly = format!("Java, SQL{}", " ".repeat(800 - 9));
        assert_eq!(exactly.chars().count(), 800);
        assert_eq!(base_for("", "", &exactly), 24);

        let longer = format!("{exactly} ");
        assert_eq!(base_for("", "", &longer), 29);
    }

    #[test]
    fn test_keyword_heavy_jd_caps_at_70() {
        let jd = "DSA, Java, Python, React, Node.js, SQL, MongoDB, AWS, Docker, Kubernetes, \
                  Selenium, Jest, JUnit, Kafka, Redis, HTML, CSS";
        assert_eq!(base_for("Google", "SDE", jd), AUTOMATED_CAP);
    }

    #[test]
    fn test_readiness_with_known_clamps_at_100() {
        assert_eq!(readiness_with_known(70, 0), 70);
        assert_eq!(readiness_with_known(70, 5), 85);
        assert_eq!(readiness_with_known(70, 10), 100);
        assert_eq!(readiness_with_known(70, usize::MAX), 100);
    }
}
