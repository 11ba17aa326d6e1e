//! Likely-question selection from the curated question bank.

use std::collections::HashSet;

use crate::analysis::extraction::SkillExtraction;
use crate::analysis::random::RandomSource;
use crate::knowledge::KnowledgeBase;

pub const MAX_QUESTIONS: usize = 10;
pub const MIN_QUESTIONS: usize = 5;

/// Builds up to `MAX_QUESTIONS` questions for the extracted skills.
///
/// 1. union the question set of the first topic matching each skill
/// 2. fewer than `MIN_QUESTIONS` → add fallback topics of matched categories
/// 3. dedup (first occurrence wins), shuffle
/// 4. still short → append the general behavioural set
/// 5. truncate
///
/// Only the order depends on `rng`; membership is deterministic.
pub fn select_questions(
    extraction: &SkillExtraction,
    kb: &KnowledgeBase,
    rng: &mut dyn RandomSource,
) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();

    for skill in extraction.flattened() {
        if let Some(topic) = kb.topic_for_skill(skill) {
            pool.extend(topic.questions.iter().cloned());
        }
    }

    if pool.len() < MIN_QUESTIONS {
        for (category, topic) in &kb.fallback_topics {
            if extraction.has(*category) {
                if let Some(questions) = kb.questions_for(topic) {
                    pool.extend(questions.iter().cloned());
                }
            }
        }
    }

    let mut seen = HashSet::new();
    let mut questions: Vec<String> = pool
        .into_iter()
        .filter(|q| seen.insert(q.clone()))
        .collect();

    rng.shuffle(&mut questions);

    if questions.len() < MIN_QUESTIONS {
        for question in &kb.general_questions {
            if seen.insert(question.clone()) {
                questions.push(question.clone());
            }
        }
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}
