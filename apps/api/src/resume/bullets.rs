//! Per-bullet quality hints for experience entries.
//!
//! A bullet is strong when it opens with an action verb and carries a number.
//! Both checks are advisory and never affect the ATS score.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;

/// Verbs that open a strong accomplishment bullet.
const BULLET_ACTION_VERBS: &[&str] = &[
    "built",
    "developed",
    "designed",
    "implemented",
    "led",
    "improved",
    "created",
    "optimized",
    "automated",
    "managed",
    "delivered",
    "achieved",
    "launched",
    "established",
    "architected",
    "engineered",
    "streamlined",
    "enhanced",
    "coordinated",
    "drove",
    "executed",
    "initiated",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletQuality {
    pub has_action_verb: bool,
    pub has_numbers: bool,
}

impl BulletQuality {
    pub fn is_strong(&self) -> bool {
        self.has_action_verb && self.has_numbers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletReview {
    pub entry_index: usize,
    pub bullet: String,
    pub quality: BulletQuality,
}

pub fn check_bullet_quality(bullet: &str) -> BulletQuality {
    let first_word = bullet
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();

    BulletQuality {
        has_action_verb: BULLET_ACTION_VERBS.contains(&first_word.as_str()),
        has_numbers: bullet.chars().any(|c| c.is_ascii_digit()),
    }
}

/// Reviews every non-blank bullet across all experience entries, in order.
pub fn review_experience_bullets(resume: &ResumeDocument) -> Vec<BulletReview> {
    resume
        .experience
        .iter()
        .enumerate()
        .flat_map(|(entry_index, entry)| {
            entry
                .bullets
                .iter()
                .filter(|b| !b.trim().is_empty())
                .map(move |bullet| BulletReview {
                    entry_index,
                    bullet: bullet.clone(),
                    quality: check_bullet_quality(bullet),
                })
        })
        .collect()
}
