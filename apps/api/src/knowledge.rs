//! Knowledge base — the static tables the JD analyzer reads.
//!
//! Keyword categories, question bank, enterprise roster and plan template live
//! here as data so they can be extended (or replaced from a JSON file via
//! `KNOWLEDGE_BASE_PATH`) without touching any scoring logic.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::analysis::{PlanDay, SkillCategory};

/// Placeholder replaced with the dominant category's first skill.
pub const TOP_SKILL_PLACEHOLDER: &str = "{TOP_SKILL}";
/// Placeholder replaced with the weak-area label.
pub const WEAK_AREA_PLACEHOLDER: &str = "{WEAK_AREA}";
/// Checklist task expanded into one revision task per leading extracted skill.
pub const SKILL_REVIEW_PLACEHOLDER: &str = "{SKILL_REVIEW}";
/// Replaced with the target company name in checklist tasks.
pub const COMPANY_PLACEHOLDER: &str = "{COMPANY}";

/// A curated set of interview questions keyed by topic name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTopic {
    pub topic: String,
    pub questions: Vec<String>,
}

/// One interview round of the preparation checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRound {
    pub round: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    /// Category → keywords scanned against the lower-cased JD.
    pub keywords: BTreeMap<SkillCategory, Vec<String>>,
    /// Topics in lookup order. The first topic matching a skill wins.
    pub question_topics: Vec<QuestionTopic>,
    /// Behavioural questions used to top up a short question list.
    pub general_questions: Vec<String>,
    /// Topic whose questions are added when a category matched but few questions accumulated.
    pub fallback_topics: BTreeMap<SkillCategory, String>,
    pub enterprise_roster: Vec<String>,
    pub plan_template: Vec<PlanDay>,
    pub checklist_template: Vec<ChecklistRound>,
    /// Skills reported under "Other" when nothing in the JD matched.
    pub fallback_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in tables
// ────────────────────────────────────────────────────────────────────────────

const KEYWORDS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::CoreCs,
        &[
            "DSA",
            "Data Structures",
            "Algorithms",
            "OOP",
            "Object Oriented",
            "DBMS",
            "Database Management",
            "OS",
            "Operating Systems",
            "Computer Networks",
            "CN",
            "System Design",
        ],
    ),
    (
        SkillCategory::Languages,
        &[
            "Java",
            "Python",
            "JavaScript",
            "TypeScript",
            "C++",
            "C#",
            "Golang",
            "Go",
            "Ruby",
            "Swift",
            "Kotlin",
            "Rust",
            "PHP",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "React", "React.js", "Next.js", "Node.js", "Express", "Node", "Angular", "Vue", "HTML",
            "CSS", "Tailwind", "Bootstrap", "REST", "GraphQL", "API",
        ],
    ),
    (
        SkillCategory::Data,
        &[
            "SQL",
            "MySQL",
            "PostgreSQL",
            "MongoDB",
            "NoSQL",
            "Redis",
            "Elasticsearch",
            "Cassandra",
            "Kafka",
            "Spark",
            "Hadoop",
        ],
    ),
    (
        SkillCategory::CloudDevOps,
        &[
            "AWS",
            "Amazon Web Services",
            "Azure",
            "GCP",
            "Google Cloud",
            "Docker",
            "Kubernetes",
            "K8s",
            "CI/CD",
            "Jenkins",
            "Git",
            "GitHub",
            "GitLab",
            "Linux",
            "Bash",
            "Shell",
        ],
    ),
    (
        SkillCategory::Testing,
        &[
            "Selenium",
            "Cypress",
            "Playwright",
            "Jest",
            "Mocha",
            "JUnit",
            "PyTest",
            "TestNG",
            "Manual Testing",
            "Automation",
        ],
    ),
];

const QUESTION_TOPICS: &[(&str, &[&str])] = &[
    (
        "Java",
        &[
            "Explain the internal working of HashMap in Java.",
            "Difference between Abstract Class and Interface in Java 8+.",
            "How does Garbage Collection work?",
            "Explain SOLID principles with Java examples.",
        ],
    ),
    (
        "Python",
        &[
            "Explain decorators and generators in Python.",
            "Difference between list and tuple.",
            "How is memory managed in Python?",
            "Explain GIL (Global Interpreter Lock).",
        ],
    ),
    (
        "JavaScript",
        &[
            "Explain the Event Loop.",
            "Difference between var, let, and const.",
            "What are closures?",
            "Explain Prototypal Inheritance.",
        ],
    ),
    (
        "React",
        &[
            "Difference between Virtual DOM and Real DOM.",
            "Explain React Lifecycle methods (or Hooks flow).",
            "What is Prop Drilling and how to avoid it?",
            "Explain Context API vs Redux.",
        ],
    ),
    (
        "SQL",
        &[
            "Explain ACID properties.",
            "Difference between Clustered and Non-Clustered Index.",
            "Write a query to find the second highest salary.",
            "Explain Normalization forms.",
        ],
    ),
    (
        "DSA",
        &[
            "How would you detect a cycle in a linked list?",
            "Explain QuickSort vs MergeSort complexity.",
            "Implement a stack using queues.",
            "Find the longest common subsequence.",
        ],
    ),
    (
        "System Design",
        &[
            "How would you design a URL shortener?",
            "Explain Load Balancing techniques.",
            "CAP Theorem explained.",
            "Horizontal vs Vertical Scaling.",
        ],
    ),
];

const GENERAL_QUESTIONS: &[&str] = &[
    "Tell me about a challenging project you worked on.",
    "Where do you see yourself in 5 years?",
    "Why do you want to join this company?",
    "Describe a conflict you resolved in a team.",
];

const FALLBACK_TOPICS: &[(SkillCategory, &str)] = &[
    (SkillCategory::CoreCs, "DSA"),
    (SkillCategory::Data, "SQL"),
];

const ENTERPRISE_ROSTER: &[&str] = &[
    "Google",
    "Microsoft",
    "Amazon",
    "Meta",
    "Netflix",
    "Adobe",
    "Salesforce",
    "TCS",
    "Infosys",
    "Wipro",
    "Accenture",
    "IBM",
    "Oracle",
    "Cisco",
    "Intel",
    "Samsung",
    "Deloitte",
    "Cognizant",
    "Capgemini",
];

const PLAN_TEMPLATE: &[(&str, &str, &[&str])] = &[
    (
        "Day 1-2",
        "Basics & Core CS",
        &[
            "Revise OOP Guidelines",
            "Brush up on DBMS Constraints & SQL Basics",
            "OS: Process Management & Threads",
        ],
    ),
    (
        "Day 3-4",
        "DSA & Coding",
        &[
            "Solve 5 Array/String problems",
            "Practice Linked List & Tree traversals",
            "Revise Time Complexity analysis",
        ],
    ),
    (
        "Day 5",
        "Project & Stack",
        &[
            "Review project architecture",
            "Prepare answers for 'Challenges Faced'",
            "Deep dive into {TOP_SKILL} concepts",
        ],
    ),
    (
        "Day 6",
        "Mock Interviews",
        &[
            "Practice behavioral questions (STAR method)",
            "Peer mock interview for System Design",
            "Review {WEAK_AREA} concepts",
        ],
    ),
    (
        "Day 7",
        "Final Revision",
        &[
            "Review cheat sheets",
            "Sleep well & relax",
            "Go through resume logic one last time",
        ],
    ),
];

const CHECKLIST_TEMPLATE: &[(&str, &[&str])] = &[
    (
        "Round 1: Aptitude & Basics",
        &[
            "Quantitative Aptitude (Time & Work, Percentages)",
            "Logical Reasoning (Puzzles, Series)",
            "Verbal Ability Check",
            "Resume Walkthrough Preparation",
        ],
    ),
    (
        "Round 2: DSA & Core CS",
        &[
            "Revise standard DSA sheets (Easy/Medium)",
            "Practice 2 coding problems/day",
            "Review DBMS Normalization & ACID",
            "Review OS Concepts (Paging, Deadlocks)",
        ],
    ),
    (
        "Round 3: Tech Interview",
        &[
            "Prepare Project Deep-dive",
            "{SKILL_REVIEW}",
            "System Design Basics (if applicable)",
        ],
    ),
    (
        "Round 4: Managerial / HR",
        &[
            "Research about {COMPANY}",
            "Prepare 'Why this role?'",
            "Salary negotiation prep",
            "Prepare questions for the interviewer",
        ],
    ),
];

const FALLBACK_SKILLS: &[&str] = &["Communication", "Problem Solving", "Basic Coding", "Projects"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            keywords: KEYWORDS
                .iter()
                .map(|(category, words)| (*category, owned(words)))
                .collect(),
            question_topics: QUESTION_TOPICS
                .iter()
                .map(|(topic, questions)| QuestionTopic {
                    topic: topic.to_string(),
                    questions: owned(questions),
                })
                .collect(),
            general_questions: owned(GENERAL_QUESTIONS),
            fallback_topics: FALLBACK_TOPICS
                .iter()
                .map(|(category, topic)| (*category, topic.to_string()))
                .collect(),
            enterprise_roster: owned(ENTERPRISE_ROSTER),
            plan_template: PLAN_TEMPLATE
                .iter()
                .map(|(day, focus, tasks)| PlanDay {
                    day: day.to_string(),
                    focus: focus.to_string(),
                    tasks: owned(tasks),
                })
                .collect(),
            checklist_template: CHECKLIST_TEMPLATE
                .iter()
                .map(|(round, tasks)| ChecklistRound {
                    round: round.to_string(),
                    tasks: owned(tasks),
                })
                .collect(),
            fallback_skills: owned(FALLBACK_SKILLS),
        }
    }
}

impl KnowledgeBase {
    /// Shared built-in tables, constructed once.
    pub fn builtin() -> &'static KnowledgeBase {
        static BUILTIN: OnceLock<KnowledgeBase> = OnceLock::new();
        BUILTIN.get_or_init(KnowledgeBase::default)
    }

    /// Loads a knowledge base from a JSON file with the same shape as the built-in one.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge base at {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Invalid knowledge base at {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let kb: KnowledgeBase = serde_json::from_str(raw)?;
        kb.validate()?;
        Ok(kb)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.keywords.contains_key(&SkillCategory::Other),
            "'Other' is reserved for fallback skills and cannot carry keywords"
        );
        ensure!(!self.fallback_skills.is_empty(), "fallback_skills cannot be empty");
        ensure!(
            !self.general_questions.is_empty(),
            "general_questions cannot be empty"
        );
        ensure!(!self.plan_template.is_empty(), "plan_template cannot be empty");
        ensure!(
            !self.checklist_template.is_empty(),
            "checklist_template cannot be empty"
        );
        for topic in self.fallback_topics.values() {
            ensure!(
                self.questions_for(topic).is_some(),
                "fallback topic '{topic}' has no question set"
            );
        }
        Ok(())
    }

    /// Questions for an exact topic name.
    pub fn questions_for(&self, topic: &str) -> Option<&[String]> {
        self.question_topics
            .iter()
            .find(|t| t.topic == topic)
            .map(|t| t.questions.as_slice())
    }

    /// First topic whose name equals the skill or is contained in it, case-insensitively.
    pub fn topic_for_skill(&self, skill: &str) -> Option<&QuestionTopic> {
        let skill_lower = skill.to_lowercase();
        self.question_topics.iter().find(|t| {
            let topic_lower = t.topic.to_lowercase();
            topic_lower == skill_lower || skill_lower.contains(&topic_lower)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_six_categories_without_other() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.keywords.len(), 6);
        assert!(!kb.keywords.contains_key(&SkillCategory::Other));
        assert_eq!(kb.plan_template.len(), 5);
        assert_eq!(kb.question_topics.len(), 7);
        assert_eq!(kb.checklist_template.len(), 4);
    }

    #[test]
    fn test_topic_lookup_is_substring_fuzzy() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.topic_for_skill("MySQL").unwrap().topic, "SQL");
        assert_eq!(kb.topic_for_skill("React.js").unwrap().topic, "React");
        assert_eq!(kb.topic_for_skill("dsa").unwrap().topic, "DSA");
        assert!(kb.topic_for_skill("Docker").is_none());
    }

    #[test]
    fn test_topic_lookup_prefers_earlier_topic() {
        // "JavaScript" contains "java", and Java is listed first.
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.topic_for_skill("JavaScript").unwrap().topic, "Java");
    }

    #[test]
    fn test_from_json_accepts_serialized_builtin() {
        let raw = serde_json::to_string(KnowledgeBase::builtin()).unwrap();
        let kb = KnowledgeBase::from_json(&raw).unwrap();
        assert_eq!(kb.enterprise_roster.len(), 19);
        assert_eq!(kb.keywords[&SkillCategory::CloudDevOps].len(), 16);
    }

    #[test]
    fn test_from_json_rejects_keywords_under_other() {
        let mut kb = KnowledgeBase::default();
        kb.keywords
            .insert(SkillCategory::Other, vec!["Excel".to_string()]);
        let raw = serde_json::to_string(&kb).unwrap();
        let err = KnowledgeBase::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_from_json_rejects_dangling_fallback_topic() {
        let mut kb = KnowledgeBase::default();
        kb.fallback_topics
            .insert(SkillCategory::Testing, "QA".to_string());
        let raw = serde_json::to_string(&kb).unwrap();
        assert!(KnowledgeBase::from_json(&raw).is_err());
    }

    #[test]
    fn test_from_path_missing_file_errors() {
        let err = KnowledgeBase::from_path(Path::new("/nonexistent/kb.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read knowledge base"));
    }
}
