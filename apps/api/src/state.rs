use std::sync::Arc;

use crate::analysis::random::rng_from_seed;
use crate::config::Config;
use crate::knowledge::KnowledgeBase;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: analyses are returned to the caller, never stored here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub knowledge: Arc<KnowledgeBase>,
}

impl AppState {
    pub fn new(config: Config, knowledge: KnowledgeBase) -> Self {
        Self {
            config,
            knowledge: Arc::new(knowledge),
        }
    }

    /// Fresh random source per request; seeded when `QUESTION_SEED` is set.
    pub fn random_source(&self) -> fastrand::Rng {
        rng_from_seed(self.config.question_seed)
    }
}
