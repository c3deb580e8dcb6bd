use std::sync::Arc;

use crate::config::Config;
use crate::resume::skills::SkillClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill classifier. Default: KeywordSkillClassifier.
    pub skill_classifier: Arc<dyn SkillClassifier>,
}
