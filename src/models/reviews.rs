use serde::{Deserialize, Serialize};

/// Curated guest-feedback snippets surfaced by the reviews branch of the
/// general-inquiry handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewInsights {
    #[serde(default)]
    pub top_praise: Vec<String>,
    #[serde(default)]
    pub trending_compliments: Vec<String>,
    #[serde(default)]
    pub common_questions_resolved: Vec<String>,
}
