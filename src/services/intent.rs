use crate::services::vocabulary::{
    BESTSELLER_KEYWORDS, CORRECTIONS, CULTURAL_KEYWORDS, DIETARY_KEYWORDS, FUZZY_MATCH_THRESHOLD,
    GROUP_DINING_KEYWORDS, KEYWORD_TABLE, MENU_BROWSING_KEYWORDS, QUICK_SERVICE_KEYWORDS,
    SPICE_KEYWORDS, VALUE_KEYWORDS, WORD_RE,
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Customer intent categories, in routing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    MenuBrowsing,
    DietarySpecific,
    Bestsellers,
    SpiceConcern,
    GroupDining,
    QuickService,
    CulturalCuriosity,
    ValueSeeking,
    GeneralInquiry,
}

/// How strongly the query signalled an intent, by count of matched
/// categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// The result of classifying one query. Created fresh per query, consumed
/// once by the router. Serializes for structured logging; the borrowed
/// tag set makes it write-only.
#[derive(Debug, Clone, Serialize)]
pub struct IntentAnalysis {
    pub corrected_query: String,
    pub primary_intent: Intent,
    pub all_intents: Vec<Intent>,
    pub confidence: Confidence,
    pub tags: BTreeSet<&'static str>,
}

lazy_static! {
    /// Literal ordered (intent, keyword list) pairs; evaluated in sequence,
    /// first match wins. DietarySpecific absorbs the whole keyword-table
    /// vocabulary and sits ahead of Bestsellers so preference-qualified
    /// recommendation requests route to the dietary handler.
    static ref INTENT_RULES: Vec<(Intent, Vec<&'static str>)> = vec![
        (Intent::MenuBrowsing, MENU_BROWSING_KEYWORDS.to_vec()),
        (Intent::DietarySpecific, DIETARY_KEYWORDS.clone()),
        (Intent::Bestsellers, BESTSELLER_KEYWORDS.to_vec()),
        (Intent::SpiceConcern, SPICE_KEYWORDS.clone()),
        (Intent::GroupDining, GROUP_DINING_KEYWORDS.to_vec()),
        (Intent::QuickService, QUICK_SERVICE_KEYWORDS.to_vec()),
        (Intent::CulturalCuriosity, CULTURAL_KEYWORDS.to_vec()),
        (Intent::ValueSeeking, VALUE_KEYWORDS.to_vec()),
    ];
}

/// Lowercase, trim and apply the correction table entry-by-entry.
///
/// Replacement is plain substring replacement, so corrections can compound;
/// the table order is part of the behavior.
pub fn normalize_query(query: &str) -> String {
    let mut normalized = query.to_lowercase().trim().to_string();
    for (wrong, correct) in CORRECTIONS {
        normalized = normalized.replace(wrong, correct);
    }
    normalized
}

/// Extract semantic tags from a normalized query.
///
/// A tag applies when any of its phrases is a substring of the whole query,
/// or fuzzy-matches one token at `FUZZY_MATCH_THRESHOLD` or better. Fuzzy
/// matching is restricted to single tokens to keep cost linear and avoid
/// false positives on whole phrases.
pub fn extract_tags(query: &str) -> BTreeSet<&'static str> {
    let query_lower = query.to_lowercase();
    let tokens: Vec<&str> = WORD_RE
        .find_iter(&query_lower)
        .map(|m| m.as_str())
        .collect();

    let mut tags = BTreeSet::new();
    for (tag, phrases) in KEYWORD_TABLE {
        let matched = phrases.iter().any(|phrase| {
            query_lower.contains(phrase)
                || tokens
                    .iter()
                    .any(|token| strsim::normalized_levenshtein(phrase, token) >= FUZZY_MATCH_THRESHOLD)
        });
        if matched {
            tags.insert(*tag);
        }
    }
    tags
}

/// Tags implied by a piece of menu copy (item name + description).
/// Substring containment only; no fuzzy step.
pub fn implied_tags(text: &str) -> BTreeSet<&'static str> {
    let text_lower = text.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|phrase| text_lower.contains(phrase)))
        .map(|(tag, _)| *tag)
        .collect()
}

/// Normalize the query, extract tags and pick a primary intent.
pub fn analyze_intent(query: &str) -> IntentAnalysis {
    let corrected_query = normalize_query(query);
    let tags = extract_tags(&corrected_query);

    let all_intents: Vec<Intent> = INTENT_RULES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| corrected_query.contains(kw)))
        .map(|(intent, _)| *intent)
        .collect();

    let primary_intent = all_intents
        .first()
        .copied()
        .unwrap_or(Intent::GeneralInquiry);
    let confidence = match all_intents.len() {
        0 => Confidence::Low,
        1 => Confidence::Medium,
        _ => Confidence::High,
    };

    debug!(
        query = %corrected_query,
        intent = ?primary_intent,
        confidence = confidence.as_str(),
        ?tags,
        "classified query"
    );

    IntentAnalysis {
        corrected_query,
        primary_intent,
        all_intents,
        confidence,
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_misspellings_are_corrected() {
        assert!(normalize_query("biriyani please").contains("biryani"));
        assert!(normalize_query("chiken kabob").contains("chicken"));
        assert!(normalize_query("chiken kabob").contains("kabab"));
        assert!(normalize_query("any vegeterian options?").contains("vegetarian"));
        assert!(normalize_query("SPICEY food").contains("spicy"));
    }

    #[test]
    fn normalization_is_idempotent_on_corrected_text() {
        for raw in [
            "biriyani",
            "kebab roll with naan",
            "spicey chiken",
            "recomend something helathy",
        ] {
            let once = normalize_query(raw);
            assert_eq!(normalize_query(&once), once);
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_query(""), "");
    }

    #[test]
    fn tags_match_by_substring() {
        let tags = extract_tags("something not spicy for the kids");
        assert!(tags.contains("mild"));
        assert!(tags.contains("kids"));
    }

    #[test]
    fn tags_match_single_tokens_fuzzily() {
        // "barbeque" vs "barbecue": similarity 7/8 = 0.875, above threshold,
        // and no bbq phrase appears as a substring.
        let tags = extract_tags("barbeque tonight");
        assert!(tags.contains("bbq"));
    }

    #[test]
    fn fuzzy_threshold_rejects_distant_tokens() {
        // "kito" vs "keto": similarity 0.75, below threshold, and no
        // low-carb phrase appears as a substring.
        let tags = extract_tags("kito meal");
        assert!(!tags.contains("low-carb"));
    }

    #[test]
    fn fuzzy_threshold_boundary_is_inclusive() {
        let above = strsim::normalized_levenshtein("barbecue", "barbeque");
        assert!(above >= FUZZY_MATCH_THRESHOLD);
        let below = strsim::normalized_levenshtein("keto", "kito");
        assert!(below < FUZZY_MATCH_THRESHOLD);
    }

    #[test]
    fn misspelled_biryani_is_corrected_and_tagged() {
        let analysis = analyze_intent("biriyani");
        assert!(analysis.corrected_query.contains("biryani"));
        assert!(analysis.tags.contains("biryani"));
        assert_eq!(analysis.primary_intent, Intent::DietarySpecific);
    }

    #[test]
    fn vegetarian_recommendation_routes_to_dietary() {
        let analysis = analyze_intent("I'm vegetarian, what do you recommend?");
        assert!(analysis.tags.contains("vegetarian"));
        assert_eq!(analysis.primary_intent, Intent::DietarySpecific);
        // Both the dietary and bestseller vocabularies matched.
        assert!(analysis.all_intents.contains(&Intent::Bestsellers));
        assert_eq!(analysis.confidence, Confidence::High);
    }

    #[test]
    fn menu_browsing_outranks_dietary() {
        let analysis = analyze_intent("what vegetarian options do you have?");
        assert_eq!(analysis.primary_intent, Intent::MenuBrowsing);
    }

    #[test]
    fn bestsellers_without_dietary_signal() {
        let analysis = analyze_intent("what's your most popular item?");
        assert_eq!(analysis.primary_intent, Intent::Bestsellers);
        assert_eq!(analysis.confidence, Confidence::Medium);
    }

    #[test]
    fn unmatched_query_falls_back_to_general_inquiry() {
        let analysis = analyze_intent("");
        assert_eq!(analysis.primary_intent, Intent::GeneralInquiry);
        assert_eq!(analysis.confidence, Confidence::Low);
        assert!(analysis.all_intents.is_empty());

        let nonsense = analyze_intent("xyzzy qwerty");
        assert_eq!(nonsense.primary_intent, Intent::GeneralInquiry);
    }

    #[test]
    fn analysis_serializes_to_json() {
        let analysis = analyze_intent("vegetarian biryani");
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["primary_intent"], "DietarySpecific");
        assert_eq!(value["confidence"], "medium");
        assert!(value["tags"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("biryani")));
    }

    #[test]
    fn implied_tags_scan_menu_copy() {
        let tags = implied_tags("Chicken Biryani aromatic basmati rice");
        assert!(tags.contains("meat"));
        assert!(tags.contains("biryani"));
        assert!(tags.contains("rice"));
        assert!(!tags.contains("dessert"));
    }
}
