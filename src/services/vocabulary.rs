use lazy_static::lazy_static;
use regex::Regex;

/// Minimum similarity ratio for a keyword to fuzzy-match a query token.
/// Comparison is inclusive (`>=`).
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Misspelling corrections, applied as plain substring replacement in
/// declaration order. Replacement is not word-boundary-aware, so entries can
/// fire on partial-word overlaps and can interact with one another; order
/// matters and is part of the contract.
pub static CORRECTIONS: &[(&str, &str)] = &[
    ("biriyani", "biryani"),
    ("biriani", "biryani"),
    ("briyani", "biryani"),
    ("kabob", "kabab"),
    ("kebab", "kabab"),
    ("kabeb", "kabab"),
    ("tika", "tikka"),
    ("teeka", "tikka"),
    ("nan", "naan"),
    ("nann", "naan"),
    ("daal", "dal"),
    ("dhal", "dal"),
    ("dhaal", "dal"),
    ("chiken", "chicken"),
    ("chikken", "chicken"),
    ("checken", "chicken"),
    ("vegitarian", "vegetarian"),
    ("vegeterian", "vegetarian"),
    ("spicey", "spicy"),
    ("spiccy", "spicy"),
    ("protien", "protein"),
    ("protine", "protein"),
    ("helathy", "healthy"),
    ("healty", "healthy"),
    ("diabetik", "diabetic"),
    ("wieght", "weight"),
    ("waight", "weight"),
    ("recomend", "recommend"),
    ("recomendation", "recommendation"),
    ("favrite", "favorite"),
    ("favourite", "favorite"),
];

/// Semantic tag -> trigger phrases. A tag applies when any phrase is a
/// substring of the query or fuzzy-matches a single query token.
pub static KEYWORD_TABLE: &[(&str, &[&str])] = &[
    ("vegetarian", &["veg", "vegetarian", "veggie", "plant-based"]),
    ("vegan", &["vegan", "plant-based", "no dairy", "no eggs"]),
    ("gluten-free", &["gluten free", "gluten-free", "no gluten"]),
    ("halal", &["halal"]),
    ("protein", &["protein", "high protein", "muscle", "workout"]),
    ("low-carb", &["low carb", "keto", "no carbs", "low sugar"]),
    ("spicy", &["spicy", "hot", "fire", "chili", "pepper"]),
    ("mild", &["mild", "not spicy", "kids", "children", "sensitive"]),
    ("seafood", &["fish", "seafood", "shrimp", "prawn"]),
    (
        "meat",
        &[
            "non-veg", "meat", "chicken", "lamb", "beef", "goat", "kabab", "boti", "chop",
            "seekh", "tikka", "wings",
        ],
    ),
    (
        "dessert",
        &["dessert", "sweet", "mithai", "kheer", "gulab", "jalebi", "halwa", "rasmalai"],
    ),
    (
        "drink",
        &["drink", "beverage", "lassi", "chai", "tea", "juice", "soda", "coffee", "sharbat"],
    ),
    ("bbq", &["bbq", "barbecue", "grill", "tandoori", "tandoor", "smoked"]),
    ("biryani", &["biryani", "rice", "pulao"]),
    ("kids", &["kids", "children", "child", "family", "mild"]),
    ("healthy", &["healthy", "light", "low calorie", "diet", "fresh", "salad", "soup"]),
    ("family", &["family", "group", "sharing", "platter", "combo"]),
    ("nut-free", &["nut free", "nut-free", "no nuts", "allergy"]),
    ("dairy-free", &["dairy free", "dairy-free", "no dairy", "lactose"]),
    (
        "comfort",
        &["comfort", "comfort food", "home style", "homestyle", "classic", "traditional"],
    ),
    ("street", &["street food", "chaat", "pakora", "samosa", "roll", "wrap"]),
    ("chef", &["chef's special", "special", "signature", "exclusive"]),
    ("breakfast", &["breakfast", "morning", "paratha", "chai", "omelette"]),
    ("lunch", &["lunch", "midday", "noon"]),
    ("dinner", &["dinner", "evening", "night"]),
    ("brunch", &["brunch", "late morning"]),
    ("appetizer", &["appetizer", "starter", "snack", "small plate"]),
    ("soup", &["soup", "shorba"]),
    ("salad", &["salad", "greens"]),
    ("curry", &["curry", "masala", "korma", "karahi"]),
    ("grill", &["grill", "grilled", "tandoor", "bbq"]),
    ("rice", &["rice", "biryani", "pulao"]),
    ("bread", &["bread", "naan", "roti", "paratha", "kulcha"]),
    ("paratha", &["paratha"]),
    ("naan", &["naan"]),
    ("roti", &["roti"]),
    (
        "festive",
        &[
            "festive", "holiday", "eid", "ramadan", "diwali", "celebration", "party",
            "special occasion",
        ],
    ),
    ("seasonal", &["seasonal", "season", "fresh", "in season"]),
    ("summer", &["summer", "hot day", "warm", "sunny"]),
    ("winter", &["winter", "cold", "chilly", "snow", "rainy", "monsoon"]),
    ("refreshing", &["refreshing", "cooling", "cold drink", "iced"]),
    ("warming", &["warming", "hot", "spicy", "comfort"]),
    ("hearty", &["hearty", "rich", "filling", "robust"]),
    ("light", &["light", "fresh", "not heavy", "simple"]),
    ("crunchy", &["crunchy", "crispy"]),
    ("creamy", &["creamy", "rich", "smooth"]),
    ("tangy", &["tangy", "sour", "zesty"]),
    ("savory", &["savory", "umami"]),
    ("sweet", &["sweet", "dessert", "mithai"]),
];

fn table_phrases(tag: &str) -> &'static [&'static str] {
    KEYWORD_TABLE
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, phrases)| *phrases)
        .unwrap_or(&[])
}

pub static MENU_BROWSING_KEYWORDS: &[&str] = &[
    "menu",
    "what do you have",
    "what do you serve",
    "options",
    "choices",
];

pub static BESTSELLER_KEYWORDS: &[&str] = &[
    "best",
    "popular",
    "recommend",
    "signature",
    "famous",
    "bestseller",
    "what's good",
    "trending",
    "must try",
    "specialty",
];

pub static GROUP_DINING_KEYWORDS: &[&str] =
    &["party", "group", "family", "people", "sharing", "catering"];

pub static QUICK_SERVICE_KEYWORDS: &[&str] =
    &["quick", "fast", "takeout", "pickup", "rush", "lunch break"];

pub static CULTURAL_KEYWORDS: &[&str] = &[
    "pakistani",
    "indian",
    "authentic",
    "traditional",
    "culture",
    "clay oven",
];

pub static VALUE_KEYWORDS: &[&str] =
    &["cheap", "affordable", "budget", "value", "deal", "price"];

// Hand-curated shortcut groups inside the dietary handler, checked in this
// order before the generic tag search.
pub static BEVERAGE_WORDS: &[&str] = &[
    "beverage", "drink", "drinks", "lassi", "chai", "tea", "juice", "soda", "beverages",
];
pub static SALAD_WORDS: &[&str] =
    &["salad", "salads", "fresh", "greens", "vegetables", "healthy"];
pub static VEGETARIAN_WORDS: &[&str] = &[
    "vegetarian",
    "veg",
    "vegan",
    "plant-based",
    "vegetarian menu",
    "complete vegetarian",
];
pub static DESSERT_WORDS: &[&str] =
    &["dessert", "sweet", "mithai", "kheer", "gulab", "jalebi", "halwa"];
pub static BREAD_WORDS: &[&str] = &["bread", "naan", "roti", "paratha", "kulcha"];

// Secondary signals inside the spice handler.
pub static MILD_SIGNALS: &[&str] = &["mild", "not spicy", "kids", "children", "sensitive"];
pub static HOT_SIGNALS: &[&str] = &["spicy", "hot", "fire", "challenge"];

lazy_static! {
    /// The dietary intent absorbs every keyword-table phrase, so any tag
    /// match also counts as a dietary match.
    pub static ref DIETARY_KEYWORDS: Vec<&'static str> = KEYWORD_TABLE
        .iter()
        .flat_map(|(_, phrases)| phrases.iter().copied())
        .collect();

    pub static ref SPICE_KEYWORDS: Vec<&'static str> = table_phrases("spicy")
        .iter()
        .chain(table_phrases("mild").iter())
        .copied()
        .collect();

    /// Directions-phrasing patterns, tried in order; group 1 captures the
    /// origin location.
    pub static ref DIRECTIONS_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)directions from (.+)").unwrap(),
        Regex::new(r"(?i)how do i get there from (.+)").unwrap(),
        Regex::new(r"(?i)route from (.+)").unwrap(),
        Regex::new(r"(?i)navigate from (.+)").unwrap(),
        Regex::new(r"(?i)from ([\w\s,\-]+\d{5})").unwrap(),
    ];

    /// A bare US ZIP code on its own.
    pub static ref ZIP_RE: Regex = Regex::new(r"^\d{5}$").unwrap();

    /// Street-address shape: house number followed by a street-type word.
    pub static ref ADDRESS_RE: Regex = Regex::new(
        r"(?i)\d+\s+\w+.*(street|st\.|road|rd\.|avenue|ave\.|blvd|lane|ln\.|drive|dr\.|court|ct\.|circle|cir\.|plaza|plz\.|parkway|pkwy\.|way|terrace|ter\.|place|pl\.|trail|trl\.|highway|hwy\.|route|rt\.)"
    )
    .unwrap();

    /// Word-like token runs, used by the fuzzy side of tag extraction.
    pub static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrections_contain_no_identity_entries() {
        assert!(CORRECTIONS.iter().all(|(wrong, correct)| wrong != correct));
    }

    #[test]
    fn dietary_keywords_absorb_every_tag_vocabulary() {
        assert!(DIETARY_KEYWORDS.contains(&"bbq"));
        assert!(DIETARY_KEYWORDS.contains(&"gluten free"));
        assert!(DIETARY_KEYWORDS.contains(&"halal"));
        let table_total: usize = KEYWORD_TABLE.iter().map(|(_, p)| p.len()).sum();
        assert_eq!(DIETARY_KEYWORDS.len(), table_total);
    }

    #[test]
    fn spice_keywords_cover_both_directions() {
        assert!(SPICE_KEYWORDS.contains(&"spicy"));
        assert!(SPICE_KEYWORDS.contains(&"mild"));
        assert!(SPICE_KEYWORDS.contains(&"not spicy"));
    }

    #[test]
    fn directions_patterns_capture_origin() {
        let captures = DIRECTIONS_PATTERNS[0]
            .captures("directions from 123 main st, edison")
            .unwrap();
        assert_eq!(captures.get(1).unwrap().as_str(), "123 main st, edison");
    }

    #[test]
    fn address_shapes_are_recognized() {
        assert!(ZIP_RE.is_match("08837"));
        assert!(!ZIP_RE.is_match("0883"));
        assert!(!ZIP_RE.is_match("08837 please"));
        assert!(ADDRESS_RE.is_match("123 Main Street"));
        assert!(ADDRESS_RE.is_match("55 Amboy Ave."));
        assert!(!ADDRESS_RE.is_match("what is on the menu"));
    }
}
