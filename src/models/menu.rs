use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        String(String),
        Vec(Vec<String>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::String(s) => {
            // Handle comma-separated tags or a single tag
            if s.contains(',') {
                Ok(s.split(',').map(|s| s.trim().to_string()).collect())
            } else {
                Ok(vec![s])
            }
        }
        StringOrVec::Vec(v) => Ok(v),
    }
}

fn deserialize_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i32),
        Null,
    }

    match Option::<StringOrInt>::deserialize(deserializer)? {
        Some(StringOrInt::String(s)) => {
            if s.is_empty() {
                Ok(None)
            } else {
                i32::from_str(&s)
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
        Some(StringOrInt::Int(i)) => Ok(Some(i)),
        Some(StringOrInt::Null) | None => Ok(None),
    }
}

/// A single dish, drink or side as it appears on the menu.
///
/// Only `name` is required; menu files in the wild are uneven and the rest
/// of the fields degrade gracefully when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub calories: Option<i32>,
    pub spice_level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub dietary: Vec<String>,
    pub prep_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub instagram_mentions: Option<i32>,
    pub customer_sentiment: Option<String>,
    pub pairing_suggestion: Option<String>,
    pub cultural_note: Option<String>,
    pub health_benefits: Option<String>,
}

impl MenuItem {
    /// Lowercased name + description, the text the keyword table is
    /// matched against when deriving an item's implied tags.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}

/// A named group of menu items ("Signature Bestsellers", "Comfort Curries", ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// The full menu, keyed by section id. Loaded once at construction and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuData {
    pub sections: BTreeMap<String, MenuSection>,
}

impl MenuData {
    /// Iterate every item across every section, in section key order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.values().flat_map(|section| section.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_tolerates_sparse_entries() {
        let item: MenuItem = serde_json::from_str(r#"{"name": "Plain Naan"}"#).unwrap();
        assert_eq!(item.name, "Plain Naan");
        assert!(item.description.is_empty());
        assert!(item.dietary.is_empty());
        assert!(item.calories.is_none());
    }

    #[test]
    fn dietary_accepts_string_or_list() {
        let from_list: MenuItem =
            serde_json::from_str(r#"{"name": "Dal", "dietary": ["vegetarian", "protein-rich"]}"#)
                .unwrap();
        assert_eq!(from_list.dietary, vec!["vegetarian", "protein-rich"]);

        let from_string: MenuItem =
            serde_json::from_str(r#"{"name": "Dal", "dietary": "vegetarian, protein-rich"}"#)
                .unwrap();
        assert_eq!(from_string.dietary, vec!["vegetarian", "protein-rich"]);
    }

    #[test]
    fn calories_accepts_string_or_int() {
        let from_int: MenuItem =
            serde_json::from_str(r#"{"name": "Biryani", "calories": 580}"#).unwrap();
        assert_eq!(from_int.calories, Some(580));

        let from_string: MenuItem =
            serde_json::from_str(r#"{"name": "Biryani", "calories": "580"}"#).unwrap();
        assert_eq!(from_string.calories, Some(580));
    }

    #[test]
    fn search_text_is_lowercased() {
        let item = MenuItem {
            name: "Mango Lassi".to_string(),
            description: "Creamy yogurt drink".to_string(),
            ..MenuItem::default()
        };
        assert_eq!(item.search_text(), "mango lassi creamy yogurt drink");
    }
}
