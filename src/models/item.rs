use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multilingual text keyed by locale code ("en", "de", "fr", ...)
pub type LocalizedString = HashMap<String, String>;

/// item_id -> quantity, used for recipes, recycling and salvage
pub type RecipeMap = HashMap<String, u32>;

/// Locale used for display names and quest objective matching
pub const CANONICAL_LOCALE: &str = "en";

/// English text of a localized string, if present
pub fn english(text: &LocalizedString) -> Option<&str> {
    text.get(CANONICAL_LOCALE).map(String::as_str)
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ItemQuantity {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub quantity: u32,
}

/// A catalog entry from GET /api/items
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub name: LocalizedString,
    #[serde(default)]
    pub description: LocalizedString,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub rarity: String,
    /// Credits for selling a single unit
    #[serde(default)]
    pub value: u64,
    #[serde(rename = "weightKg", default)]
    pub weight_kg: f64,
    #[serde(rename = "stackSize", default = "default_stack_size")]
    pub stack_size: u32,
    #[serde(rename = "imageFilename", default)]
    pub image_filename: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
    // Effect payloads vary per item and are carried through untouched
    #[serde(default)]
    pub effects: HashMap<String, serde_json::Value>,
    #[serde(rename = "craftBench", default)]
    pub craft_bench: Option<String>,
    #[serde(default)]
    pub recipe: RecipeMap,
    #[serde(rename = "recyclesInto", default)]
    pub recycles_into: RecipeMap,
    #[serde(rename = "salvagesInto", default)]
    pub salvages_into: RecipeMap,
}

fn default_stack_size() -> u32 {
    1
}

impl Item {
    pub fn english_name(&self) -> Option<&str> {
        english(&self.name)
    }

    /// English name, falling back to the item id
    pub fn display_name(&self) -> &str {
        self.english_name().unwrap_or(self.id.as_str())
    }

    /// Base materials cannot be recycled any further
    pub fn is_base_material(&self) -> bool {
        self.recycles_into.is_empty()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItemsResponse {
    #[serde(default)]
    pub version: String,
    #[serde(rename = "generatedAt", default)]
    pub generated_at: String,
    pub items: Vec<Item>,
    #[serde(rename = "itemCount", default)]
    pub item_count: usize,
}
