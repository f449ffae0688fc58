use serde::{Deserialize, Serialize};

use crate::RecipeRecord;

pub const DIETARY_RESTRICTIONS: &str = "dietary_restrictions";
pub const CUISINES: &str = "cuisines";
pub const COOKING_TIME: &str = "cooking_time";
pub const FAVORITE_RECIPES: &str = "favorite_recipes";

/// A value stored under a preference key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Text(String),
    Recipes(Vec<RecipeRecord>),
}

impl PreferenceValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Recipes(_) => None,
        }
    }

    pub fn as_recipes(&self) -> Option<&[RecipeRecord]> {
        match self {
            Self::Text(_) => None,
            Self::Recipes(recipes) => Some(recipes),
        }
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<RecipeRecord>> for PreferenceValue {
    fn from(value: Vec<RecipeRecord>) -> Self {
        Self::Recipes(value)
    }
}

/// Scalar preferences written at the start of every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceDefaults {
    pub dietary_restrictions: String,
    pub cuisines: String,
    pub cooking_time: String,
}

impl Default for PreferenceDefaults {
    fn default() -> Self {
        Self {
            dietary_restrictions: "Vegan".to_string(),
            cuisines: "Italian".to_string(),
            cooking_time: "30 minutes".to_string(),
        }
    }
}

impl PreferenceDefaults {
    /// Key/value pairs in the order they are stored.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            (DIETARY_RESTRICTIONS, self.dietary_restrictions.as_str()),
            (CUISINES, self.cuisines.as_str()),
            (COOKING_TIME, self.cooking_time.as_str()),
        ]
    }
}
