//! Preference key/value store, including the favorites list.

use std::collections::BTreeMap;

use recipe_model::{FAVORITE_RECIPES, PreferenceDefaults, PreferenceValue, RecipeRecord};
use tracing::debug;

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    values: BTreeMap<String, PreferenceValue>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing whatever was there.
    ///
    /// Recipe lists are de-duplicated by value (first occurrence wins).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PreferenceValue>) {
        let value = match value.into() {
            PreferenceValue::Recipes(recipes) => PreferenceValue::Recipes(dedupe(recipes)),
            text => text,
        };
        self.values.insert(key.into(), value);
    }

    /// Stored value for `key`, or `default` when unset.
    pub fn get(&self, key: &str, default: PreferenceValue) -> PreferenceValue {
        self.values.get(key).cloned().unwrap_or(default)
    }

    /// Borrowing lookup without a default.
    pub fn value(&self, key: &str) -> Option<&PreferenceValue> {
        self.values.get(key)
    }

    /// Write the scalar preferences of a run profile.
    pub fn apply_defaults(&mut self, defaults: &PreferenceDefaults) {
        for (key, value) in defaults.entries() {
            self.set(key, value);
        }
    }

    /// Append `record` to the favorites unless a value-equal record is
    /// already saved. Returns whether the list changed.
    pub fn add_favorite(&mut self, record: RecipeRecord) -> Result<bool> {
        let entry = self
            .values
            .entry(FAVORITE_RECIPES.to_string())
            .or_insert_with(|| PreferenceValue::Recipes(Vec::new()));
        let PreferenceValue::Recipes(favorites) = entry else {
            return Err(CoreError::PreferenceTypeMismatch {
                key: FAVORITE_RECIPES.to_string(),
            });
        };
        if favorites.contains(&record) {
            debug!(title = %record.title, "favorite already saved");
            return Ok(false);
        }
        debug!(title = %record.title, recipe_id = %record.id(), "saving favorite");
        favorites.push(record);
        Ok(true)
    }

    /// Saved favorites in insertion order; empty when none were saved.
    pub fn favorites(&self) -> &[RecipeRecord] {
        self.values
            .get(FAVORITE_RECIPES)
            .and_then(PreferenceValue::as_recipes)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PreferenceValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn dedupe(recipes: Vec<RecipeRecord>) -> Vec<RecipeRecord> {
    let mut out: Vec<RecipeRecord> = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        if !out.contains(&recipe) {
            out.push(recipe);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use recipe_model::{CUISINES, DIETARY_RESTRICTIONS};

    use super::*;

    fn omelette() -> RecipeRecord {
        RecipeRecord::new("Omelette", "4").with_ingredients(["egg", "butter"])
    }

    #[test]
    fn set_overwrites_and_get_falls_back() {
        let mut prefs = PreferenceStore::new();
        prefs.set(CUISINES, "Italian");
        prefs.set(CUISINES, "Thai");
        assert_eq!(
            prefs.get(CUISINES, "none".into()),
            PreferenceValue::from("Thai")
        );
        assert_eq!(
            prefs.get(DIETARY_RESTRICTIONS, "none".into()),
            PreferenceValue::from("none")
        );
    }

    #[test]
    fn add_favorite_ignores_value_equal_records() {
        let mut prefs = PreferenceStore::new();
        assert_eq!(prefs.add_favorite(omelette()), Ok(true));
        assert_eq!(prefs.add_favorite(omelette()), Ok(false));
        assert_eq!(prefs.favorites(), &[omelette()]);
    }

    #[test]
    fn add_favorite_rejects_scalar_slot() {
        let mut prefs = PreferenceStore::new();
        prefs.set(FAVORITE_RECIPES, "pasta");
        assert_eq!(
            prefs.add_favorite(omelette()),
            Err(CoreError::PreferenceTypeMismatch {
                key: FAVORITE_RECIPES.to_string()
            })
        );
        assert!(prefs.favorites().is_empty());
    }

    #[test]
    fn set_dedupes_recipe_lists() {
        let mut prefs = PreferenceStore::new();
        prefs.set(FAVORITE_RECIPES, vec![omelette(), omelette()]);
        assert_eq!(prefs.favorites().len(), 1);
    }

    #[test]
    fn apply_defaults_writes_scalar_keys() {
        let mut prefs = PreferenceStore::new();
        prefs.apply_defaults(&PreferenceDefaults::default());
        assert_eq!(prefs.len(), 3);
        assert_eq!(
            prefs.value(DIETARY_RESTRICTIONS).and_then(PreferenceValue::as_text),
            Some("Vegan")
        );
        assert!(prefs.favorites().is_empty());
    }
}
