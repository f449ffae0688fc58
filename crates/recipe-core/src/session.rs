//! Explicit per-run state.
//!
//! A [`SessionContext`] owns the recipe store, the preference store and the
//! feedback log for one run, and is passed to every operation that needs them.
//!
//! # Lifecycle
//!
//! 1. `ingest` scraped records (the store is append-only from here on)
//! 2. `apply_preferences` with the run profile
//! 3. `recommend` through an injected [`Recommender`]
//! 4. `save_favorite` / `record_feedback` / `shopping_list` on user request

use recipe_model::{PantrySet, PreferenceDefaults, RecipeRecord, ShoppingList};
use tracing::{debug, info, warn};

use crate::error::{CoreError, Result};
use crate::feedback::FeedbackLog;
use crate::preferences::PreferenceStore;
use crate::recommend::{Recommendation, Recommender};
use crate::shopping;
use crate::store::RecipeStore;

#[derive(Debug, Default)]
pub struct SessionContext {
    pub recipes: RecipeStore,
    pub preferences: PreferenceStore,
    pub feedback: FeedbackLog,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append scraped records to the recipe store.
    pub fn ingest<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = RecipeRecord>,
    {
        let before = self.recipes.size();
        self.recipes.extend(records);
        debug!(
            added = self.recipes.size() - before,
            total = self.recipes.size(),
            "recipes ingested"
        );
    }

    pub fn apply_preferences(&mut self, defaults: &PreferenceDefaults) {
        self.preferences.apply_defaults(defaults);
    }

    /// Save the recipe at `index` as a favorite.
    ///
    /// The index is checked against the recipe store before any lookup, so an
    /// invalid reference leaves the preferences untouched. Returns whether a
    /// new favorite was added.
    pub fn save_favorite(&mut self, index: i64) -> Result<bool> {
        let record = self
            .recipes
            .get(index)
            .map_err(|_| CoreError::InvalidRecipeReference {
                index,
                len: self.recipes.size(),
            })?
            .clone();
        self.preferences.add_favorite(record)
    }

    /// Record a rating for the recipe at `index`, valid or not.
    pub fn record_feedback(&mut self, index: i64, rating: impl Into<String>) {
        let resolved = self.recipes.get(index).ok().map(RecipeRecord::id);
        if resolved.is_none() {
            warn!(index, "feedback recorded for an index outside the recipe store");
        }
        self.feedback.record_resolved(index, rating, resolved);
    }

    /// Shopping list for the current favorites, rebuilt on every call.
    pub fn shopping_list(&self, pantry: &PantrySet) -> ShoppingList {
        shopping::build(self.preferences.favorites(), pantry)
    }

    /// Let the recommender analyze the preferences, then recommend.
    ///
    /// Callers invoke [`Recommender::update`] themselves
    /// once user feedback has been recorded.
    pub fn recommend(&self, recommender: &mut dyn Recommender) -> Vec<Recommendation> {
        recommender.analyze(&self.preferences);
        let recommendations = recommender.recommend(&self.recipes, &self.preferences);
        info!(
            recommender = recommender.name(),
            count = recommendations.len(),
            "recommendations generated"
        );
        recommendations
    }
}
