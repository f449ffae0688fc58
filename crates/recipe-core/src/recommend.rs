//! Recommendation seam.
//!
//! The session only depends on the [`Recommender`] contract: read the recipe
//! store and the preference store, return an ordered list. Scoring and model
//! training live behind the trait and are not part of this crate.

use recipe_model::RecipeId;

use crate::feedback::FeedbackLog;
use crate::preferences::PreferenceStore;
use crate::store::RecipeStore;

/// A recommended recipe, referenced by run-local position and content id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub index: usize,
    pub id: RecipeId,
}

/// Pluggable recommendation capability.
pub trait Recommender {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Inspect the user's preferences before recommending.
    ///
    /// Default implementation does nothing.
    fn analyze(&mut self, _preferences: &PreferenceStore) {}

    /// Produce recommendations, best first.
    fn recommend(
        &self,
        recipes: &RecipeStore,
        preferences: &PreferenceStore,
    ) -> Vec<Recommendation>;

    /// Learn from recorded feedback.
    ///
    /// Default implementation does nothing.
    fn update(&mut self, _feedback: &FeedbackLog) {}
}

/// Placeholder recommender: every stored recipe, in store order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogRecommender;

impl Recommender for CatalogRecommender {
    fn name(&self) -> &str {
        "catalog"
    }

    fn recommend(
        &self,
        recipes: &RecipeStore,
        _preferences: &PreferenceStore,
    ) -> Vec<Recommendation> {
        recipes
            .iter()
            .enumerate()
            .map(|(index, record)| Recommendation {
                index,
                id: record.id(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use recipe_model::RecipeRecord;

    use super::*;

    #[test]
    fn catalog_keeps_store_order() {
        let mut store = RecipeStore::new();
        store.add(RecipeRecord::new("B", "1"));
        store.add(RecipeRecord::new("A", "2"));
        let recs = CatalogRecommender.recommend(&store, &PreferenceStore::new());
        let indices: Vec<usize> = recs.iter().map(|rec| rec.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(recs[1].id, RecipeRecord::new("A", "2").id());
    }

    #[test]
    fn catalog_on_empty_store_is_empty() {
        let recs = CatalogRecommender.recommend(&RecipeStore::new(), &PreferenceStore::new());
        assert!(recs.is_empty());
    }
}
