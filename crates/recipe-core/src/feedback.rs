use recipe_model::{FeedbackEntry, RecipeId};
use tracing::debug;

/// Append-only list of user ratings.
#[derive(Debug, Clone, Default)]
pub struct FeedbackLog {
    entries: Vec<FeedbackEntry>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rating. `recipe_id` is not checked against any store.
    pub fn record(&mut self, recipe_id: i64, rating: impl Into<String>) {
        self.record_resolved(recipe_id, rating, None);
    }

    /// Append a rating together with the content id the index resolved to.
    pub fn record_resolved(
        &mut self,
        recipe_id: i64,
        rating: impl Into<String>,
        recipe: Option<RecipeId>,
    ) {
        let entry = FeedbackEntry {
            recipe_id,
            rating: rating.into(),
            recipe,
        };
        debug!(recipe_id, rating = %entry.rating, "feedback recorded");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_index() {
        let mut log = FeedbackLog::new();
        log.record(-3, "1");
        log.record(10_000, "5");
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].recipe_id, -3);
        assert_eq!(log.entries()[1].rating, "5");
        assert!(log.entries().iter().all(|entry| entry.recipe.is_none()));
    }
}
