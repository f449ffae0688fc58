//! Ordered, append-only collection of scraped recipes.

use recipe_model::RecipeRecord;

use crate::error::{CoreError, Result};

/// Recipes in scrape order, addressed by position.
///
/// Positions are only meaningful within the run that built the store.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    records: Vec<RecipeRecord>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicates are kept.
    pub fn add(&mut self, record: RecipeRecord) {
        self.records.push(record);
    }

    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = RecipeRecord>,
    {
        self.records.extend(records);
    }

    /// Record at `index`, or `IndexOutOfRange` unless `0 <= index < size()`.
    pub fn get(&self, index: i64) -> Result<&RecipeRecord> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.records.get(position))
            .ok_or(CoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RecipeRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecipeRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> RecipeRecord {
        RecipeRecord::new(title, "5")
    }

    #[test]
    fn get_returns_record_at_position() {
        let mut store = RecipeStore::new();
        store.add(record("A"));
        store.add(record("B"));
        assert_eq!(store.get(0).expect("first").title, "A");
        assert_eq!(store.get(1).expect("second").title, "B");
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn get_rejects_negative_and_past_end() {
        let mut store = RecipeStore::new();
        store.add(record("A"));
        assert_eq!(
            store.get(-1),
            Err(CoreError::IndexOutOfRange { index: -1, len: 1 })
        );
        assert_eq!(
            store.get(1),
            Err(CoreError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn add_keeps_duplicates() {
        let mut store = RecipeStore::new();
        store.add(record("A"));
        store.add(record("A"));
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn empty_store_rejects_zero() {
        let store = RecipeStore::new();
        assert!(store.is_empty());
        assert!(store.get(0).is_err());
    }
}
