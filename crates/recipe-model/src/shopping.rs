use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Ingredients assumed to be on hand already.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PantrySet {
    items: HashSet<String>,
}

impl PantrySet {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered ingredient list with no duplicates and no pantry items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList(Vec<String>);

impl ShoppingList {
    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_items(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ShoppingList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}
