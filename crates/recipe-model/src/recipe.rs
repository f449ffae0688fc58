//! Scraped recipe records and their content-derived identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::ModelError;

/// Structured data extracted from one scraped listing.
///
/// Records are immutable once they enter the recipe store. Equality is full
/// value equality over every field, which is what favorites deduplicate on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub rating: String,
}

impl RecipeRecord {
    pub fn new(title: impl Into<String>, rating: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            rating: rating.into(),
        }
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    /// Stable identifier derived from the record's content.
    pub fn id(&self) -> RecipeId {
        let mut hasher = Sha256::new();
        hash_field(&mut hasher, &self.title);
        hasher.update((self.ingredients.len() as u64).to_le_bytes());
        for ingredient in &self.ingredients {
            hash_field(&mut hasher, ingredient);
        }
        hasher.update((self.instructions.len() as u64).to_le_bytes());
        for step in &self.instructions {
            hash_field(&mut hasher, step);
        }
        hash_field(&mut hasher, &self.rating);
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        RecipeId::from_first_16_bytes_of_sha256(digest)
    }
}

// Length-prefixed so ["ab", "c"] and ["a", "bc"] never collide.
fn hash_field(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// A content-derived recipe identifier.
///
/// Value-equal records always share an id, so it survives re-scrapes that
/// reorder the store, unlike a positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecipeId([u8; 16]);

impl RecipeId {
    pub fn from_first_16_bytes_of_sha256(digest: [u8; 32]) -> Self {
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for RecipeId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| ModelError::InvalidRecipeId(s.to_string()))?;
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| ModelError::InvalidRecipeId(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for RecipeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_boundaries_change_the_id() {
        let a = RecipeRecord::new("Soup", "5").with_ingredients(["ab", "c"]);
        let b = RecipeRecord::new("Soup", "5").with_ingredients(["a", "bc"]);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn ingredients_and_instructions_are_not_interchangeable() {
        let a = RecipeRecord::new("Soup", "5").with_ingredients(["stir"]);
        let b = RecipeRecord::new("Soup", "5").with_instructions(["stir"]);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn hex_round_trips() {
        let id = RecipeRecord::new("Toast", "4").id();
        let parsed: RecipeId = id.to_hex().parse().expect("parse id");
        assert_eq!(parsed, id);
        assert_eq!(id.to_hex().len(), 32);
    }

    #[test]
    fn rejects_short_hex() {
        assert!("abcd".parse::<RecipeId>().is_err());
        assert!("not-hex".parse::<RecipeId>().is_err());
    }
}
