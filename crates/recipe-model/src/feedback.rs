use serde::{Deserialize, Serialize};

use crate::RecipeId;

/// One user rating of a recipe.
///
/// `recipe_id` is the positional index the user supplied and is never
/// checked against the recipe store. `recipe` carries the content id when the
/// index resolved at the time the feedback was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub recipe_id: i64,
    pub rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<RecipeId>,
}
