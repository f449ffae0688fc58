pub mod error;
pub mod feedback;
pub mod options;
pub mod preference;
pub mod recipe;
pub mod shopping;

pub use error::{ModelError, Result};
pub use feedback::FeedbackEntry;
pub use options::{DEFAULT_SITES, FetchOptions, RunConfig};
pub use preference::{
    COOKING_TIME, CUISINES, DIETARY_RESTRICTIONS, FAVORITE_RECIPES, PreferenceDefaults,
    PreferenceValue,
};
pub use recipe::{RecipeId, RecipeRecord};
pub use shopping::{PantrySet, ShoppingList};
