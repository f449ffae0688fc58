use std::collections::HashSet;

use recipe_model::{PantrySet, RecipeRecord, ShoppingList};

/// Ingredients of `favorites` that are not in the pantry, first mention wins.
///
/// Favorites are walked in order and each one's ingredients in listed order,
/// so the result is deterministic for a given input.
pub fn build(favorites: &[RecipeRecord], pantry: &PantrySet) -> ShoppingList {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut items = Vec::new();
    for recipe in favorites {
        for ingredient in &recipe.ingredients {
            if pantry.contains(ingredient) {
                continue;
            }
            if seen.insert(ingredient.as_str()) {
                items.push(ingredient.clone());
            }
        }
    }
    ShoppingList::from(items)
}
