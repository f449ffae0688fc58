//! Program output written to stdout.

use recipe_core::RecipeStore;
use recipe_model::ShoppingList;

pub const LISTING_HEADER: &str = "--- Recipe Recommendations ---";
pub const SHOPPING_LIST_HEADER: &str = "--- Shopping List ---";
pub const COMPLETION_MARKER: &str = "Program execution completed.";

/// Numbered listing of every stored recipe, an optional shopping list, then
/// the completion marker. One line per entry, newline-terminated.
pub fn render_listing(recipes: &RecipeStore, shopping_list: Option<&ShoppingList>) -> String {
    let mut lines = vec![LISTING_HEADER.to_string()];
    lines.extend(
        recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| format!("{index}. {}", recipe.title)),
    );
    if let Some(list) = shopping_list {
        lines.push(SHOPPING_LIST_HEADER.to_string());
        lines.extend(list.items().iter().map(|item| format!("- {item}")));
    }
    lines.push(COMPLETION_MARKER.to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
