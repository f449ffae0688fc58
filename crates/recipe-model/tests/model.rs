//! Tests for recipe-model types.

use std::path::Path;

use recipe_model::{
    DEFAULT_SITES, FeedbackEntry, ModelError, PreferenceValue, RecipeRecord, RunConfig,
};

fn pancakes() -> RecipeRecord {
    RecipeRecord::new("Pancakes", "4.5")
        .with_ingredients(["egg", "milk", "flour"])
        .with_instructions(["Whisk", "Fry"])
}

#[test]
fn value_equal_records_share_an_id() {
    assert_eq!(pancakes(), pancakes());
    assert_eq!(pancakes().id(), pancakes().id());
}

#[test]
fn any_field_change_changes_the_id() {
    let base = pancakes().id();
    let mut retitled = pancakes();
    retitled.title = "Crepes".to_string();
    let mut rerated = pancakes();
    rerated.rating = "3".to_string();
    assert_ne!(retitled.id(), base);
    assert_ne!(rerated.id(), base);
}

#[test]
fn preference_values_are_untagged() {
    let text = serde_json::to_value(PreferenceValue::from("Vegan")).expect("serialize text");
    assert_eq!(text, serde_json::json!("Vegan"));

    let recipes: PreferenceValue =
        serde_json::from_value(serde_json::json!([{ "title": "Pancakes", "rating": "4.5" }]))
            .expect("deserialize recipes");
    let list = recipes.as_recipes().expect("recipe list");
    assert_eq!(list.len(), 1);
    assert!(list[0].ingredients.is_empty());
}

#[test]
fn feedback_omits_unresolved_recipe() {
    let entry = FeedbackEntry {
        recipe_id: 42,
        rating: "5".to_string(),
        recipe: None,
    };
    let json = serde_json::to_value(&entry).expect("serialize feedback");
    assert_eq!(json, serde_json::json!({ "recipe_id": 42, "rating": "5" }));
}

#[test]
fn recipe_id_serializes_as_hex() {
    let id = pancakes().id();
    let json = serde_json::to_string(&id).expect("serialize id");
    assert_eq!(json, format!("\"{}\"", id.to_hex()));
    let round: recipe_model::RecipeId = serde_json::from_str(&json).expect("deserialize id");
    assert_eq!(round, id);
}

#[test]
fn default_config_uses_builtin_sites() {
    let config = RunConfig::default();
    assert_eq!(config.sites, DEFAULT_SITES.to_vec());
    assert!(config.pantry.is_empty());
    assert_eq!(config.fetch.timeout_secs, 30);
}

#[test]
fn partial_config_keeps_defaults() {
    let config = RunConfig::from_json(
        r#"{ "pantry": ["salt"], "preferences": { "cuisines": "Thai" } }"#,
        Path::new("inline.json"),
    )
    .expect("parse config");
    assert_eq!(config.pantry, vec!["salt"]);
    assert_eq!(config.preferences.cuisines, "Thai");
    assert_eq!(config.preferences.dietary_restrictions, "Vegan");
    assert_eq!(config.sites.len(), 2);
}

#[test]
fn malformed_config_names_its_origin() {
    let err = RunConfig::from_json("{ sites: ", Path::new("broken.json"))
        .expect_err("malformed json");
    assert!(matches!(err, ModelError::ConfigParse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = RunConfig::load(Path::new("/definitely/not/here.json")).expect_err("missing file");
    assert!(matches!(err, ModelError::ConfigIo { .. }));
}
