//! Integration tests for the run sequence and its printed output.

use recipe_cli::output::render_listing;
use recipe_cli::pipeline::{UserActions, run_cycle};
use recipe_core::{
    CatalogRecommender, CoreError, FeedbackLog, PreferenceStore, Recommendation, Recommender,
    RecipeStore,
};
use recipe_model::{PantrySet, PreferenceDefaults};
use recipe_scrape::StaticSource;

const BAKERY: &str = "https://bakery.test";
const DINER: &str = "https://diner.test";

fn listing(title: &str, ingredients: &[&str]) -> String {
    let items: String = ingredients
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect();
    format!(
        r#"<div class="recipe"><h2>{title}</h2><ul class="ingredients">{items}</ul><div class="rating">4</div></div>"#
    )
}

fn sites() -> Vec<String> {
    vec![BAKERY.to_string(), DINER.to_string()]
}

fn source() -> StaticSource {
    StaticSource::new([
        (
            BAKERY,
            format!(
                "{}{}",
                listing("Pancakes", &["egg", "milk"]),
                listing("Bread", &["milk", "flour"])
            ),
        ),
        (DINER, listing("Pancakes", &["egg", "milk"])),
    ])
    .expect("static source")
}

#[test]
fn all_sites_failing_prints_header_and_marker() {
    let empty = StaticSource::new(Vec::<(String, String)>::new()).expect("static source");
    let outcome = run_cycle(
        &empty,
        &sites(),
        &PreferenceDefaults::default(),
        &mut CatalogRecommender,
        &UserActions::default(),
    );

    assert!(outcome.session.recipes.is_empty());
    assert_eq!(outcome.report.failed(), 2);
    assert!(outcome.recommendations.is_empty());
    let output = render_listing(&outcome.session.recipes, None);
    insta::assert_snapshot!(output.trim_end(), @r"
    --- Recipe Recommendations ---
    Program execution completed.
    ");
}

#[test]
fn listing_numbers_recipes_in_scrape_order() {
    let outcome = run_cycle(
        &source(),
        &sites(),
        &PreferenceDefaults::default(),
        &mut CatalogRecommender,
        &UserActions::default(),
    );

    assert_eq!(outcome.recommendations.len(), 3);
    assert_eq!(outcome.session.preferences.len(), 3);
    let output = render_listing(&outcome.session.recipes, None);
    insta::assert_snapshot!(output.trim_end(), @r"
    --- Recipe Recommendations ---
    0. Pancakes
    1. Bread
    2. Pancakes
    Program execution completed.
    ");
}

#[test]
fn favorites_drive_the_shopping_list() {
    let actions = UserActions {
        favorites: vec![0, 1, 2],
        feedback: Vec::new(),
        shopping_list: Some(PantrySet::new(["milk"])),
    };
    let outcome = run_cycle(
        &source(),
        &sites(),
        &PreferenceDefaults::default(),
        &mut CatalogRecommender,
        &actions,
    );

    // Index 2 is value-equal to index 0.
    assert_eq!(outcome.session.preferences.favorites().len(), 2);
    assert!(outcome.rejected.is_empty());

    let output = render_listing(&outcome.session.recipes, outcome.shopping_list.as_ref());
    insta::assert_snapshot!(output.trim_end(), @r"
    --- Recipe Recommendations ---
    0. Pancakes
    1. Bread
    2. Pancakes
    --- Shopping List ---
    - egg
    - flour
    Program execution completed.
    ");
}

#[test]
fn invalid_favorite_is_refused_without_stopping_the_run() {
    let actions = UserActions {
        favorites: vec![9, -1, 1],
        feedback: vec![(9, "5".to_string()), (0, "3".to_string())],
        shopping_list: None,
    };
    let outcome = run_cycle(
        &source(),
        &sites(),
        &PreferenceDefaults::default(),
        &mut CatalogRecommender,
        &actions,
    );

    assert_eq!(
        outcome.rejected,
        vec![
            CoreError::InvalidRecipeReference { index: 9, len: 3 },
            CoreError::InvalidRecipeReference { index: -1, len: 3 },
        ]
    );
    assert_eq!(outcome.session.preferences.favorites().len(), 1);
    assert_eq!(outcome.session.preferences.favorites()[0].title, "Bread");

    let feedback = outcome.session.feedback.entries();
    assert_eq!(feedback.len(), 2);
    assert_eq!(feedback[0].recipe, None);
    assert!(feedback[1].recipe.is_some());
    assert!(outcome.shopping_list.is_none());
}

/// Counts how often each hook runs and how much feedback it saw last.
#[derive(Default)]
struct CountingRecommender {
    analyzed: usize,
    updates: Vec<usize>,
}

impl Recommender for CountingRecommender {
    fn name(&self) -> &str {
        "counting"
    }

    fn analyze(&mut self, _preferences: &PreferenceStore) {
        self.analyzed += 1;
    }

    fn recommend(
        &self,
        recipes: &RecipeStore,
        preferences: &PreferenceStore,
    ) -> Vec<Recommendation> {
        CatalogRecommender.recommend(recipes, preferences)
    }

    fn update(&mut self, feedback: &FeedbackLog) {
        self.updates.push(feedback.len());
    }
}

#[test]
fn recommender_learns_from_feedback_after_user_actions() {
    let actions = UserActions {
        favorites: Vec::new(),
        feedback: vec![(0, "5".to_string()), (1, "2".to_string())],
        shopping_list: None,
    };
    let mut recommender = CountingRecommender::default();
    run_cycle(
        &source(),
        &sites(),
        &PreferenceDefaults::default(),
        &mut recommender,
        &actions,
    );

    assert_eq!(recommender.analyzed, 1);
    assert_eq!(recommender.updates, vec![2]);
}

#[test]
fn run_without_feedback_never_updates_the_recommender() {
    let mut recommender = CountingRecommender::default();
    run_cycle(
        &source(),
        &sites(),
        &PreferenceDefaults::default(),
        &mut recommender,
        &UserActions::default(),
    );

    assert_eq!(recommender.analyzed, 1);
    assert!(recommender.updates.is_empty());
}
