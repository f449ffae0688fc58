//! The fixed run sequence.
//!
//! 1. **Scrape** every site through a [`RecipeSource`]; failures are kept in
//!    the [`ScrapeReport`]
//! 2. **Preferences** from the run profile
//! 3. **Recommend** through the injected [`Recommender`]
//! 4. **User actions**: favorites, feedback, shopping list
//! 5. **Update** the recommender when new feedback arrived

use recipe_core::{CoreError, Recommendation, Recommender, SessionContext};
use recipe_model::{PantrySet, PreferenceDefaults, ShoppingList};
use recipe_scrape::{RecipeSource, ScrapeReport, scrape_sites};
use tracing::{info, info_span, warn};

/// Explicit user actions applied after the recommendation step.
#[derive(Debug, Clone, Default)]
pub struct UserActions {
    /// Listing indices to save as favorites, in order.
    pub favorites: Vec<i64>,
    /// `(index, rating)` pairs to record.
    pub feedback: Vec<(i64, String)>,
    /// When set, build the shopping list against this pantry.
    pub shopping_list: Option<PantrySet>,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub session: SessionContext,
    pub report: ScrapeReport,
    pub recommendations: Vec<Recommendation>,
    pub shopping_list: Option<ShoppingList>,
    /// User actions that were refused; the run continued without them.
    pub rejected: Vec<CoreError>,
}

pub fn run_cycle<S>(
    source: &S,
    sites: &[String],
    preferences: &PreferenceDefaults,
    recommender: &mut dyn Recommender,
    actions: &UserActions,
) -> RunOutcome
where
    S: RecipeSource + ?Sized,
{
    let mut session = SessionContext::new();

    let report = info_span!("scrape_cycle", sites = sites.len())
        .in_scope(|| scrape_sites(source, sites));
    session.ingest(report.records().cloned());
    info!(
        recipes = session.recipes.size(),
        sites_ok = report.succeeded(),
        sites_failed = report.failed(),
        "scrape cycle complete"
    );

    session.apply_preferences(preferences);
    let recommendations = session.recommend(recommender);

    let mut rejected = Vec::new();
    for &index in &actions.favorites {
        if let Err(error) = session.save_favorite(index) {
            warn!(index, %error, "favorite not saved");
            rejected.push(error);
        }
    }
    for (index, rating) in &actions.feedback {
        session.record_feedback(*index, rating.as_str());
    }
    if !actions.feedback.is_empty() {
        recommender.update(&session.feedback);
    }
    let shopping_list = actions
        .shopping_list
        .as_ref()
        .map(|pantry| session.shopping_list(pantry));

    RunOutcome {
        session,
        report,
        recommendations,
        shopping_list,
        rejected,
    }
}
