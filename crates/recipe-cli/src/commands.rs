use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use recipe_cli::output::render_listing;
use recipe_cli::pipeline::{RunOutcome, UserActions, run_cycle};
use recipe_core::CatalogRecommender;
use recipe_model::{PantrySet, RunConfig};
use recipe_scrape::{HttpRecipeSource, RecipeSource, StaticSource};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    match path {
        Some(path) => {
            let config = RunConfig::load(path)?;
            info!(path = %path.display(), sites = config.sites.len(), "config loaded");
            Ok(config)
        }
        None => Ok(RunConfig::default()),
    }
}

pub fn run_sites(config: &RunConfig) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Site"]);
    apply_table_style(&mut table);
    for (index, site) in config.sites.iter().enumerate() {
        table.add_row(vec![index.to_string(), site.clone()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_recipes(args: &RunArgs, config: &RunConfig) -> Result<RunOutcome> {
    let sites = resolve_sites(args, config);
    let source = build_source(args, config)?;

    let mut pantry = config.pantry.clone();
    pantry.extend(args.pantry.iter().cloned());
    let actions = UserActions {
        favorites: args.favorites.clone(),
        feedback: args.feedback.clone(),
        shopping_list: args.shopping_list.then(|| PantrySet::new(pantry)),
    };

    let mut recommender = CatalogRecommender;
    let outcome = run_cycle(
        &*source,
        &sites,
        &config.preferences,
        &mut recommender,
        &actions,
    );
    print!(
        "{}",
        render_listing(&outcome.session.recipes, outcome.shopping_list.as_ref())
    );
    Ok(outcome)
}

/// `--site` wins, then the URLs of `--page`, then the configured sites.
fn resolve_sites(args: &RunArgs, config: &RunConfig) -> Vec<String> {
    if !args.sites.is_empty() {
        args.sites.clone()
    } else if !args.pages.is_empty() {
        args.pages.iter().map(|(url, _)| url.clone()).collect()
    } else {
        config.sites.clone()
    }
}

fn build_source(args: &RunArgs, config: &RunConfig) -> Result<Box<dyn RecipeSource>> {
    if args.pages.is_empty() {
        let source = HttpRecipeSource::new(&config.fetch).context("build http client")?;
        return Ok(Box::new(source));
    }
    let mut pages = Vec::with_capacity(args.pages.len());
    for (url, path) in &args.pages {
        let html = fs::read_to_string(path)
            .with_context(|| format!("read saved page {}", path.display()))?;
        debug!(site = %url, path = %path.display(), "serving saved page");
        pages.push((url.clone(), html));
    }
    Ok(Box::new(StaticSource::new(pages)?))
}
