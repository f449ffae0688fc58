//! Recipe source adapter.
//!
//! Turns site URLs into [`RecipeRecord`](recipe_model::RecipeRecord)s. Each
//! site is fetched on its own; a failing site never aborts the cycle and is
//! reported in the [`ScrapeReport`] instead.

pub mod error;
pub mod extract;
pub mod report;
pub mod source;

pub use error::{FetchError, Result};
pub use extract::{ExtractionGap, MissingField, Selectors, SiteListings, extract_listings};
pub use report::{ScrapeReport, SiteOutcome, scrape_sites};
pub use source::{HttpRecipeSource, RecipeSource, StaticSource};
