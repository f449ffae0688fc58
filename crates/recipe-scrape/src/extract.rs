//! HTML extraction of recipe listings.
//!
//! A listing is one `div.recipe` block. Inside it:
//!
//! - title: first `h2`
//! - rating: first `div.rating`
//! - ingredients: `li` items under `.ingredients`
//! - instructions: `li` items under `.instructions`
//!
//! Pages without the scoped `.ingredients` / `.instructions` containers fall
//! back to every `li` of the listing for both sequences.
//!
//! A listing without a title or a rating is skipped on its own and reported
//! as an [`ExtractionGap`]; the rest of the page is still extracted.

use std::fmt;

use recipe_model::RecipeRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{FetchError, Result};

pub const LISTING_SELECTOR: &str = "div.recipe";
pub const TITLE_SELECTOR: &str = "h2";
pub const RATING_SELECTOR: &str = "div.rating";
pub const INGREDIENTS_SELECTOR: &str = ".ingredients";
pub const INSTRUCTIONS_SELECTOR: &str = ".instructions";
pub const ITEM_SELECTOR: &str = "li";

/// Compiled selectors used to read a listing page.
#[derive(Debug, Clone)]
pub struct Selectors {
    listing: Selector,
    title: Selector,
    rating: Selector,
    ingredients: Selector,
    instructions: Selector,
    item: Selector,
}

impl Selectors {
    /// Compile the standard listing selectors.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            listing: compile(LISTING_SELECTOR)?,
            title: compile(TITLE_SELECTOR)?,
            rating: compile(RATING_SELECTOR)?,
            ingredients: compile(INGREDIENTS_SELECTOR)?,
            instructions: compile(INSTRUCTIONS_SELECTOR)?,
            item: compile(ITEM_SELECTOR)?,
        })
    }
}

fn compile(source: &str) -> Result<Selector> {
    Selector::parse(source).map_err(|err| FetchError::Selector {
        selector: source.to_string(),
        message: err.to_string(),
    })
}

/// Required listing field that was not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Title,
    Rating,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Rating => f.write_str("rating"),
        }
    }
}

/// A listing skipped because a required field was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionGap {
    /// Position of the listing on its page.
    pub listing: usize,
    pub missing: MissingField,
}

/// Everything extracted from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteListings {
    pub records: Vec<RecipeRecord>,
    pub gaps: Vec<ExtractionGap>,
}

/// Extract every listing on the page.
pub fn extract_listings(html: &str, selectors: &Selectors) -> SiteListings {
    let document = Html::parse_document(html);
    let mut out = SiteListings::default();
    for (position, listing) in document.select(&selectors.listing).enumerate() {
        match extract_listing(listing, selectors) {
            Ok(record) => out.records.push(record),
            Err(missing) => {
                debug!(listing = position, %missing, "listing skipped");
                out.gaps.push(ExtractionGap {
                    listing: position,
                    missing,
                });
            }
        }
    }
    out
}

fn extract_listing(
    listing: ElementRef<'_>,
    selectors: &Selectors,
) -> std::result::Result<RecipeRecord, MissingField> {
    let title = first_text(listing, &selectors.title).ok_or(MissingField::Title)?;
    let rating = first_text(listing, &selectors.rating).ok_or(MissingField::Rating)?;

    let ingredients_block = listing.select(&selectors.ingredients).next();
    let instructions_block = listing.select(&selectors.instructions).next();
    let (ingredients, instructions) = if ingredients_block.is_none() && instructions_block.is_none()
    {
        let items = item_texts(listing, &selectors.item);
        (items.clone(), items)
    } else {
        (
            ingredients_block
                .map(|block| item_texts(block, &selectors.item))
                .unwrap_or_default(),
            instructions_block
                .map(|block| item_texts(block, &selectors.item))
                .unwrap_or_default(),
        )
    };

    Ok(RecipeRecord {
        title,
        ingredients,
        instructions,
        rating,
    })
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

fn item_texts(scope: ElementRef<'_>, selector: &Selector) -> Vec<String> {
    scope.select(selector).map(element_text).collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
