//! Scrape cycle over several sites with per-site failure isolation.

use recipe_model::RecipeRecord;
use tracing::{info, info_span, warn};

use crate::error::FetchError;
use crate::extract::{ExtractionGap, SiteListings};
use crate::source::RecipeSource;

/// What one site contributed to the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOutcome {
    pub site: String,
    pub result: Result<SiteListings, FetchError>,
}

/// Outcome of a full scrape cycle, in site order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeReport {
    pub sites: Vec<SiteOutcome>,
}

impl ScrapeReport {
    /// Records from every successful site, site order then page order.
    pub fn records(&self) -> impl Iterator<Item = &RecipeRecord> {
        self.sites
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .flat_map(|listings| listings.records.iter())
    }

    pub fn into_records(self) -> Vec<RecipeRecord> {
        self.sites
            .into_iter()
            .filter_map(|outcome| outcome.result.ok())
            .flat_map(|listings| listings.records)
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &FetchError)> {
        self.sites.iter().filter_map(|outcome| match &outcome.result {
            Ok(_) => None,
            Err(err) => Some((outcome.site.as_str(), err)),
        })
    }

    pub fn gaps(&self) -> impl Iterator<Item = (&str, &ExtractionGap)> {
        self.sites.iter().flat_map(|outcome| {
            outcome
                .result
                .as_ref()
                .map(|listings| listings.gaps.as_slice())
                .unwrap_or_default()
                .iter()
                .map(move |gap| (outcome.site.as_str(), gap))
        })
    }

    pub fn succeeded(&self) -> usize {
        self.sites.iter().filter(|outcome| outcome.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.sites.len() - self.succeeded()
    }
}

/// Fetch every site in order. A failing site is logged once and skipped;
/// the cycle always visits every site.
pub fn scrape_sites<S, I, U>(source: &S, sites: I) -> ScrapeReport
where
    S: RecipeSource + ?Sized,
    I: IntoIterator<Item = U>,
    U: AsRef<str>,
{
    let mut report = ScrapeReport::default();
    for site in sites {
        let site = site.as_ref();
        let span = info_span!("scrape", site = %site);
        let result = span.in_scope(|| source.fetch(site));
        match &result {
            Ok(listings) => info!(
                site = %site,
                recipes = listings.records.len(),
                skipped = listings.gaps.len(),
                "site scraped"
            ),
            Err(error) => warn!(site = %site, %error, "error scraping site"),
        }
        report.sites.push(SiteOutcome {
            site: site.to_string(),
            result,
        });
    }
    report
}
