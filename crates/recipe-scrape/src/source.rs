//! Recipe sources.

use std::time::Duration;

use recipe_model::FetchOptions;
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{FetchError, Result};
use crate::extract::{Selectors, SiteListings, extract_listings};

/// Anything that can turn a site URL into recipe listings.
pub trait RecipeSource {
    fn fetch(&self, site_url: &str) -> Result<SiteListings>;
}

/// Fetches listing pages over HTTP and extracts them with CSS selectors.
pub struct HttpRecipeSource {
    client: Client,
    selectors: Selectors,
}

impl HttpRecipeSource {
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .user_agent(options.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            selectors: Selectors::standard()?,
        })
    }
}

impl RecipeSource for HttpRecipeSource {
    fn fetch(&self, site_url: &str) -> Result<SiteListings> {
        debug!(site = site_url, "requesting listing page");
        let response = self.client.get(site_url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: site_url.to_string(),
            });
        }

        let body = response.text()?;
        debug!(site = site_url, bytes = body.len(), "listing page received");
        Ok(extract_listings(&body, &self.selectors))
    }
}

/// Serves pre-fetched HTML pages keyed by URL; unknown URLs fail.
#[derive(Clone)]
pub struct StaticSource {
    pages: Vec<(String, String)>,
    selectors: Selectors,
}

impl StaticSource {
    pub fn new<I, U, H>(pages: I) -> Result<Self>
    where
        I: IntoIterator<Item = (U, H)>,
        U: Into<String>,
        H: Into<String>,
    {
        Ok(Self {
            pages: pages
                .into_iter()
                .map(|(url, html)| (url.into(), html.into()))
                .collect(),
            selectors: Selectors::standard()?,
        })
    }
}

impl RecipeSource for StaticSource {
    fn fetch(&self, site_url: &str) -> Result<SiteListings> {
        let html = self
            .pages
            .iter()
            .find(|(url, _)| url == site_url)
            .map(|(_, html)| html)
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: site_url.to_string(),
            })?;
        Ok(extract_listings(html, &self.selectors))
    }
}
