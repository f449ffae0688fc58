//! Configuration options for a recommendation run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::preference::PreferenceDefaults;

/// Sites scraped when no configuration overrides them.
pub const DEFAULT_SITES: [&str; 2] = [
    "https://www.recipewebsite1.com",
    "https://www.recipewebsite2.com",
];

/// HTTP behavior of the recipe source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("recipe-recommender/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Everything a run needs besides the user's explicit actions.
///
/// Every field falls back to its default, so a config file only has to name
/// what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Recipe sites, scraped in order.
    pub sites: Vec<String>,
    /// Scalar preferences stored before recommending.
    pub preferences: PreferenceDefaults,
    /// Items excluded from the shopping list.
    pub pantry: Vec<String>,
    pub fetch: FetchOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sites: DEFAULT_SITES.iter().map(|site| (*site).to_string()).collect(),
            preferences: PreferenceDefaults::default(),
            pantry: Vec::new(),
            fetch: FetchOptions::default(),
        }
    }
}

impl RunConfig {
    /// Parse a JSON config document.
    pub fn from_json(text: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| ModelError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ModelError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }
}
