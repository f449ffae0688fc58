//! CLI argument definitions for the recipe recommender.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "recipe-recommender",
    version,
    about = "Scrape recipe sites and list recipes for a preference profile",
    long_about = "Scrape recipe listings from a set of sites, store a preference profile,\n\
                  run the recommender and print every scraped recipe.\n\n\
                  Favorites, feedback and the shopping list are driven by flags on `run`."
)]
pub struct Cli {
    /// Defaults to `run` with no extra flags.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// JSON run configuration (sites, preferences, pantry, fetch options).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scrape, recommend and print the recipe listing.
    Run(RunArgs),

    /// List the sites a run would scrape.
    Sites,
}

impl Default for Command {
    fn default() -> Self {
        Self::Run(RunArgs::default())
    }
}

#[derive(Args, Default)]
pub struct RunArgs {
    /// Site to scrape (repeatable; replaces the configured sites).
    #[arg(long = "site", value_name = "URL")]
    pub sites: Vec<String>,

    /// Serve a site from a saved HTML file instead of the network (repeatable).
    #[arg(long = "page", value_name = "URL=PATH", value_parser = parse_page)]
    pub pages: Vec<(String, PathBuf)>,

    /// Save the recipe at this listing index as a favorite (repeatable).
    #[arg(long = "favorite", value_name = "INDEX", allow_negative_numbers = true)]
    pub favorites: Vec<i64>,

    /// Rate the recipe at a listing index (repeatable).
    #[arg(
        long = "feedback",
        value_name = "INDEX=RATING",
        value_parser = parse_feedback,
        allow_hyphen_values = true
    )]
    pub feedback: Vec<(i64, String)>,

    /// Pantry item excluded from the shopping list (repeatable; adds to config).
    #[arg(long = "pantry", value_name = "ITEM")]
    pub pantry: Vec<String>,

    /// Print the shopping list for the saved favorites.
    #[arg(long = "shopping-list")]
    pub shopping_list: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_page(raw: &str) -> Result<(String, PathBuf), String> {
    let (url, path) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected URL=PATH, got `{raw}`"))?;
    if url.is_empty() || path.is_empty() {
        return Err(format!("expected URL=PATH, got `{raw}`"));
    }
    Ok((url.to_string(), PathBuf::from(path)))
}

fn parse_feedback(raw: &str) -> Result<(i64, String), String> {
    let (index, rating) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=RATING, got `{raw}`"))?;
    let index: i64 = index
        .trim()
        .parse()
        .map_err(|err| format!("invalid index `{index}`: {err}"))?;
    Ok((index, rating.trim().to_string()))
}
