//! CLI library components for the recipe recommender.

pub mod logging;
pub mod output;
pub mod pipeline;
