//! Command implementations.

pub mod check;
pub mod config;
pub mod resolve;
pub mod robots;
pub mod sitemap;
pub mod test_robots;

use seo_playground_core::{QueryParams, split_target};

use crate::error::CliError;

/// Split a command-line URL into path and query, as a categorized error.
pub(crate) fn parse_target(url: &str) -> Result<(String, QueryParams), CliError> {
    split_target(url).map_err(CliError::from)
}
