//! Advisory robots.txt blocking checks.
//!
//! Each enabled toggle group contributes its own predicate over the path and
//! parameters. Groups are evaluated independently and never short-circuit, so
//! a URL caught by several groups reports every one of them. The rule table
//! is deliberately not consulted here: this mirrors what the emitted
//! robots.txt would do, not what the canonical policy thinks of a parameter.

use serde::Serialize;

use crate::config::{ParamConfig, RobotsToggleKind};
use crate::evaluator::parse_page_number;
use crate::query::QueryParams;

/// Click and campaign identifiers matched by the tracking group.
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "gclid",
    "fbclid",
    "sid",
];

/// Presentation-only parameters matched by the UI group.
pub const UI_PARAMS: &[&str] = &["view", "per_page"];

/// API endpoints that stay crawlable under the protected-paths group.
const API_ALLOWLIST: &[&str] = &["/api/robots", "/api/sitemap"];

/// Facets that make a `sort` parameter "stacked".
const STACKABLE_FACETS: &[&str] = &["color", "size"];

/// Outcome of [`check_robots_blocking`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockingCheck {
    /// Any group matched.
    pub is_blocked: bool,
    /// One description per matching group, in group order.
    pub matched_rules: Vec<String>,
    /// Discovery-risk advisories from matching groups.
    pub warnings: Vec<String>,
}

impl BlockingCheck {
    fn record(&mut self, rule: String, warning: Option<&str>) {
        self.is_blocked = true;
        self.matched_rules.push(rule);
        if let Some(warning) = warning {
            self.warnings.push(warning.to_string());
        }
    }
}

fn is_api_path(pathname: &str) -> bool {
    pathname == "/api" || pathname.starts_with("/api/")
}

/// Prefix match, the way the emitted `Allow:` lines are read by crawlers.
fn is_allowlisted_api(pathname: &str) -> bool {
    API_ALLOWLIST
        .iter()
        .any(|allowed| pathname.starts_with(allowed))
}

fn present<'a>(params: &QueryParams, keys: &[&'a str]) -> Vec<&'a str> {
    keys.iter()
        .copied()
        .filter(|key| params.contains(key))
        .collect()
}

/// Evaluate every enabled toggle group against one URL.
///
/// ```rust
/// use seo_playground_core::{check_robots_blocking, ParamConfig, QueryParams};
///
/// let config = ParamConfig::default();
/// let params = QueryParams::parse("utm_source=newsletter");
/// let check = check_robots_blocking("/catalog/t-shirts/", &params, &config);
///
/// assert!(check.is_blocked);
/// assert_eq!(check.matched_rules.len(), 1);
/// ```
#[must_use]
pub fn check_robots_blocking(pathname: &str, params: &QueryParams, config: &ParamConfig) -> BlockingCheck {
    let toggles = &config.robots_toggles;
    let mut check = BlockingCheck::default();

    for (kind, toggle) in toggles.iter().filter(|(_, toggle)| toggle.enabled) {
        match kind {
            RobotsToggleKind::ProtectedPaths => {
                if pathname.starts_with("/account/") {
                    check.record(format!("{}: /account/*", toggle.label), None);
                } else if is_api_path(pathname) && !is_allowlisted_api(pathname) {
                    check.record(format!("{}: /api/*", toggle.label), None);
                }
            },
            RobotsToggleKind::TrackingParams => {
                let hits = present(params, TRACKING_PARAMS);
                if !hits.is_empty() {
                    check.record(format!("{}: {}", toggle.label, hits.join(", ")), None);
                }
            },
            RobotsToggleKind::SearchPages => {
                if pathname.starts_with("/search") {
                    check.record(
                        format!("{}: /search*", toggle.label),
                        Some(
                            "Blocking /search stops crawlers from following links on result pages; \
                             noindex,follow keeps them out of the index while preserving discovery",
                        ),
                    );
                }
            },
            RobotsToggleKind::UiParams => {
                let hits = present(params, UI_PARAMS);
                if !hits.is_empty() {
                    check.record(format!("{}: {}", toggle.label, hits.join(", ")), None);
                }
            },
            RobotsToggleKind::SortBlocking => {
                if params.contains("sort") {
                    check.record(
                        format!("{}: sort", toggle.label),
                        Some(
                            "Blocking every sorted URL hides links that may only be reachable \
                             through sorted listings",
                        ),
                    );
                }
            },
            RobotsToggleKind::StackedParams => {
                let facets = present(params, STACKABLE_FACETS);
                if params.contains("sort") && !facets.is_empty() {
                    check.record(
                        format!("{}: sort + {}", toggle.label, facets.join(", ")),
                        Some(
                            "Blocking sort stacked on a facet also hides the faceted listing's \
                             links from crawlers",
                        ),
                    );
                }
            },
        }
    }

    let page_key = config.pagination.param.as_str();
    if config.demos.block_pagination_in_robots
        && params
            .get(page_key)
            .and_then(parse_page_number)
            .is_some_and(|page| page > 1)
    {
        check.record(
            format!("Pagination: {page_key}"),
            Some("Blocking paginated URLs makes items beyond the first page undiscoverable"),
        );
    }

    check
}
