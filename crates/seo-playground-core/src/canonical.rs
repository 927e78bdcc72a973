//! Canonical URL and robots directive resolution.
//!
//! [`compute_canonical`] runs a fixed sequence of steps. Each step may only add
//! information: a later step can overwrite the robots directive, but nothing
//! ever clears `block_in_robots` once set. The ordering is part of the
//! contract, so the steps below are kept as one linear function rather than a
//! pluggable pipeline.
//!
//! 1. normalize the path
//! 2. classify parameters
//! 3. default to `index,follow`
//! 4. unstable parameters force `noindex,follow` and are dropped
//! 5. search-style parameters force `noindex,follow`
//! 6. stable parameters fold into the path or stay in the query
//! 7. blocked parameters set `block_in_robots` and are dropped
//! 8. pagination policy overrides the directive
//! 9. `/search` and `/account/` path overrides
//! 10. assemble the absolute URL
//! 11. OR in the robots.txt blocking check
//! 12. summary trace

use serde::Serialize;
use tracing::debug;

use crate::blocking::check_robots_blocking;
use crate::config::{CanonicalStrategy, ParamConfig};
use crate::evaluator::{evaluate_params, parse_page_number};
use crate::query::QueryParams;
use crate::types::RobotsDirective;

/// Base URL used when none is supplied.
pub const DEFAULT_BASE_URL: &str = "https://example.com";

/// Parameters that turn a listing into a search result page.
const SEARCH_STYLE_PARAMS: &[&str] = &["q", "query", "price", "price_min", "price_max"];

/// Outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalResult {
    /// Absolute canonical URL.
    pub canonical: String,
    /// Meta-robots directive.
    pub robots: RobotsDirective,
    /// Whether robots.txt should disallow the requested URL.
    pub block_in_robots: bool,
    /// Blocking groups that matched, in order.
    pub robots_matched_rules: Vec<String>,
    /// Discovery-risk advisories.
    pub warnings: Vec<String>,
    /// Every decision taken, in order.
    pub trace: Vec<String>,
}

impl CanonicalResult {
    /// Whether the URL is a sitemap candidate: indexable and not disallowed.
    #[must_use]
    pub fn is_indexable(&self) -> bool {
        self.robots == RobotsDirective::IndexFollow && !self.block_in_robots
    }
}

/// Lowercase the path and give it a trailing slash.
///
/// The slash is skipped when the path already ends in `/`, is exactly `/`, or
/// carries a literal `?`. An empty path becomes `/`.
///
/// ```rust
/// use seo_playground_core::normalize_path;
///
/// assert_eq!(normalize_path("/Catalog/T-Shirts"), "/catalog/t-shirts/");
/// assert_eq!(normalize_path("/"), "/");
/// ```
#[must_use]
pub fn normalize_path(pathname: &str) -> String {
    if pathname.is_empty() {
        return "/".to_string();
    }
    let mut path = pathname.to_lowercase();
    if !path.ends_with('/') && !path.contains('?') {
        path.push('/');
    }
    path
}

/// Resolve the canonical URL, robots directive and blocking state of one URL.
///
/// Pure and total: it never fails and never touches state outside its
/// arguments. `base_url` is joined verbatim, minus any trailing slash.
///
/// ```rust
/// use seo_playground_core::{compute_canonical, ParamConfig, QueryParams, RobotsDirective};
///
/// let params = QueryParams::parse("sort=price_desc&color=black");
/// let result = compute_canonical(
///     "/catalog/t-shirts/",
///     &params,
///     &ParamConfig::default(),
///     "https://example.com",
/// );
///
/// assert_eq!(result.robots, RobotsDirective::NoindexFollow);
/// assert_eq!(result.canonical, "https://example.com/catalog/t-shirts/black/");
/// ```
#[must_use]
pub fn compute_canonical(
    pathname: &str,
    params: &QueryParams,
    config: &ParamConfig,
    base_url: &str,
) -> CanonicalResult {
    let mut trace = Vec::new();

    let normalized = normalize_path(pathname);
    if normalized != pathname {
        trace.push(format!("Normalized path {pathname} -> {normalized}"));
    }

    let evaluated = evaluate_params(&normalized, params, config);
    trace.extend(evaluated.notes.iter().cloned());

    let mut robots = RobotsDirective::IndexFollow;
    let mut block_in_robots = false;
    let mut final_path = normalized.clone();
    let mut canonical_params = QueryParams::new();
    let mut noindex_reasons: Vec<String> = Vec::new();
    let mut block_reasons: Vec<String> = Vec::new();

    if !evaluated.unstable_params.is_empty() {
        robots = RobotsDirective::NoindexFollow;
        let keys: Vec<&str> = evaluated.unstable_params.keys().collect();
        trace.push(format!(
            "Unstable parameters ({}) dropped from canonical; robots -> noindex,follow",
            keys.join(", ")
        ));
        noindex_reasons.push(format!("unstable parameters: {}", keys.join(", ")));
    }

    let search_hits: Vec<&str> = SEARCH_STYLE_PARAMS
        .iter()
        .copied()
        .filter(|key| evaluated.unstable_params.contains(key))
        .collect();
    if !search_hits.is_empty() {
        robots = RobotsDirective::NoindexFollow;
        trace.push(format!(
            "Search-style parameters ({}) present; robots -> noindex,follow",
            search_hits.join(", ")
        ));
    }

    for (key, value) in evaluated.stable_params.iter() {
        let mapped = config
            .rules
            .lookup(key)
            .and_then(|rule| rule.mapped_path(&final_path, value))
            .filter(|mapped| !final_path.starts_with(mapped.as_str()));
        match mapped {
            Some(mapped) => {
                trace.push(format!("{key}={value} folded into path {mapped}"));
                final_path = mapped;
            },
            None => {
                trace.push(format!("{key}={value} kept in canonical query"));
                canonical_params.append(key, value);
            },
        }
    }

    if !evaluated.blocked_params.is_empty() {
        block_in_robots = true;
        let keys: Vec<&str> = evaluated.blocked_params.keys().collect();
        trace.push(format!(
            "Blocked parameters ({}) stripped from canonical; flagged for robots.txt",
            keys.join(", ")
        ));
        block_reasons.push(format!("blocked parameters: {}", keys.join(", ")));
    }

    let page_key = &config.pagination.param;
    let explicit_page_one = !config.pagination.page_one_indexable
        && params.get(page_key).and_then(parse_page_number) == Some(1);
    if explicit_page_one {
        trace.push(format!(
            "{page_key}=1 is a distinct document (pageOneIndexable off); pagination policy applies"
        ));
    }
    if evaluated.is_paginated || explicit_page_one {
        match config.pagination.canonical_strategy {
            CanonicalStrategy::SelfReferencing => {
                canonical_params.append(page_key.as_str(), evaluated.page_number.to_string());
                trace.push(format!(
                    "Pagination strategy self: canonical keeps {page_key}={}",
                    evaluated.page_number
                ));
            },
            CanonicalStrategy::Base => {
                trace.push("Pagination strategy base: canonical points at page 1".to_string());
            },
        }
        robots = config.pagination.page_two_plus;
        trace.push(format!(
            "Page {} -> robots {robots} (pagination policy)",
            evaluated.page_number
        ));
        if robots.is_noindex() {
            noindex_reasons.push(format!("page {}", evaluated.page_number));
        }
    }

    if normalized.starts_with("/search") && config.demos.noindex_search {
        robots = RobotsDirective::NoindexFollow;
        trace.push("Search page override -> noindex,follow".to_string());
        noindex_reasons.push("search page".to_string());
    }
    if normalized.starts_with("/account/") {
        robots = RobotsDirective::NoindexNofollow;
        block_in_robots = true;
        trace.push("Account page override -> noindex,nofollow, blocked in robots.txt".to_string());
        noindex_reasons.push("account page".to_string());
        block_reasons.push("account page".to_string());
    }

    let base = base_url.trim_end_matches('/');
    let query = canonical_params.to_query_string();
    let canonical = if query.is_empty() {
        format!("{base}{final_path}")
    } else {
        format!("{base}{final_path}?{query}")
    };

    let blocking = check_robots_blocking(&normalized, params, config);
    if blocking.is_blocked {
        block_in_robots = true;
        trace.push(format!(
            "robots.txt rules matched: {}",
            blocking.matched_rules.join("; ")
        ));
        block_reasons.push("robots.txt rules".to_string());
    }

    trace.push(format!("Final canonical: {canonical}"));
    trace.push(format!("Final robots: {robots}"));
    if robots.is_noindex() {
        trace.push(format!("Noindex because: {}", noindex_reasons.join("; ")));
    }
    if block_in_robots {
        trace.push(format!("Blocked in robots.txt because: {}", block_reasons.join("; ")));
    }

    debug!(
        path = %normalized,
        %canonical,
        %robots,
        block_in_robots,
        "resolved canonical"
    );

    CanonicalResult {
        canonical,
        robots,
        block_in_robots,
        robots_matched_rules: blocking.matched_rules,
        warnings: blocking.warnings,
        trace,
    }
}
