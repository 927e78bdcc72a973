//! # seo-playground-core
//!
//! Canonical URL, robots directive and sitemap decision engine for the SEO
//! playground.
//!
//! Given a URL path and its query parameters, the engine decides what canonical
//! URL to emit, which meta-robots directive applies, whether robots.txt should
//! disallow the URL, and whether the URL belongs in the sitemap.
//!
//! ## Architecture
//!
//! - **Rule table** ([`ParamConfig`]): per-parameter policy, pagination policy,
//!   demo switches and robots.txt toggle groups
//! - **Evaluator** ([`evaluate_params`]): sorts parameters into stable,
//!   unstable and blocked buckets and extracts the page number
//! - **Blocking checker** ([`check_robots_blocking`]): advisory robots.txt
//!   matching per enabled toggle group
//! - **Canonical resolver** ([`compute_canonical`]): the ordered decision
//!   steps producing a [`CanonicalResult`]
//! - **Sitemap generator** ([`generate_sitemap_entries`]): runs catalog
//!   candidates through the resolver
//! - **robots.txt** ([`render_robots_txt`], [`RobotsTxt`]): emission and
//!   pattern matching
//!
//! Every engine operation is a pure function of its inputs. Only the
//! persistence helpers in [`persist`] touch the filesystem.
//!
//! ## Quick Start
//!
//! ```rust
//! use seo_playground_core::{compute_canonical, split_target, ParamConfig, RobotsDirective};
//!
//! let config = ParamConfig::default();
//! let (path, params) = split_target("https://example.com/catalog/t-shirts/?color=blue")?;
//! let result = compute_canonical(&path, &params, &config, "https://example.com");
//!
//! assert_eq!(result.robots, RobotsDirective::IndexFollow);
//! assert_eq!(result.canonical, "https://example.com/catalog/t-shirts/blue/");
//! # Ok::<(), seo_playground_core::Error>(())
//! ```

/// Advisory robots.txt blocking checks
pub mod blocking;
/// Canonical URL resolution
pub mod canonical;
/// Read-only catalog collaborator
pub mod catalog;
/// Rule table and engine configuration
pub mod config;
/// Error types and result aliases
pub mod error;
/// Query-parameter classification
pub mod evaluator;
/// Configuration persistence
pub mod persist;
/// Query-string handling
pub mod query;
/// robots.txt emission and matching
pub mod robots_txt;
/// Sitemap generation
pub mod sitemap;
/// Shared directive and policy enums
pub mod types;

pub use blocking::{BlockingCheck, check_robots_blocking};
pub use canonical::{CanonicalResult, DEFAULT_BASE_URL, compute_canonical, normalize_path};
pub use catalog::{Catalog, Category, DemoCatalog};
pub use config::{
    CanonicalStrategy, ConfigOverrides, DemoToggles, PaginationPolicy, ParamConfig, ParamRule,
    PathMapping, RobotsToggle, RobotsToggleKind, RobotsToggleOverride, RobotsToggles, RuleSet,
};
pub use error::{Error, Result};
pub use evaluator::{EvaluatedParams, ParamBucket, evaluate_params};
pub use persist::{
    COOKIE_NAME, ConfigStore, config_from_cookie_header, config_from_json,
    overrides_to_cookie_value,
};
pub use query::{QueryParams, split_target};
pub use robots_txt::{RobotsTxt, RobotsVerdict, render_robots_txt};
pub use sitemap::{SitemapEntry, generate_sitemap_entries, render_sitemap_xml};
pub use types::{ParamPolicy, RobotsDirective};
