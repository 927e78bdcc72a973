//! Parameter rule table and engine configuration.
//!
//! [`ParamConfig`] is the immutable input to every evaluation. It bundles the
//! per-parameter rules, the global pagination policy, two demo switches and
//! the six robots.txt toggle groups. The engine never mutates it; persisted
//! user preferences are expressed as [`ConfigOverrides`] and folded over the
//! defaults with [`ParamConfig::merged`] before any request is evaluated.
//!
//! ## Override shape
//!
//! Overrides use the same camelCase keys as the persisted JSON:
//!
//! ```rust
//! use seo_playground_core::{ConfigOverrides, ParamConfig, RobotsToggleKind};
//!
//! let overrides: ConfigOverrides = serde_json::from_str(
//!     r#"{"robotsToggles": {"sortBlocking": {"enabled": true}}}"#,
//! )?;
//! let config = ParamConfig::default().merged(&overrides);
//!
//! assert!(config.robots_toggles.get(RobotsToggleKind::SortBlocking).enabled);
//! // Groups not named in the override keep their defaults.
//! assert!(config.robots_toggles.get(RobotsToggleKind::TrackingParams).enabled);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{ParamPolicy, RobotsDirective};
use crate::{Error, Result};

/// Rewrites a clean hierarchical path from a stable parameter's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PathMapping {
    /// `{prefix}{slug}/` with value `v` becomes `{prefix}{slug}/{v}/`.
    ///
    /// Only fires when the path is exactly one segment below `prefix`.
    AppendSegment {
        /// Path prefix including both slashes, e.g. `/catalog/`.
        prefix: String,
    },
}

impl PathMapping {
    /// Apply the mapping, returning `None` when the path does not have the
    /// expected shape or the value cannot be used as a path segment.
    #[must_use]
    pub fn apply(&self, pathname: &str, value: &str) -> Option<String> {
        match self {
            Self::AppendSegment { prefix } => {
                let slug = pathname.strip_prefix(prefix.as_str())?.strip_suffix('/')?;
                if slug.is_empty() || slug.contains('/') {
                    return None;
                }
                let segment = value.trim().to_ascii_lowercase();
                if !is_slug_segment(&segment) {
                    return None;
                }
                Some(format!("{prefix}{slug}/{segment}/"))
            },
        }
    }
}

fn is_slug_segment(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Policy for one recognized query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamRule {
    /// Parameter key, case-sensitive.
    pub name: String,
    /// Bucket the parameter is sorted into.
    pub policy: ParamPolicy,
    /// Human-readable rationale.
    #[serde(default)]
    pub description: String,
    /// Optional clean-path rewrite for stable parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_to_path: Option<PathMapping>,
}

impl ParamRule {
    /// Rule without a path mapping.
    pub fn new(name: &str, policy: ParamPolicy, description: &str) -> Self {
        Self {
            name: name.to_string(),
            policy,
            description: description.to_string(),
            map_to_path: None,
        }
    }

    /// Attach a path mapping.
    #[must_use]
    pub fn with_mapping(mut self, mapping: PathMapping) -> Self {
        self.map_to_path = Some(mapping);
        self
    }

    /// Mapped path for `value` on `pathname`, if this rule maps at all.
    #[must_use]
    pub fn mapped_path(&self, pathname: &str, value: &str) -> Option<String> {
        self.map_to_path
            .as_ref()
            .and_then(|mapping| mapping.apply(pathname, value))
    }
}

/// Rules keyed by parameter name.
///
/// Keeps declaration order for display and serialization. When two rules share
/// a name the later one wins the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ParamRule>", into = "Vec<ParamRule>")]
pub struct RuleSet {
    rules: Vec<ParamRule>,
    index: HashMap<String, usize>,
}

impl RuleSet {
    /// Build a rule set from rules in declaration order.
    #[must_use]
    pub fn new(rules: Vec<ParamRule>) -> Self {
        let index = rules
            .iter()
            .enumerate()
            .map(|(position, rule)| (rule.name.clone(), position))
            .collect();
        Self { rules, index }
    }

    /// Rule for `name`, or `None` when the parameter is unknown.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ParamRule> {
        self.index.get(name).and_then(|&i| self.rules.get(i))
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ParamRule> {
        self.rules.iter()
    }

    /// Number of declared rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<ParamRule>> for RuleSet {
    fn from(rules: Vec<ParamRule>) -> Self {
        Self::new(rules)
    }
}

impl From<RuleSet> for Vec<ParamRule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        let catalog_facet = PathMapping::AppendSegment {
            prefix: "/catalog/".to_string(),
        };
        Self::new(vec![
            ParamRule::new(
                "color",
                ParamPolicy::Stable,
                "Distinct product facet with search demand; folds into /catalog/{category}/{color}/",
            )
            .with_mapping(catalog_facet),
            ParamRule::new(
                "size",
                ParamPolicy::Stable,
                "Distinct product facet; kept as a query parameter in the canonical URL",
            ),
            ParamRule::new(
                "sort",
                ParamPolicy::Unstable,
                "Reorders the same items; every ordering would duplicate the listing",
            ),
            ParamRule::new(
                "view",
                ParamPolicy::Unstable,
                "Grid/list presentation preference with no content change",
            ),
            ParamRule::new(
                "per_page",
                ParamPolicy::Unstable,
                "Page size preference; reshapes pagination without new content",
            ),
            ParamRule::new(
                "q",
                ParamPolicy::Unstable,
                "Free-text search; unbounded value space",
            ),
            ParamRule::new(
                "price_min",
                ParamPolicy::Unstable,
                "Price range filter; numeric ranges form a crawl trap",
            ),
            ParamRule::new(
                "price_max",
                ParamPolicy::Unstable,
                "Price range filter; numeric ranges form a crawl trap",
            ),
            ParamRule::new(
                "colors",
                ParamPolicy::Unstable,
                "Multi-select shop filter; combinations explode combinatorially",
            ),
            ParamRule::new(
                "sizes",
                ParamPolicy::Unstable,
                "Multi-select shop filter; combinations explode combinatorially",
            ),
            ParamRule::new("utm_source", ParamPolicy::Blocked, "Campaign tracking"),
            ParamRule::new("utm_medium", ParamPolicy::Blocked, "Campaign tracking"),
            ParamRule::new("utm_campaign", ParamPolicy::Blocked, "Campaign tracking"),
            ParamRule::new("gclid", ParamPolicy::Blocked, "Google Ads click identifier"),
            ParamRule::new("fbclid", ParamPolicy::Blocked, "Facebook click identifier"),
            ParamRule::new("sid", ParamPolicy::Blocked, "Session identifier"),
        ])
    }
}

/// Canonical URL strategy for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanonicalStrategy {
    /// Each page canonicalizes to itself, keeping the page parameter.
    #[serde(rename = "self")]
    SelfReferencing,
    /// Every page canonicalizes to page 1.
    #[serde(rename = "base")]
    Base,
}

impl fmt::Display for CanonicalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SelfReferencing => "self",
            Self::Base => "base",
        })
    }
}

/// Global pagination handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationPolicy {
    /// Query key holding the page number.
    pub param: String,
    /// Page 1 is the same document as the unparameterized URL.
    pub page_one_indexable: bool,
    /// Directive applied to page 2 and beyond.
    pub page_two_plus: RobotsDirective,
    /// How paginated canonicals are built.
    pub canonical_strategy: CanonicalStrategy,
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            param: "page".to_string(),
            page_one_indexable: true,
            page_two_plus: RobotsDirective::NoindexFollow,
            canonical_strategy: CanonicalStrategy::SelfReferencing,
        }
    }
}

/// Demonstration switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoToggles {
    /// Emit `noindex,follow` on `/search` pages.
    pub noindex_search: bool,
    /// Disallow paginated URLs in robots.txt.
    pub block_pagination_in_robots: bool,
}

impl Default for DemoToggles {
    fn default() -> Self {
        Self {
            noindex_search: true,
            block_pagination_in_robots: false,
        }
    }
}

impl DemoToggles {
    /// Persisted keys, in display order.
    pub const KEYS: [&'static str; 2] = ["noindexSearch", "blockPaginationInRobots"];

    /// Set one switch by key. Kebab-case and snake_case spellings are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown key.
    pub fn set(&mut self, key: &str, enabled: bool) -> Result<()> {
        let folded: String = key
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "noindexsearch" => self.noindex_search = enabled,
            "blockpaginationinrobots" => self.block_pagination_in_robots = enabled,
            _ => {
                return Err(Error::Config(format!(
                    "unknown demo switch '{key}' (expected one of: {})",
                    Self::KEYS.join(", ")
                )));
            },
        }
        Ok(())
    }
}

/// Identity of a robots.txt toggle group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RobotsToggleKind {
    /// `/account/` and internal `/api/` routes.
    ProtectedPaths,
    /// Campaign and click-tracking parameters.
    TrackingParams,
    /// Internal search result pages.
    SearchPages,
    /// Presentation-only parameters.
    UiParams,
    /// Any `sort` parameter.
    SortBlocking,
    /// `sort` stacked with a facet parameter.
    StackedParams,
}

impl RobotsToggleKind {
    /// Every group, in emission order.
    pub const ALL: [Self; 6] = [
        Self::ProtectedPaths,
        Self::TrackingParams,
        Self::SearchPages,
        Self::UiParams,
        Self::SortBlocking,
        Self::StackedParams,
    ];

    /// Persisted key for the group.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ProtectedPaths => "protectedPaths",
            Self::TrackingParams => "trackingParams",
            Self::SearchPages => "searchPages",
            Self::UiParams => "uiParams",
            Self::SortBlocking => "sortBlocking",
            Self::StackedParams => "stackedParams",
        }
    }

    /// Resolve a persisted key. Also accepts kebab-case and snake_case spellings.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let folded: String = key
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().to_ascii_lowercase() == folded)
    }
}

impl fmt::Display for RobotsToggleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One independently switchable bundle of robots.txt lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsToggle {
    /// Short heading, emitted as a comment.
    pub label: String,
    /// Longer explanation, emitted as a comment.
    pub description: String,
    /// Literal `Disallow:`/`Allow:` lines.
    pub rules: Vec<String>,
    /// Whether the group is active.
    pub enabled: bool,
}

impl RobotsToggle {
    fn new(label: &str, description: &str, rules: &[&str], enabled: bool) -> Self {
        Self {
            label: label.to_string(),
            description: description.to_string(),
            rules: rules.iter().map(|r| (*r).to_string()).collect(),
            enabled,
        }
    }

    fn apply(&mut self, overrides: &RobotsToggleOverride) {
        if let Some(label) = &overrides.label {
            self.label.clone_from(label);
        }
        if let Some(description) = &overrides.description {
            self.description.clone_from(description);
        }
        if let Some(rules) = &overrides.rules {
            self.rules.clone_from(rules);
        }
        if let Some(enabled) = overrides.enabled {
            self.enabled = enabled;
        }
    }
}

/// The six robots.txt toggle groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsToggles {
    /// See [`RobotsToggleKind::ProtectedPaths`].
    pub protected_paths: RobotsToggle,
    /// See [`RobotsToggleKind::TrackingParams`].
    pub tracking_params: RobotsToggle,
    /// See [`RobotsToggleKind::SearchPages`].
    pub search_pages: RobotsToggle,
    /// See [`RobotsToggleKind::UiParams`].
    pub ui_params: RobotsToggle,
    /// See [`RobotsToggleKind::SortBlocking`].
    pub sort_blocking: RobotsToggle,
    /// See [`RobotsToggleKind::StackedParams`].
    pub stacked_params: RobotsToggle,
}

impl RobotsToggles {
    /// Group by identity.
    #[must_use]
    pub const fn get(&self, kind: RobotsToggleKind) -> &RobotsToggle {
        match kind {
            RobotsToggleKind::ProtectedPaths => &self.protected_paths,
            RobotsToggleKind::TrackingParams => &self.tracking_params,
            RobotsToggleKind::SearchPages => &self.search_pages,
            RobotsToggleKind::UiParams => &self.ui_params,
            RobotsToggleKind::SortBlocking => &self.sort_blocking,
            RobotsToggleKind::StackedParams => &self.stacked_params,
        }
    }

    fn get_mut(&mut self, kind: RobotsToggleKind) -> &mut RobotsToggle {
        match kind {
            RobotsToggleKind::ProtectedPaths => &mut self.protected_paths,
            RobotsToggleKind::TrackingParams => &mut self.tracking_params,
            RobotsToggleKind::SearchPages => &mut self.search_pages,
            RobotsToggleKind::UiParams => &mut self.ui_params,
            RobotsToggleKind::SortBlocking => &mut self.sort_blocking,
            RobotsToggleKind::StackedParams => &mut self.stacked_params,
        }
    }

    /// Groups in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (RobotsToggleKind, &RobotsToggle)> {
        RobotsToggleKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }

    /// Whether the group is active.
    #[must_use]
    pub const fn is_enabled(&self, kind: RobotsToggleKind) -> bool {
        self.get(kind).enabled
    }
}

impl Default for RobotsToggles {
    fn default() -> Self {
        Self {
            protected_paths: RobotsToggle::new(
                "Protected paths",
                "Account pages and internal API routes have no search value",
                &[
                    "Disallow: /account/",
                    "Disallow: /api/",
                    "Allow: /api/robots",
                    "Allow: /api/sitemap",
                ],
                true,
            ),
            tracking_params: RobotsToggle::new(
                "Tracking parameters",
                "Campaign and click identifiers duplicate every URL they touch",
                &[
                    "Disallow: /*?*utm_source=",
                    "Disallow: /*?*utm_medium=",
                    "Disallow: /*?*utm_campaign=",
                    "Disallow: /*?*gclid=",
                    "Disallow: /*?*fbclid=",
                    "Disallow: /*?*sid=",
                ],
                true,
            ),
            search_pages: RobotsToggle::new(
                "Search pages",
                "Internal search results are an unbounded URL space",
                &["Disallow: /search"],
                false,
            ),
            ui_params: RobotsToggle::new(
                "UI preference parameters",
                "View and page-size preferences do not change content",
                &["Disallow: /*?*view=", "Disallow: /*?*per_page="],
                false,
            ),
            sort_blocking: RobotsToggle::new(
                "Sort blocking",
                "Sorted listings duplicate the default ordering",
                &["Disallow: /*?*sort="],
                false,
            ),
            stacked_params: RobotsToggle::new(
                "Stacked parameter blocking",
                "Sorting stacked on a facet multiplies URL combinations",
                &[
                    "Disallow: /*?*sort=*&color=",
                    "Disallow: /*?*color=*&sort=",
                    "Disallow: /*?*sort=*&size=",
                    "Disallow: /*?*size=*&sort=",
                ],
                false,
            ),
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamConfig {
    /// Per-parameter rules.
    pub rules: RuleSet,
    /// Pagination policy.
    pub pagination: PaginationPolicy,
    /// Demonstration switches.
    pub demos: DemoToggles,
    /// robots.txt toggle groups.
    pub robots_toggles: RobotsToggles,
}

impl ParamConfig {
    /// New configuration with `overrides` folded over `self`.
    ///
    /// `rules`, `pagination` and `demos` are replaced wholesale when present
    /// (missing fields inside `pagination`/`demos` take their defaults).
    /// `robotsToggles` merges group by group and field by field. Unknown group
    /// keys are logged and skipped.
    #[must_use]
    pub fn merged(&self, overrides: &ConfigOverrides) -> Self {
        let mut merged = self.clone();
        if let Some(rules) = &overrides.rules {
            merged.rules = RuleSet::new(rules.clone());
        }
        if let Some(pagination) = &overrides.pagination {
            merged.pagination = pagination.clone();
        }
        if let Some(demos) = overrides.demos {
            merged.demos = demos;
        }
        if let Some(toggles) = &overrides.robots_toggles {
            for (key, toggle) in toggles {
                match RobotsToggleKind::from_key(key) {
                    Some(kind) => merged.robots_toggles.get_mut(kind).apply(toggle),
                    None => warn!(key = %key, "ignoring unknown robots toggle group"),
                }
            }
        }
        merged
    }
}

/// Partial override for one toggle group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsToggleOverride {
    /// Replacement heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Replacement explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement robots.txt lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    /// Replacement enabled flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Persisted user preferences, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    /// Replacement rule list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ParamRule>>,
    /// Replacement pagination policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationPolicy>,
    /// Replacement demo switches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demos: Option<DemoToggles>,
    /// Per-group toggle overrides keyed by group key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots_toggles: Option<BTreeMap<String, RobotsToggleOverride>>,
}

impl ConfigOverrides {
    /// Record an enabled flag for one toggle group.
    pub fn set_toggle_enabled(&mut self, kind: RobotsToggleKind, enabled: bool) {
        self.robots_toggles
            .get_or_insert_with(BTreeMap::new)
            .entry(kind.key().to_string())
            .or_default()
            .enabled = Some(enabled);
    }

    /// Record one demo switch, starting from the overridden or default demos.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown key.
    pub fn set_demo(&mut self, key: &str, enabled: bool) -> Result<()> {
        let mut demos = self.demos.unwrap_or_default();
        demos.set(key, enabled)?;
        self.demos = Some(demos);
        Ok(())
    }

    /// Whether nothing is overridden.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_none()
            && self.pagination.is_none()
            && self.demos.is_none()
            && self.robots_toggles.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_rule_lookup() {
        // Given: The default rule table
        let rules = RuleSet::default();

        // When/Then: Known names resolve to their policy, unknown names do not resolve
        assert_eq!(rules.lookup("color").unwrap().policy, ParamPolicy::Stable);
        assert_eq!(rules.lookup("sort").unwrap().policy, ParamPolicy::Unstable);
        assert_eq!(
            rules.lookup("utm_source").unwrap().policy,
            ParamPolicy::Blocked
        );
        assert!(rules.lookup("Color").is_none());
        assert!(rules.lookup("ref").is_none());
    }

    #[test]
    fn test_later_duplicate_rule_wins_lookup() {
        let rules = RuleSet::new(vec![
            ParamRule::new("x", ParamPolicy::Stable, ""),
            ParamRule::new("x", ParamPolicy::Blocked, ""),
        ]);
        assert_eq!(rules.lookup("x").unwrap().policy, ParamPolicy::Blocked);
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_catalog_mapping_shapes() {
        let mapping = PathMapping::AppendSegment {
            prefix: "/catalog/".to_string(),
        };

        assert_eq!(
            mapping.apply("/catalog/t-shirts/", "black"),
            Some("/catalog/t-shirts/black/".to_string())
        );
        assert_eq!(
            mapping.apply("/catalog/t-shirts/", "Navy-Blue"),
            Some("/catalog/t-shirts/navy-blue/".to_string())
        );
        // Already one level deeper
        assert_eq!(mapping.apply("/catalog/t-shirts/black/", "blue"), None);
        // Not under the prefix
        assert_eq!(mapping.apply("/shop/t-shirts/", "black"), None);
        // Values that cannot be a path segment
        assert_eq!(mapping.apply("/catalog/t-shirts/", "a/b"), None);
        assert_eq!(mapping.apply("/catalog/t-shirts/", ""), None);
        assert_eq!(mapping.apply("/catalog/", "black"), None);
    }

    #[test]
    fn test_default_toggles() {
        let toggles = RobotsToggles::default();
        assert!(toggles.is_enabled(RobotsToggleKind::ProtectedPaths));
        assert!(toggles.is_enabled(RobotsToggleKind::TrackingParams));
        assert!(!toggles.is_enabled(RobotsToggleKind::SearchPages));
        assert!(!toggles.is_enabled(RobotsToggleKind::UiParams));
        assert!(!toggles.is_enabled(RobotsToggleKind::SortBlocking));
        assert!(!toggles.is_enabled(RobotsToggleKind::StackedParams));
        assert_eq!(toggles.iter().count(), 6);
    }

    #[test]
    fn test_toggle_kind_keys() {
        for kind in RobotsToggleKind::ALL {
            assert_eq!(RobotsToggleKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(
            RobotsToggleKind::from_key("sort-blocking"),
            Some(RobotsToggleKind::SortBlocking)
        );
        assert_eq!(
            RobotsToggleKind::from_key("ui_params"),
            Some(RobotsToggleKind::UiParams)
        );
        assert_eq!(RobotsToggleKind::from_key("everything"), None);
    }

    #[test]
    fn test_merge_replaces_top_level_sections() {
        // Given: Overrides for pagination with only one field set
        let overrides: ConfigOverrides = serde_json::from_str(
            r#"{"pagination": {"canonicalStrategy": "base"}, "demos": {"noindexSearch": false}}"#,
        )
        .unwrap();

        // When: Merging over defaults
        let config = ParamConfig::default().merged(&overrides);

        // Then: Named fields change, missing fields take defaults
        assert_eq!(config.pagination.canonical_strategy, CanonicalStrategy::Base);
        assert_eq!(config.pagination.param, "page");
        assert_eq!(
            config.pagination.page_two_plus,
            RobotsDirective::NoindexFollow
        );
        assert!(!config.demos.noindex_search);
        assert_eq!(config.rules, RuleSet::default());
    }

    #[test]
    fn test_merge_toggles_per_group() {
        let overrides: ConfigOverrides = serde_json::from_str(
            r#"{"robotsToggles": {
                "trackingParams": {"enabled": false},
                "searchPages": {"enabled": true, "rules": ["Disallow: /search/"]},
                "bogus": {"enabled": true}
            }}"#,
        )
        .unwrap();

        let config = ParamConfig::default().merged(&overrides);

        assert!(!config.robots_toggles.tracking_params.enabled);
        assert!(config.robots_toggles.search_pages.enabled);
        assert_eq!(config.robots_toggles.search_pages.rules, vec!["Disallow: /search/"]);
        assert_eq!(config.robots_toggles.search_pages.label, "Search pages");
        assert!(config.robots_toggles.protected_paths.enabled);
    }

    #[test]
    fn test_merge_never_mutates_base() {
        let base = ParamConfig::default();
        let mut overrides = ConfigOverrides::default();
        overrides.set_toggle_enabled(RobotsToggleKind::SortBlocking, true);

        let merged = base.merged(&overrides);

        assert!(merged.robots_toggles.sort_blocking.enabled);
        assert!(!base.robots_toggles.sort_blocking.enabled);
        assert_eq!(base, ParamConfig::default());
    }

    #[test]
    fn test_config_json_shape() {
        let json = serde_json::to_value(ParamConfig::default()).unwrap();
        assert_eq!(json["pagination"]["pageTwoPlus"], "noindex,follow");
        assert_eq!(json["pagination"]["canonicalStrategy"], "self");
        assert_eq!(json["demos"]["blockPaginationInRobots"], false);
        assert_eq!(json["rules"][0]["name"], "color");
        assert_eq!(json["rules"][0]["mapToPath"]["kind"], "appendSegment");
        assert!(json["robotsToggles"]["stackedParams"]["rules"].is_array());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = ParamConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: ParamConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_overrides_empty() {
        let mut overrides = ConfigOverrides::default();
        assert!(overrides.is_empty());
        overrides.set_toggle_enabled(RobotsToggleKind::UiParams, true);
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_set_demo_keeps_other_switch() {
        // Given: No overrides
        let mut overrides = ConfigOverrides::default();

        // When: One demo switch is turned on by its kebab-case name
        overrides.set_demo("block-pagination-in-robots", true).unwrap();

        // Then: The other switch keeps its default
        let demos = overrides.demos.unwrap();
        assert!(demos.block_pagination_in_robots);
        assert!(demos.noindex_search);
        assert!(matches!(
            overrides.set_demo("nope", true),
            Err(Error::Config(_))
        ));
    }

    proptest! {
        #[test]
        fn test_mapping_output_is_lowercase_slug(value in "[A-Za-z0-9_-]{1,12}") {
            let mapping = PathMapping::AppendSegment { prefix: "/catalog/".to_string() };
            let mapped = mapping.apply("/catalog/hoodies/", &value).unwrap();
            prop_assert_eq!(mapped.to_ascii_lowercase(), mapped.clone());
            prop_assert!(mapped.starts_with("/catalog/hoodies/"));
            prop_assert!(mapped.ends_with('/'));
        }
    }
}
