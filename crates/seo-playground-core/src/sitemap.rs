//! Sitemap candidate enumeration and XML rendering.
//!
//! Every candidate is run through [`compute_canonical`] and kept only when it
//! resolves to `index,follow` without a robots.txt block. The candidate list
//! deliberately contains parameterized shop URLs that resolve as
//! non-indexable, so the generated table shows why each one was dropped.

use chrono::NaiveDate;
use quick_xml::escape::escape;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::canonical::{CanonicalResult, compute_canonical};
use crate::catalog::Catalog;
use crate::config::ParamConfig;
use crate::query::QueryParams;
use crate::types::RobotsDirective;

/// Static and documentation pages.
const STATIC_PAGES: &[&str] = &[
    "/",
    "/about/",
    "/docs/",
    "/docs/canonical-urls/",
    "/docs/robots-txt/",
    "/docs/sitemaps/",
    "/docs/query-parameters/",
    "/docs/pagination/",
    "/catalog/",
    "/catalog/t-shirts/",
    "/catalog/t-shirts/black/",
    "/catalog/t-shirts/?page=2",
    "/blog/",
];

/// Gender segments under each shop category.
const GENDERS: &[&str] = &["men", "women", "kids", "unisex"];

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One sitemap candidate and its verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    /// Absolute candidate URL.
    pub url: String,
    /// Root-relative path with query.
    pub path: String,
    /// Whether the URL belongs in the sitemap.
    pub included: bool,
    /// Human-readable verdict.
    pub reason: String,
    /// Resolved robots directive.
    pub robots: RobotsDirective,
    /// Whether robots.txt blocks the URL.
    pub block_in_robots: bool,
    /// `<priority>` value.
    pub priority: f32,
}

/// 1.0 for the home page, 0.8 for a top-level section, 0.6 for the rest.
fn priority_for(path: &str) -> f32 {
    let path = path.split('?').next().unwrap_or(path);
    match path.split('/').filter(|segment| !segment.is_empty()).count() {
        0 => 1.0,
        1 => 0.8,
        _ => 0.6,
    }
}

fn reason_for(result: &CanonicalResult) -> String {
    match (result.robots.is_noindex(), result.block_in_robots) {
        (false, false) => format!("Indexable page ({})", result.robots),
        (true, false) => format!("Excluded: robots={}", result.robots),
        (true, true) => format!(
            "Excluded: robots={}, also blocked by robots.txt",
            result.robots
        ),
        (false, true) => format!("Excluded: robots={}, blocked by robots.txt", result.robots),
    }
}

fn candidate_paths(catalog: &dyn Catalog) -> Vec<String> {
    let mut paths: Vec<String> = STATIC_PAGES.iter().map(|p| (*p).to_string()).collect();
    paths.push("/shop/".to_string());

    for category in catalog.categories() {
        let base = format!("/shop/{}/", category.slug);
        paths.push(base.clone());
        paths.extend(GENDERS.iter().map(|gender| format!("{base}{gender}/")));
        paths.extend(
            catalog
                .available_colors(&category.slug)
                .iter()
                .map(|color| format!("{base}?colors={color}")),
        );
        paths.extend(
            catalog
                .available_sizes(&category.slug)
                .iter()
                .map(|size| format!("{base}?sizes={size}")),
        );
    }
    paths
}

/// Resolve every sitemap candidate under `config`.
///
/// ```rust
/// use seo_playground_core::{generate_sitemap_entries, DemoCatalog, ParamConfig};
///
/// let entries = generate_sitemap_entries(&ParamConfig::default(), "https://example.com", &DemoCatalog);
/// let home = entries.iter().find(|e| e.path == "/").unwrap();
/// assert!(home.included);
/// assert!(entries.iter().any(|e| !e.included));
/// ```
#[must_use]
#[instrument(skip(config, catalog))]
pub fn generate_sitemap_entries(
    config: &ParamConfig,
    base_url: &str,
    catalog: &dyn Catalog,
) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let entries: Vec<SitemapEntry> = candidate_paths(catalog)
        .into_iter()
        .map(|path| {
            let (pathname, query) = path.split_once('?').unwrap_or((path.as_str(), ""));
            let result = compute_canonical(pathname, &QueryParams::parse(query), config, base);
            SitemapEntry {
                url: format!("{base}{path}"),
                included: result.is_indexable(),
                reason: reason_for(&result),
                robots: result.robots,
                block_in_robots: result.block_in_robots,
                priority: priority_for(&path),
                path,
            }
        })
        .collect();

    debug!(
        candidates = entries.len(),
        included = entries.iter().filter(|e| e.included).count(),
        "generated sitemap entries"
    );
    entries
}

/// Render the included entries as a sitemaps.org 0.9 `urlset`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use seo_playground_core::{generate_sitemap_entries, render_sitemap_xml, DemoCatalog, ParamConfig};
///
/// let entries = generate_sitemap_entries(&ParamConfig::default(), "https://example.com", &DemoCatalog);
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let xml = render_sitemap_xml(&entries, today);
///
/// assert!(xml.contains("<loc>https://example.com/</loc>"));
/// assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
/// ```
#[must_use]
pub fn render_sitemap_xml(entries: &[SitemapEntry], today: NaiveDate) -> String {
    let lastmod = today.format("%Y-%m-%d").to_string();
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NAMESPACE}\">\n"));
    for entry in entries.iter().filter(|e| e.included) {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(entry.url.as_str())));
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}
