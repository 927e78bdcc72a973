//! robots.txt emission and matching.
//!
//! [`render_robots_txt`] turns the enabled toggle groups into the text served at
//! `/robots.txt`. [`RobotsTxt`] parses that text back and answers whether a
//! given path and query would be crawlable, so emitted rules can be checked
//! against real URLs.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::config::ParamConfig;

/// Heading of the pagination demo block.
const PAGINATION_LABEL: &str = "Pagination";

/// Render robots.txt for `config`.
///
/// Each enabled group is written as two comment lines followed by its rule
/// lines, separated by blank lines. With no group enabled an empty
/// `Disallow:` keeps the `*` group well-formed.
///
/// ```rust
/// use seo_playground_core::{render_robots_txt, ParamConfig};
///
/// let text = render_robots_txt(&ParamConfig::default(), "https://example.com");
/// assert!(text.starts_with("User-agent: *\n"));
/// assert!(text.contains("Disallow: /account/"));
/// assert!(text.trim_end().ends_with("Sitemap: https://example.com/api/sitemap"));
/// ```
#[must_use]
pub fn render_robots_txt(config: &ParamConfig, base_url: &str) -> String {
    let mut blocks: Vec<String> = config
        .robots_toggles
        .iter()
        .filter(|(_, toggle)| toggle.enabled)
        .map(|(_, toggle)| {
            let mut block = format!("# {}\n# {}\n", toggle.label, toggle.description);
            for rule in &toggle.rules {
                block.push_str(rule);
                block.push('\n');
            }
            block
        })
        .collect();

    if config.demos.block_pagination_in_robots {
        blocks.push(format!(
            "# {PAGINATION_LABEL}\n# Paginated listings (demo: hides items past page one)\nDisallow: /*?*{}=\n",
            config.pagination.param
        ));
    }

    let mut out = String::from("User-agent: *\n");
    if blocks.is_empty() {
        out.push_str("Disallow:\n");
    } else {
        out.push('\n');
        out.push_str(&blocks.join("\n"));
    }
    out.push('\n');
    out.push_str(&format!(
        "Sitemap: {}/api/sitemap\n",
        base_url.trim_end_matches('/')
    ));
    out
}

/// One parsed `Allow`/`Disallow` line.
#[derive(Debug, Clone)]
struct RobotsRule {
    allow: bool,
    pattern: String,
    regex: Regex,
}

impl RobotsRule {
    fn new(allow: bool, pattern: &str) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }
        let regex = compile_pattern(pattern)?;
        Some(Self {
            allow,
            pattern: pattern.to_string(),
            regex,
        })
    }

    fn line(&self) -> String {
        let directive = if self.allow { "Allow" } else { "Disallow" };
        format!("{directive}: {}", self.pattern)
    }
}

/// `*` matches any run of characters and a trailing `$` anchors the end;
/// everything else, `?` and `.` included, is literal.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    let (body, anchored) = pattern
        .strip_suffix('$')
        .map_or((pattern, false), |body| (body, true));
    let mut regex = String::from("^");
    regex.push_str(&regex::escape(body).replace("\\*", ".*"));
    if anchored {
        regex.push('$');
    }
    Regex::new(&regex).ok()
}

/// Result of [`RobotsTxt::test`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsVerdict {
    /// Whether a crawler may fetch the URL.
    pub allowed: bool,
    /// The deciding rule line, if any matched.
    pub matched: Option<String>,
}

/// Parsed rules of the `*` user-agent group.
#[derive(Debug, Clone, Default)]
pub struct RobotsTxt {
    rules: Vec<RobotsRule>,
}

impl RobotsTxt {
    /// Parse robots.txt text, keeping only rules that apply to `*`.
    ///
    /// Comments, blank lines and unknown directives are skipped. Patterns
    /// are compiled once here.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut rules = Vec::new();
        let mut in_star_group = false;
        let mut group_has_rules = false;

        for line in content.lines() {
            let line = line.split('#').next().unwrap_or_default().trim();
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "user-agent" => {
                    // Consecutive user-agent lines share one group.
                    if group_has_rules {
                        in_star_group = false;
                        group_has_rules = false;
                    }
                    in_star_group |= value == "*";
                },
                directive @ ("allow" | "disallow") => {
                    group_has_rules = true;
                    if in_star_group {
                        if let Some(rule) = RobotsRule::new(directive == "allow", value) {
                            rules.push(rule);
                        }
                    }
                },
                _ => {},
            }
        }

        debug!(rules = rules.len(), "parsed robots.txt");
        Self { rules }
    }

    /// Number of effective rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Test a root-relative path with optional query.
    ///
    /// The longest matching pattern decides; on a tie `Allow` wins. With no
    /// match the URL is allowed.
    ///
    /// ```rust
    /// use seo_playground_core::RobotsTxt;
    ///
    /// let robots = RobotsTxt::parse("User-agent: *\nDisallow: /api/\nAllow: /api/sitemap\n");
    /// assert!(!robots.test("/api/cart").allowed);
    /// assert!(robots.test("/api/sitemap").allowed);
    /// ```
    #[must_use]
    pub fn test(&self, path_and_query: &str) -> RobotsVerdict {
        let best = self
            .rules
            .iter()
            .filter(|rule| rule.regex.is_match(path_and_query))
            .max_by_key(|rule| (rule.pattern.len(), rule.allow));

        best.map_or(
            RobotsVerdict {
                allowed: true,
                matched: None,
            },
            |rule| RobotsVerdict {
                allowed: rule.allow,
                matched: Some(rule.line()),
            },
        )
    }
}
