//! Query-parameter classification.

use crate::config::ParamConfig;
use crate::query::QueryParams;
use crate::types::ParamPolicy;

/// Ordered key/value bucket with one entry per key; a repeated key keeps its
/// first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamBucket {
    entries: Vec<(String, String)>,
}

impl ParamBucket {
    fn insert(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    /// Value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classification of one request's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedParams {
    /// Facet parameters worth keeping.
    pub stable_params: ParamBucket,
    /// Ordering/view parameters and anything unrecognized.
    pub unstable_params: ParamBucket,
    /// Tracking parameters.
    pub blocked_params: ParamBucket,
    /// Parsed page number, 1 when absent or unparseable.
    pub page_number: u64,
    /// `page_number > 1`.
    pub is_paginated: bool,
    /// Decision notes in evaluation order.
    pub notes: Vec<String>,
}

/// Leading-integer parse: optional whitespace and sign, then digits.
///
/// Returns `None` when no digits lead the value, for a zero or negative
/// number, and on overflow; callers treat all of these as page 1.
pub(crate) fn parse_page_number(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let number: u64 = digits[..end].parse().ok()?;
    if negative || number == 0 {
        None
    } else {
        Some(number)
    }
}

/// Classify the parameters of one request.
///
/// The pagination parameter is taken out first; every other key is looked up
/// by exact name and sorted into a bucket. Keys without a rule land in the
/// unstable bucket so an unknown parameter can never be indexed silently.
///
/// ```rust
/// use seo_playground_core::{evaluate_params, ParamConfig, QueryParams};
///
/// let params = QueryParams::parse("sort=price_desc&color=black&page=3&ref=mail");
/// let evaluated = evaluate_params("/catalog/t-shirts/", &params, &ParamConfig::default());
///
/// assert_eq!(evaluated.stable_params.get("color"), Some("black"));
/// assert!(evaluated.unstable_params.contains("sort"));
/// assert!(evaluated.unstable_params.contains("ref"));
/// assert_eq!(evaluated.page_number, 3);
/// assert!(evaluated.is_paginated);
/// ```
#[must_use]
pub fn evaluate_params(pathname: &str, params: &QueryParams, config: &ParamConfig) -> EvaluatedParams {
    let page_key = config.pagination.param.as_str();
    let mut notes = Vec::new();

    let page_number = params
        .get(page_key)
        .and_then(parse_page_number)
        .unwrap_or(1);
    let is_paginated = page_number > 1;
    if is_paginated {
        notes.push(format!("Pagination: {page_key}={page_number} on {pathname}"));
    } else if params.contains(page_key) {
        notes.push(format!(
            "Pagination: {page_key} resolves to page 1, treated as unparameterized"
        ));
    }

    let mut stable_params = ParamBucket::default();
    let mut unstable_params = ParamBucket::default();
    let mut blocked_params = ParamBucket::default();

    for (key, value) in params.iter().filter(|(key, _)| *key != page_key) {
        match config.rules.lookup(key) {
            Some(rule) => {
                notes.push(format!("{key}={value}: rule matched ({})", rule.policy));
                match rule.policy {
                    ParamPolicy::Stable => stable_params.insert(key, value),
                    ParamPolicy::Unstable => unstable_params.insert(key, value),
                    ParamPolicy::Blocked => blocked_params.insert(key, value),
                }
            },
            None => {
                notes.push(format!(
                    "{key}={value}: no rule, treated as unstable by default"
                ));
                unstable_params.insert(key, value);
            },
        }
    }

    for (label, bucket) in [
        ("Stable", &stable_params),
        ("Unstable", &unstable_params),
        ("Blocked", &blocked_params),
    ] {
        if !bucket.is_empty() {
            let keys: Vec<&str> = bucket.keys().collect();
            notes.push(format!("{label} parameters: {}", keys.join(", ")));
        }
    }

    EvaluatedParams {
        stable_params,
        unstable_params,
        blocked_params,
        page_number,
        is_paginated,
        notes,
    }
}
