//! Ordered query-parameter multimap.
//!
//! Mirrors query-string semantics: pairs keep their original order, a key may
//! repeat, and [`QueryParams::get`] returns the first value for a key.

use url::Url;
use url::form_urlencoded;

use crate::{Error, Result};

/// Query parameters of one request, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse a raw query string. A leading `?` is ignored.
    ///
    /// ```rust
    /// use seo_playground_core::QueryParams;
    ///
    /// let params = QueryParams::parse("?sort=price_desc&color=black");
    /// assert_eq!(params.get("color"), Some("black"));
    /// assert_eq!(params.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Append a pair, keeping any existing values for the key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Builder-style [`QueryParams::append`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` appears at least once.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Iterate over every pair in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs, counting repeated keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize as `application/x-www-form-urlencoded`, without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Origin used to parse root-relative input.
const RELATIVE_BASE: &str = "http://localhost/";

/// Split user input into a path and its query parameters.
///
/// Accepts an absolute URL (`https://example.com/catalog/t-shirts/?sort=asc`)
/// or a root-relative path with an optional query (`/catalog/t-shirts/?sort=asc`).
/// Fragments are dropped. Both forms yield the same percent-encoded path.
pub fn split_target(input: &str) -> Result<(String, QueryParams)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidUrl("empty URL".to_string()));
    }

    let url = if trimmed.starts_with('/') {
        // Run relative input through the URL parser so it is percent-encoded
        // exactly like an absolute URL.
        let without_fragment = trimmed.split('#').next().unwrap_or(trimmed);
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (without_fragment, None),
        };
        let mut url = Url::parse(RELATIVE_BASE)?;
        url.set_path(path);
        url.set_query(query);
        url
    } else {
        let url = Url::parse(trimmed)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "unsupported scheme '{}' in {trimmed}",
                url.scheme()
            )));
        }
        url
    };

    let params = url.query().map(QueryParams::parse).unwrap_or_default();
    Ok((url.path().to_string(), params))
}
