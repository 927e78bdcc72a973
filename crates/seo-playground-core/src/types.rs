use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Meta-robots directive emitted for a URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RobotsDirective {
    /// `index,follow`
    #[default]
    #[serde(rename = "index,follow")]
    IndexFollow,
    /// `noindex,follow`
    #[serde(rename = "noindex,follow")]
    NoindexFollow,
    /// `noindex,nofollow`
    #[serde(rename = "noindex,nofollow")]
    NoindexNofollow,
}

impl RobotsDirective {
    /// The directive as it appears in a `<meta name="robots">` tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IndexFollow => "index,follow",
            Self::NoindexFollow => "noindex,follow",
            Self::NoindexNofollow => "noindex,nofollow",
        }
    }

    /// Whether search engines are asked to keep the page out of the index.
    #[must_use]
    pub const fn is_noindex(self) -> bool {
        !matches!(self, Self::IndexFollow)
    }
}

impl fmt::Display for RobotsDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RobotsDirective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "index,follow" => Ok(Self::IndexFollow),
            "noindex,follow" => Ok(Self::NoindexFollow),
            "noindex,nofollow" => Ok(Self::NoindexNofollow),
            _ => Err(Error::Parse(format!("Invalid robots directive: {s}"))),
        }
    }
}

/// How a recognized query parameter is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamPolicy {
    /// A meaningful facet, kept in the canonical URL (possibly folded into the path).
    Stable,
    /// Ordering or view-only; dropped from the canonical URL and forces noindex.
    Unstable,
    /// Tracking noise; stripped from the canonical URL and flagged for robots.txt.
    Blocked,
}

impl ParamPolicy {
    /// Lowercase policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Unstable => "unstable",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for ParamPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
