//! Error types for seo-playground-core.
//!
//! The decision engine itself is total: evaluating parameters, resolving a
//! canonical URL, checking robots blocking and generating sitemap entries
//! always produce a value. Errors only arise at the edges, where configuration
//! is read from or written to disk, parsed from a cookie or client store, or
//! where a caller hands over a URL that cannot be split into path and query.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading or writing the persisted configuration
//! - **Configuration Errors**: config directory resolution, unreadable or
//!   malformed settings files, unknown switch names
//! - **Parse Errors**: unrecognized robots directive strings
//! - **Serialization Errors**: JSON encoding of overrides
//! - **URL Errors**: input that is neither an absolute URL nor a path
//!
//! ```rust
//! use seo_playground_core::Error;
//!
//! let err = Error::Config("settings directory unavailable".to_string());
//! assert_eq!(err.category(), "config");
//! assert!(err.to_string().contains("Configuration error"));
//! ```

use thiserror::Error;

/// The main error type for seo-playground-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading and writing the persisted settings file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - The platform config directory cannot be determined
    /// - A demo switch name is not recognized
    /// - A settings file cannot be read, parsed or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization or deserialization failed.
    ///
    /// Occurs when overrides cannot be encoded as JSON for the cookie.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// URL is malformed or invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Useful as a structured logging field and for mapping errors to exit
    /// codes in front ends.
    ///
    /// - `"io"` - File system operations
    /// - `"config"` - Configuration and settings
    /// - `"parse"` - Input parsing
    /// - `"serialization"` - Data format conversion
    /// - `"invalid_url"` - URL format and validation
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::Parse(_) => "parse",
            Self::Serialization(_) => "serialization",
            Self::InvalidUrl(_) => "invalid_url",
        }
    }

    /// Whether the error was caused by caller input rather than the environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::InvalidUrl(_))
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
