//! Loading and saving user configuration overrides.
//!
//! Overrides reach the engine from three places: the `seo-playground-config`
//! cookie, a client-side JSON store, and a TOML settings file. The cookie and
//! JSON loaders never fail; anything unreadable is logged and the defaults
//! are used instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use url::form_urlencoded;

use crate::config::{ConfigOverrides, ParamConfig};
use crate::{Error, Result};

/// Name of the configuration cookie.
pub const COOKIE_NAME: &str = "seo-playground-config";

/// Settings file name inside the platform config directory.
const SETTINGS_FILE: &str = "settings.toml";

/// Build a configuration from a `Cookie` request header.
///
/// The cookie value is URL-encoded JSON of [`ConfigOverrides`]. A missing,
/// undecodable or malformed cookie yields [`ParamConfig::default`].
///
/// ```rust
/// use seo_playground_core::{config_from_cookie_header, ParamConfig};
///
/// let header = "theme=dark; seo-playground-config=%7B%22demos%22%3A%7B%22noindexSearch%22%3Afalse%7D%7D";
/// let config = config_from_cookie_header(header);
/// assert!(!config.demos.noindex_search);
///
/// assert_eq!(config_from_cookie_header("theme=dark"), ParamConfig::default());
/// ```
#[must_use]
#[instrument(skip(header))]
pub fn config_from_cookie_header(header: &str) -> ParamConfig {
    let Some(raw) = header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name.trim() == COOKIE_NAME).then_some(value.trim())
    }) else {
        debug!("no configuration cookie present");
        return ParamConfig::default();
    };

    // form_urlencoded would turn '+' into a space; cookies are percent-encoded only.
    let escaped = raw.replace('+', "%2B");
    let decoded: String = form_urlencoded::parse(format!("v={escaped}").as_bytes())
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();
    config_from_json(&decoded)
}

/// Build a configuration from client-store JSON overrides.
///
/// Blank input means "no overrides". Malformed JSON is logged and ignored.
#[must_use]
#[instrument(skip(raw))]
pub fn config_from_json(raw: &str) -> ParamConfig {
    if raw.trim().is_empty() {
        return ParamConfig::default();
    }
    match serde_json::from_str::<ConfigOverrides>(raw) {
        Ok(overrides) => ParamConfig::default().merged(&overrides),
        Err(err) => {
            warn!(error = %err, "ignoring malformed configuration overrides");
            ParamConfig::default()
        },
    }
}

/// URL-encode overrides for the configuration cookie.
///
/// # Errors
///
/// Returns an error if the overrides cannot be serialized.
pub fn overrides_to_cookie_value(overrides: &ConfigOverrides) -> Result<String> {
    let json = serde_json::to_string(overrides)?;
    Ok(form_urlencoded::byte_serialize(json.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}

/// TOML file holding persisted [`ConfigOverrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the platform config directory.
    ///
    /// - Linux: `~/.config/seo-playground/settings.toml`
    /// - macOS: `~/Library/Application Support/dev.seo-playground.seo-playground/settings.toml`
    /// - Windows: `%APPDATA%\seo-playground\seo-playground\config\settings.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn default_location() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("dev", "seo-playground", "seo-playground")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(Self::at(dirs.config_dir().join(SETTINGS_FILE)))
    }

    /// Store at an explicit file path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored overrides. A missing file means no overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_overrides(&self) -> Result<ConfigOverrides> {
        if !self.path.exists() {
            return Ok(ConfigOverrides::default());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::Config(format!("Failed to read settings: {e}")))?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse settings: {e}")))
    }

    /// Effective configuration, falling back to defaults when the file is
    /// unreadable.
    #[must_use]
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> ParamConfig {
        match self.load_overrides() {
            Ok(overrides) => ParamConfig::default().merged(&overrides),
            Err(err) => {
                warn!(error = %err, category = err.category(), "using default configuration");
                ParamConfig::default()
            },
        }
    }

    /// Write overrides, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, overrides: &ConfigOverrides) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let content = toml::to_string_pretty(overrides)
            .map_err(|e| Error::Config(format!("Failed to serialize settings: {e}")))?;
        fs::write(&self.path, content)
            .map_err(|e| Error::Config(format!("Failed to write settings: {e}")))?;
        debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }

    /// Delete the settings file. Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be removed.
    pub fn reset(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::RobotsToggleKind;
    use crate::types::RobotsDirective;
    use tempfile::TempDir;

    #[test]
    fn test_cookie_round_trip() {
        // Given: Overrides enabling sort blocking
        let mut overrides = ConfigOverrides::default();
        overrides.set_toggle_enabled(RobotsToggleKind::SortBlocking, true);
        let value = overrides_to_cookie_value(&overrides).unwrap();

        // When: The value arrives among other cookies
        let header = format!("a=1; {COOKIE_NAME}={value}; b=2");
        let config = config_from_cookie_header(&header);

        // Then: The override applies and other groups keep their defaults
        assert!(config.robots_toggles.is_enabled(RobotsToggleKind::SortBlocking));
        assert!(config.robots_toggles.is_enabled(RobotsToggleKind::TrackingParams));
    }

    #[test]
    fn test_cookie_keeps_literal_plus() {
        let mut overrides = ConfigOverrides::default();
        overrides.set_toggle_enabled(RobotsToggleKind::SortBlocking, true);
        overrides
            .robots_toggles
            .as_mut()
            .unwrap()
            .get_mut("sortBlocking")
            .unwrap()
            .label = Some("Sort + order".to_string());
        let value = overrides_to_cookie_value(&overrides).unwrap();
        assert!(!value.contains('+'));

        let config = config_from_cookie_header(&format!("{COOKIE_NAME}={value}"));
        assert_eq!(config.robots_toggles.sort_blocking.label, "Sort + order");
    }

    #[test]
    fn test_corrupt_cookie_falls_back() {
        let config = config_from_cookie_header(&format!("{COOKIE_NAME}=%7Bnot-json"));
        assert_eq!(config, ParamConfig::default());
    }

    #[test]
    fn test_json_shallow_merge() {
        let config = config_from_json(r#"{"pagination": {"pageTwoPlus": "index,follow"}}"#);
        assert_eq!(config.pagination.page_two_plus, RobotsDirective::IndexFollow);
        assert_eq!(config.pagination.param, "page");
        assert_eq!(config.rules, ParamConfig::default().rules);
    }

    #[test]
    fn test_json_blank_and_garbage() {
        assert_eq!(config_from_json(""), ParamConfig::default());
        assert_eq!(config_from_json("[1, 2"), ParamConfig::default());
    }

    #[test]
    fn test_store_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join("settings.toml"));
        assert!(store.load_overrides().unwrap().is_empty());
        assert_eq!(store.load(), ParamConfig::default());
        assert!(!store.reset().unwrap());
    }

    #[test]
    fn test_store_save_load_reset() {
        // Given: A store in a nested directory that does not exist yet
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join("nested").join("settings.toml"));
        let mut overrides = ConfigOverrides::default();
        overrides.set_toggle_enabled(RobotsToggleKind::UiParams, true);
        overrides.set_demo("noindexSearch", false).unwrap();

        // When: Saving and loading
        store.save(&overrides).unwrap();
        let loaded = store.load_overrides().unwrap();

        // Then: The overrides survive and apply
        assert_eq!(loaded, overrides);
        let config = store.load();
        assert!(config.robots_toggles.is_enabled(RobotsToggleKind::UiParams));
        assert!(!config.demos.noindex_search);

        assert!(store.reset().unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_store_corrupt_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "demos = [[[").unwrap();
        let store = ConfigStore::at(&path);

        let err = store.load_overrides().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.category(), "config");
        assert_eq!(store.load(), ParamConfig::default());
    }
}
