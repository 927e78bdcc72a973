//! Effective configuration for a CLI invocation.

use anyhow::Result;
use seo_playground_core::{ConfigStore, ParamConfig, config_from_cookie_header};
use tracing::{debug, warn};

use crate::cli::Cli;

/// Settings store selected by `--config`, or the platform default.
///
/// # Errors
///
/// Returns an error if no `--config` is given and the platform config
/// directory cannot be determined.
pub fn store(cli: &Cli) -> Result<ConfigStore> {
    match &cli.config {
        Some(path) => Ok(ConfigStore::at(path)),
        None => Ok(ConfigStore::default_location()?),
    }
}

/// Configuration the engine should run with.
///
/// A `--cookie` header takes precedence over the settings file. Failures fall
/// back to the defaults.
pub fn effective_config(cli: &Cli) -> ParamConfig {
    if let Some(header) = &cli.cookie {
        debug!("using configuration from cookie header");
        return config_from_cookie_header(header);
    }
    match store(cli) {
        Ok(store) => store.load(),
        Err(err) => {
            warn!(error = %err, "no settings location, using default configuration");
            ParamConfig::default()
        },
    }
}
