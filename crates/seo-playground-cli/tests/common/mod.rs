#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a configured `seo-playground` command suitable for integration tests.
///
/// The settings file points into `config_dir` so tests never touch the real
/// platform config directory.
#[allow(dead_code)]
pub fn seo_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("seo-playground"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("SEO_PLAYGROUND_CONFIG", config_dir.join("settings.toml"));
    cmd.env_remove("SEO_PLAYGROUND_BASE_URL");
    cmd.env_remove("SEO_PLAYGROUND_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run a command expected to succeed and parse its stdout as JSON.
#[allow(dead_code)]
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be valid JSON")
}
