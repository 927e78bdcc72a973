#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{json_output, seo_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn config_toggle_persists_and_changes_robots() -> Result<()> {
    let dir = tempdir()?;

    seo_cmd(dir.path())
        .args(["config", "toggle", "sort-blocking", "on"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sortBlocking enabled"));

    assert!(dir.path().join("settings.toml").exists());

    seo_cmd(dir.path())
        .args(["robots", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sort blocking"))
        .stdout(predicate::str::contains("Disallow: /*?*sort="));

    let json = json_output(seo_cmd(dir.path()).args(["config", "show", "--format", "json"]));
    assert_eq!(json["overrides"]["robotsToggles"]["sortBlocking"]["enabled"], true);
    assert_eq!(json["effective"]["robotsToggles"]["sortBlocking"]["enabled"], true);
    assert_eq!(json["effective"]["robotsToggles"]["trackingParams"]["enabled"], true);
    Ok(())
}

#[test]
fn config_demo_and_reset() -> Result<()> {
    let dir = tempdir()?;

    seo_cmd(dir.path())
        .args(["config", "demo", "noindex-search", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("noindexSearch disabled"));

    let json = json_output(seo_cmd(dir.path()).args(["resolve", "/search", "--format", "json"]));
    assert_eq!(json["robots"], "index,follow");

    seo_cmd(dir.path())
        .args(["config", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    let json = json_output(seo_cmd(dir.path()).args(["resolve", "/search", "--format", "json"]));
    assert_eq!(json["robots"], "noindex,follow");
    Ok(())
}

#[test]
fn config_rejects_unknown_names() -> Result<()> {
    let dir = tempdir()?;
    seo_cmd(dir.path())
        .args(["config", "toggle", "nonsense", "on"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown robots.txt group"));

    seo_cmd(dir.path())
        .args(["config", "demo", "nonsense", "on"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown demo switch"));
    Ok(())
}

#[test]
fn corrupt_settings_fall_back_for_engine_commands() -> Result<()> {
    let dir = tempdir()?;
    std::fs::write(dir.path().join("settings.toml"), "demos = [[[")?;

    let json = json_output(seo_cmd(dir.path()).args(["resolve", "/catalog/t-shirts/", "--format", "json"]));
    assert_eq!(json["robots"], "index,follow");

    seo_cmd(dir.path())
        .args(["config", "show", "--format", "text"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"));
    Ok(())
}

#[test]
fn config_path_prints_location() -> Result<()> {
    let dir = tempdir()?;
    seo_cmd(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings.toml"));
    Ok(())
}
