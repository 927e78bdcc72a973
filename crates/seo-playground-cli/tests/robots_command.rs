#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{json_output, seo_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn robots_prints_enabled_groups() -> Result<()> {
    let dir = tempdir()?;
    seo_cmd(dir.path())
        .args(["robots", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("User-agent: *\n"))
        .stdout(predicate::str::contains("# Protected paths"))
        .stdout(predicate::str::contains("Disallow: /*?*gclid="))
        .stdout(predicate::str::contains("Disallow: /*?*sort=").not())
        .stdout(predicate::str::contains("Sitemap: https://example.com/api/sitemap"));
    Ok(())
}

#[test]
fn robots_json_wraps_text() -> Result<()> {
    let dir = tempdir()?;
    let json = json_output(seo_cmd(dir.path()).args(["robots", "--format", "json"]));
    let text = json["robotsTxt"].as_str().unwrap_or_default();
    assert!(text.starts_with("User-agent: *"));
    Ok(())
}

#[test]
fn test_robots_reports_deciding_rule() -> Result<()> {
    let dir = tempdir()?;
    let json = json_output(seo_cmd(dir.path()).args([
        "test-robots",
        "https://example.com/catalog/t-shirts/?utm_source=fb",
        "--format",
        "json",
    ]));
    assert_eq!(json["allowed"], false);
    assert_eq!(json["matched"], "Disallow: /*?*utm_source=");
    assert_eq!(json["path"], "/catalog/t-shirts/?utm_source=fb");

    seo_cmd(dir.path())
        .args(["test-robots", "/api/sitemap", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allowed /api/sitemap"))
        .stdout(predicate::str::contains("matched: Allow: /api/sitemap"));
    Ok(())
}
