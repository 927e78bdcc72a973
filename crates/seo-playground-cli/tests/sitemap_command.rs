#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{json_output, seo_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn sitemap_json_lists_every_candidate() -> Result<()> {
    let dir = tempdir()?;
    let json = json_output(seo_cmd(dir.path()).args(["sitemap", "--format", "json"]));
    let entries = json.as_array().cloned().unwrap_or_default();

    let home = entries.iter().find(|e| e["path"] == "/");
    assert_eq!(home.map(|e| e["included"].clone()), Some(true.into()));

    let facet = entries.iter().find(|e| e["path"] == "/shop/t-shirts/?colors=black");
    assert_eq!(
        facet.map(|e| e["reason"].clone()),
        Some("Excluded: robots=noindex,follow".into())
    );
    Ok(())
}

#[test]
fn sitemap_xml_lists_included_urls() -> Result<()> {
    let dir = tempdir()?;
    seo_cmd(dir.path())
        .args(["sitemap", "--xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
        ))
        .stdout(predicate::str::contains("<loc>https://example.com/</loc>"))
        .stdout(predicate::str::contains("colors=").not());
    Ok(())
}
