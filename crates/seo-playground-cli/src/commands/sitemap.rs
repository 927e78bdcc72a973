//! Sitemap command - list candidates or print sitemap XML

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use seo_playground_core::{
    DemoCatalog, ParamConfig, SitemapEntry, generate_sitemap_entries, render_sitemap_xml,
};

use crate::output::{OutputFormat, print_json};

/// Print sitemap entries, or the sitemap XML when `xml` is set.
pub fn execute(config: &ParamConfig, base_url: &str, xml: bool, format: OutputFormat) -> Result<()> {
    let entries = generate_sitemap_entries(config, base_url, &DemoCatalog);

    if xml {
        print!("{}", render_sitemap_xml(&entries, Local::now().date_naive()));
        return Ok(());
    }

    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            print_text(&entries);
            Ok(())
        },
    }
}

fn print_text(entries: &[SitemapEntry]) {
    let width = entries.iter().map(|e| e.path.len()).max().unwrap_or(0);
    for entry in entries {
        let marker = if entry.included {
            "+".green().bold()
        } else {
            "-".red().bold()
        };
        println!("{marker} {:<width$}  {}", entry.path, entry.reason.dimmed());
    }
    let included = entries.iter().filter(|e| e.included).count();
    println!("\n{included} of {} candidates included", entries.len());
}
