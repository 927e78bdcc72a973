//! Canonical resolution command - show the decision for one URL

use anyhow::Result;
use colored::Colorize;
use seo_playground_core::{CanonicalResult, ParamConfig, RobotsDirective, compute_canonical};
use serde::Serialize;

use crate::commands::parse_target;
use crate::output::{OutputFormat, print_json, yes_no};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveOutput<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: CanonicalResult,
}

/// Resolve `url` and print the result.
pub fn execute(url: &str, config: &ParamConfig, base_url: &str, format: OutputFormat) -> Result<()> {
    let (path, params) = parse_target(url)?;
    let result = compute_canonical(&path, &params, config, base_url);

    match format {
        OutputFormat::Json => print_json(&ResolveOutput { input: url, result }),
        OutputFormat::Text => {
            print_text(&result);
            Ok(())
        },
    }
}

fn colored_robots(robots: RobotsDirective) -> colored::ColoredString {
    match robots {
        RobotsDirective::IndexFollow => robots.as_str().green(),
        RobotsDirective::NoindexFollow => robots.as_str().yellow(),
        RobotsDirective::NoindexNofollow => robots.as_str().red(),
    }
}

fn print_text(result: &CanonicalResult) {
    println!("{} {}", "Canonical:".bold(), result.canonical);
    println!("{} {}", "Robots:".bold(), colored_robots(result.robots));
    let blocked = yes_no(result.block_in_robots);
    println!(
        "{} {}",
        "Blocked in robots.txt:".bold(),
        if result.block_in_robots { blocked.red() } else { blocked.normal() }
    );

    if !result.robots_matched_rules.is_empty() {
        println!("\n{}", "Matched robots.txt rules:".bold());
        for rule in &result.robots_matched_rules {
            println!("  - {rule}");
        }
    }
    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            println!("  ! {warning}");
        }
    }

    println!("\n{}", "Trace:".bold());
    for (index, line) in result.trace.iter().enumerate() {
        println!("  {:>2}. {line}", index + 1);
    }
}
