//! Robots blocking command - report which toggle groups match a URL

use anyhow::Result;
use colored::Colorize;
use seo_playground_core::{BlockingCheck, ParamConfig, check_robots_blocking, normalize_path};

use crate::commands::parse_target;
use crate::output::{OutputFormat, print_json};

/// Check `url` against the enabled robots.txt groups.
pub fn execute(url: &str, config: &ParamConfig, format: OutputFormat) -> Result<()> {
    let (path, params) = parse_target(url)?;
    let check = check_robots_blocking(&normalize_path(&path), &params, config);

    match format {
        OutputFormat::Json => print_json(&check),
        OutputFormat::Text => {
            print_text(&check);
            Ok(())
        },
    }
}

fn print_text(check: &BlockingCheck) {
    if check.is_blocked {
        println!("{}", "Blocked".red().bold());
        for rule in &check.matched_rules {
            println!("  - {rule}");
        }
    } else {
        println!("{}", "Not blocked".green().bold());
    }
    for warning in &check.warnings {
        println!("  ! {}", warning.yellow());
    }
}
