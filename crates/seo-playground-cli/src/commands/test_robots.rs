//! Test a URL against the robots.txt emitted for the current configuration

use anyhow::Result;
use colored::Colorize;
use seo_playground_core::{ParamConfig, RobotsTxt, RobotsVerdict, render_robots_txt};
use serde::Serialize;

use crate::commands::parse_target;
use crate::output::{OutputFormat, print_json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TestOutput {
    path: String,
    #[serde(flatten)]
    verdict: RobotsVerdict,
}

/// Test `url` against the emitted robots.txt.
pub fn execute(url: &str, config: &ParamConfig, base_url: &str, format: OutputFormat) -> Result<()> {
    let (path, params) = parse_target(url)?;
    let path = if params.is_empty() {
        path
    } else {
        format!("{path}?{}", params.to_query_string())
    };

    let robots = RobotsTxt::parse(&render_robots_txt(config, base_url));
    let verdict = robots.test(&path);

    match format {
        OutputFormat::Json => print_json(&TestOutput { path, verdict }),
        OutputFormat::Text => {
            let status = if verdict.allowed {
                "Allowed".green().bold()
            } else {
                "Disallowed".red().bold()
            };
            println!("{status} {path}");
            match &verdict.matched {
                Some(rule) => println!("  matched: {rule}"),
                None => println!("  no rule matched"),
            }
            Ok(())
        },
    }
}
