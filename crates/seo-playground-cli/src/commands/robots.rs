//! robots.txt command

use anyhow::Result;
use seo_playground_core::{ParamConfig, render_robots_txt};
use serde::Serialize;

use crate::output::{OutputFormat, print_json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RobotsOutput {
    robots_txt: String,
}

/// Print robots.txt for `config`.
pub fn execute(config: &ParamConfig, base_url: &str, format: OutputFormat) -> Result<()> {
    let robots_txt = render_robots_txt(config, base_url);
    match format {
        OutputFormat::Json => print_json(&RobotsOutput { robots_txt }),
        OutputFormat::Text => {
            print!("{robots_txt}");
            Ok(())
        },
    }
}
