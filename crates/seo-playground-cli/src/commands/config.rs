//! Config command - inspect and persist configuration overrides

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use seo_playground_core::{ConfigOverrides, ConfigStore, DemoToggles, ParamConfig, RobotsToggleKind};
use serde::Serialize;

use crate::cli::{ConfigCommands, Switch};
use crate::error::CliError;
use crate::output::{OutputFormat, print_json, yes_no};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput<'a> {
    path: String,
    overrides: &'a ConfigOverrides,
    effective: &'a ParamConfig,
}

/// Run a `config` subcommand against `store`.
pub fn execute(command: &ConfigCommands, store: &ConfigStore) -> Result<()> {
    match command {
        ConfigCommands::Show { format } => show(store, format.resolve()),
        ConfigCommands::Path => {
            println!("{}", store.path().display());
            Ok(())
        },
        ConfigCommands::Reset => reset(store),
        ConfigCommands::Toggle { group, state } => toggle(store, group, *state),
        ConfigCommands::Demo { name, state } => demo(store, name, *state),
    }
}

fn load_overrides(store: &ConfigStore) -> Result<ConfigOverrides> {
    store
        .load_overrides()
        .with_context(|| format!("Failed to read {}", store.path().display()))
}

fn show(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let overrides = load_overrides(store)?;
    let effective = ParamConfig::default().merged(&overrides);

    match format {
        OutputFormat::Json => print_json(&ShowOutput {
            path: store.path().display().to_string(),
            overrides: &overrides,
            effective: &effective,
        }),
        OutputFormat::Text => {
            println!("{} {}", "Settings:".bold(), store.path().display());
            if overrides.is_empty() {
                println!("  (no overrides, using defaults)");
            }

            println!("\n{}", "Robots.txt groups:".bold());
            for (kind, toggle) in effective.robots_toggles.iter() {
                let state = if toggle.enabled { "on ".green() } else { "off".dimmed() };
                println!("  {state}  {:<16} {}", kind.key(), toggle.label);
            }

            println!("\n{}", "Demos:".bold());
            println!("  noindexSearch            {}", yes_no(effective.demos.noindex_search));
            println!(
                "  blockPaginationInRobots  {}",
                yes_no(effective.demos.block_pagination_in_robots)
            );

            let pagination = &effective.pagination;
            println!("\n{}", "Pagination:".bold());
            println!("  param             {}", pagination.param);
            println!("  pageOneIndexable  {}", yes_no(pagination.page_one_indexable));
            println!("  pageTwoPlus       {}", pagination.page_two_plus);
            println!("  canonicalStrategy {}", pagination.canonical_strategy);

            println!("\n{}", "Parameter rules:".bold());
            for rule in effective.rules.iter() {
                println!("  {:<14} {:<9} {}", rule.name, rule.policy.as_str(), rule.description);
            }
            Ok(())
        },
    }
}

fn reset(store: &ConfigStore) -> Result<()> {
    if store.reset()? {
        println!("Removed {}", store.path().display());
    } else {
        println!("No settings file at {}", store.path().display());
    }
    Ok(())
}

fn toggle(store: &ConfigStore, group: &str, state: Switch) -> Result<()> {
    let kind = RobotsToggleKind::from_key(group).ok_or_else(|| {
        let known: Vec<&str> = RobotsToggleKind::ALL.iter().map(|k| k.key()).collect();
        CliError::usage(anyhow!(
            "unknown robots.txt group '{group}' (expected one of: {})",
            known.join(", ")
        ))
    })?;

    let mut overrides = load_overrides(store)?;
    overrides.set_toggle_enabled(kind, state.enabled());
    store.save(&overrides)?;
    println!("{kind} {}", if state.enabled() { "enabled" } else { "disabled" });
    Ok(())
}

fn demo(store: &ConfigStore, name: &str, state: Switch) -> Result<()> {
    let mut overrides = load_overrides(store)?;
    overrides
        .set_demo(name, state.enabled())
        .map_err(CliError::from)?;
    store.save(&overrides)?;

    let key = DemoToggles::KEYS
        .iter()
        .find(|key| key.eq_ignore_ascii_case(&name.replace(['-', '_'], "")))
        .copied()
        .unwrap_or(name);
    println!("{key} {}", if state.enabled() { "enabled" } else { "disabled" });
    Ok(())
}
