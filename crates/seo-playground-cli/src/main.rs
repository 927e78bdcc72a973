//! seo-playground CLI - canonical, robots and sitemap decisions from the terminal
//!
//! This is the main entry point for the `seo-playground` command-line
//! interface. Command implementations live in [`commands`].

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use cli::{Cli, Commands};
use utils::logging::initialize_logging;
use utils::settings;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(error::exit_code_from_error(&err))
        },
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let base_url = cli.base_url.as_str();

    match &cli.command {
        Commands::Resolve { url, format } => {
            let config = settings::effective_config(cli);
            commands::resolve::execute(url, &config, base_url, format.resolve())
        },
        Commands::Check { url, format } => {
            let config = settings::effective_config(cli);
            commands::check::execute(url, &config, format.resolve())
        },
        Commands::Sitemap { xml, format } => {
            let config = settings::effective_config(cli);
            commands::sitemap::execute(&config, base_url, *xml, format.resolve())
        },
        Commands::Robots { format } => {
            let config = settings::effective_config(cli);
            commands::robots::execute(&config, base_url, format.resolve())
        },
        Commands::TestRobots { url, format } => {
            let config = settings::effective_config(cli);
            commands::test_robots::execute(url, &config, base_url, format.resolve())
        },
        Commands::Config { command } => {
            let store = settings::store(cli)?;
            commands::config::execute(command, &store)
        },
    }
}
