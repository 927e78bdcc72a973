//! # CLI Structure and Argument Parsing
//!
//! The `seo-playground` command runs the canonical/robots/sitemap engine from
//! the terminal. Every command reads the effective configuration first: from
//! a `Cookie` header when `--cookie` is given, otherwise from the settings
//! file.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Resolve one URL and show the decision trace
//! seo-playground resolve "/catalog/t-shirts/?sort=price_desc&color=black"
//!
//! # Emit robots.txt and the sitemap
//! seo-playground robots > robots.txt
//! seo-playground sitemap --xml > sitemap.xml
//!
//! # Persist a toggle
//! seo-playground config toggle sort-blocking on
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use seo_playground_core::DEFAULT_BASE_URL;

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `seo-playground` command.
#[derive(Parser, Clone, Debug)]
#[command(name = "seo-playground")]
#[command(version)]
#[command(about = "Canonical URL, robots and sitemap decisions for the SEO playground", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Settings file holding persisted overrides
    #[arg(long, global = true, env = "SEO_PLAYGROUND_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Site origin used for canonical, sitemap and robots.txt URLs
    #[arg(
        long,
        global = true,
        env = "SEO_PLAYGROUND_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        value_name = "URL"
    )]
    pub base_url: String,

    /// Read overrides from a `Cookie` header instead of the settings file
    #[arg(long, global = true, value_name = "HEADER")]
    pub cookie: Option<String>,
}

/// Available commands.
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Resolve the canonical URL and robots directive of a URL
    Resolve {
        /// Absolute URL or path with optional query
        url: String,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Check a URL against the enabled robots.txt groups
    Check {
        /// Absolute URL or path with optional query
        url: String,
        #[command(flatten)]
        format: FormatArg,
    },

    /// List sitemap candidates and whether each is included
    Sitemap {
        /// Print sitemap XML of the included entries
        #[arg(long)]
        xml: bool,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Print robots.txt
    Robots {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Test a URL against the emitted robots.txt
    #[command(name = "test-robots")]
    TestRobots {
        /// Absolute URL or path with optional query
        url: String,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Inspect and change persisted overrides
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Clone, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration and stored overrides
    Show {
        #[command(flatten)]
        format: FormatArg,
    },
    /// Print the settings file path
    Path,
    /// Delete the settings file
    Reset,
    /// Enable or disable a robots.txt group
    Toggle {
        /// Group key, e.g. `sortBlocking` or `sort-blocking`
        group: String,
        /// New state
        state: Switch,
    },
    /// Enable or disable a demo switch
    Demo {
        /// Switch key, e.g. `noindexSearch` or `block-pagination-in-robots`
        name: String,
        /// New state
        state: Switch,
    },
}

/// On/off argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    /// Enable
    On,
    /// Disable
    Off,
}

impl Switch {
    /// Whether the switch turns something on.
    pub const fn enabled(self) -> bool {
        matches!(self, Self::On)
    }
}

impl Commands {
    /// Output format flag of the command, if it has one.
    pub const fn format_arg(&self) -> Option<&FormatArg> {
        match self {
            Self::Resolve { format, .. }
            | Self::Check { format, .. }
            | Self::Sitemap { format, .. }
            | Self::Robots { format }
            | Self::TestRobots { format, .. }
            | Self::Config {
                command: ConfigCommands::Show { format },
            } => Some(format),
            Self::Config { .. } => None,
        }
    }
}
