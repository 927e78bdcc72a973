//! Output formats shared by every command.

use serde::Serialize;

/// Output format for command results.
///
/// ```bash
/// seo-playground resolve /catalog/t-shirts/?sort=new --format json | jq .canonical
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default on a terminal)
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `yes`/`no` for text output.
pub const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
