//! Command-line flags.
//!
//! Flag names keep their underscore spelling (`--github_url`,
//! `--output_csv`) so existing invocations continue to work.

use std::path::PathBuf;

use clap::Parser;
use github::DEFAULT_BASE_URL;

/// Get the count of unique developers who have committed in the past 90 days
/// in a GitHub organization.
#[derive(Clone, Parser)]
#[command(name = "contributor-census", version, about, long_about = None)]
pub struct Args {
    /// Personal access token for GitHub
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GitHub organization name
    #[arg(long)]
    pub org: String,

    /// Base URL for the GitHub API (for GitHub Enterprise)
    #[arg(long = "github_url", default_value = DEFAULT_BASE_URL)]
    pub github_url: String,

    /// Exclude repositories containing this string in their name (case-insensitive)
    #[arg(long, default_value = "")]
    pub exclude: String,

    /// Output CSV file name
    #[arg(long = "output_csv")]
    pub output_csv: PathBuf,

    /// Enable debug mode for more verbose output
    #[arg(long)]
    pub debug: bool,
}
