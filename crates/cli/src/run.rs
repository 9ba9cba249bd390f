//! Run sequencing: flags → client → scan → CSV → summary.

use std::io::Write;

use anyhow::{anyhow, Context};
use census::{Clock, ExclusionFilter, OrganizationName, ScanReport, ScanRequest};
use github::{ApiToken, GithubClient};
use tracing::info;

use crate::args::Args;

/// Executes one census and writes the report.
///
/// The summary line goes to `out` only after the CSV has been written. A failed
/// scan or a failed write prints nothing.
pub async fn run<W: Write>(
    args: &Args,
    clock: &dyn Clock,
    out: &mut W,
) -> anyhow::Result<ScanReport> {
    let organization = OrganizationName::new(args.org.as_str())
        .ok_or_else(|| anyhow!("--org must not be empty"))?;
    let token =
        ApiToken::new(args.token.as_str()).ok_or_else(|| anyhow!("--token must not be empty"))?;
    let client =
        GithubClient::new(&args.github_url, token).context("invalid GitHub configuration")?;

    let request = ScanRequest::new(organization, ExclusionFilter::new(&args.exclude));
    info!(
        run_id = %request.run_id,
        organization = %request.organization,
        base_url = client.base_url(),
        "Starting contributor census"
    );

    let report = census::scan(&client, clock, &request)
        .await
        .with_context(|| format!("failed to collect contributors for {}", request.organization))?;

    report::write_csv(&report.counts, &args.output_csv)?;

    writeln!(
        out,
        "Total unique developers in {} who have committed in the past {} days: {}",
        report.organization,
        request.window.days(),
        report.unique_developers()
    )?;
    Ok(report)
}
