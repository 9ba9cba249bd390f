//! Contributor census CLI entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse configuration**: read the flags (the token may also come from
//!    `GITHUB_TOKEN`).
//! 2. **Wire observability**: configure `tracing-subscriber` on stdout and,
//!    when an OTLP endpoint is configured, an OpenTelemetry exporter. All
//!    `tracing` spans and events emitted by every crate in the workspace flow
//!    through this subscriber.
//! 3. **Construct infrastructure**: create the [`github::GithubClient`] and
//!    hand it to [`census::scan`] together with the system clock.
//! 4. **Report**: write the CSV via [`report`], then print the summary line.
//!
//! Any failure ends the process with a non-zero exit status and the error
//! chain on stderr.

mod args;
mod observability;
mod run;

use clap::Parser;

use crate::args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let telemetry = observability::init(args.debug)?;

    let result = run::run(&args, &census::SystemClock, &mut std::io::stdout()).await;

    telemetry.shutdown();
    result.map(|_| ())
}
