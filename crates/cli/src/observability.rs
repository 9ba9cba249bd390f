//! Tracing subscriber wiring.
//!
//! Events go to stdout, as plain text by default or as JSON when
//! `LOG_FORMAT=json`. Without `--debug` only warnings and errors are shown, so
//! stdout carries nothing but the summary line on a clean run. `RUST_LOG`
//! overrides the level chosen by `--debug`.
//! Setting `OTEL_EXPORTER_OTLP_ENDPOINT` additionally exports spans over OTLP.

use std::io::IsTerminal;

use anyhow::Context;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Crates raised to `debug` by `--debug`; everything else stays at `warn`.
const WORKSPACE_TARGETS: [&str; 4] = ["census", "github", "report", "contributor_census"];

/// Keeps the OTLP pipeline alive until the run finishes.
#[must_use]
pub struct Telemetry {
    provider: Option<TracerProvider>,
}

impl Telemetry {
    /// Flushes buffered spans. Export failures are reported on stderr only.
    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(err) = provider.shutdown() {
                eprintln!("Failed to flush OpenTelemetry spans: {err}");
            }
        }
    }
}

/// Default `EnvFilter` directives for the given verbosity.
fn default_directives(debug: bool) -> String {
    if !debug {
        return String::from("warn");
    }
    WORKSPACE_TARGETS
        .iter()
        .fold(String::from("warn"), |mut directives, target| {
            directives.push_str(&format!(",{target}=debug"));
            directives
        })
}

/// Installs the global subscriber.
///
/// Must be called from within the tokio runtime when OTLP export is enabled.
pub fn init(debug: bool) -> anyhow::Result<Telemetry> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(debug)))
        .context("invalid log filter")?;

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stdout)
    });
    let text_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(std::io::stdout().is_terminal())
            .with_writer(std::io::stdout)
    });

    let provider = if std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some() {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .build()
            .context("failed to build OTLP span exporter")?;
        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
            .build();
        opentelemetry::global::set_tracer_provider(provider.clone());
        Some(provider)
    } else {
        None
    };
    let otel_layer = provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer("contributor-census"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(otel_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(Telemetry { provider })
}
