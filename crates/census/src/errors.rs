//! Error types for the census domain.
//!
//! [`CensusError`] covers every condition that stops a listing request. The
//! infrastructure adapters translate their own failures into it at the port
//! boundary, so the scan logic never sees `reqwest` or `serde_json` errors.
//!
//! [`Partial`] is the outcome of a pagination loop that failed after having
//! already gathered some items. The scan decides per listing whether that is
//! fatal.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Request errors
// ---------------------------------------------------------------------------

/// Errors produced while talking to the code host.
///
/// No variant is retried; transient and permanent failures are treated the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CensusError {
    /// The request could not be sent, or the response status was not 2xx.
    ///
    /// `status` is `None` when no response was received at all (DNS, TLS,
    /// connection reset).
    #[error("HTTP request to {url} failed{}: {message}", status_suffix(.status))]
    Http {
        /// The URL that was requested.
        url: String,
        /// The response status code, when a response was received.
        status: Option<u16>,
        /// Transport or response-body description.
        message: String,
    },

    /// The response body was not the JSON shape expected for the listing.
    #[error("Unexpected response body from {url}: {message}")]
    Decode {
        /// The URL that was requested.
        url: String,
        /// Description of the mismatch.
        message: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" with status {code}"))
        .unwrap_or_default()
}

impl CensusError {
    /// Returns the HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => *status,
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Partial pagination outcomes
// ---------------------------------------------------------------------------

/// A pagination loop that stopped on a failed request.
///
/// `collected` holds every item gathered before the failure, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial<T> {
    /// Items gathered before the failing request.
    pub collected: Vec<T>,
    /// The request failure that ended the loop.
    pub source: CensusError,
}

impl<T> std::fmt::Display for Partial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "listing interrupted after {} item(s): {}",
            self.collected.len(),
            self.source
        )
    }
}

impl<T: std::fmt::Debug> std::error::Error for Partial<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
