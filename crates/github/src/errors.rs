//! Errors raised while constructing the GitHub adapter.
//!
//! Request-time failures are reported as [`census::CensusError`] by the
//! [`census::CodeHost`] implementation instead.

use thiserror::Error;

/// Errors produced while building a [`crate::GithubClient`].
#[derive(Debug, Error)]
pub enum GithubError {
    /// The API base URL is not an absolute `http(s)` URL.
    #[error("Invalid GitHub API base URL '{url}': expected an http:// or https:// URL")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
    },

    /// The underlying HTTP client could not be initialised (TLS backend, etc.).
    #[error("Failed to build HTTP client")]
    ClientBuild(#[from] reqwest::Error),
}
