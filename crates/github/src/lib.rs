//! GitHub infrastructure adapter for the contributor census.
//!
//! Implements the [`census::CodeHost`] trait over the GitHub REST API using
//! `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules.
//! URL construction, authentication headers, status handling and JSON decoding
//! live here; the [`census`] crate never sees them. Pagination is driven by the
//! caller one page at a time.
//!
//! ## Endpoints
//!
//! | Port method | Request |
//! |-------------|---------|
//! | `repositories_page` | `GET {base}/orgs/{org}/repos?page=N&per_page=M` |
//! | `commits_page` | `GET {base}/repos/{org}/{repo}/commits?since=<ISO8601>&page=N&per_page=M` |
//!
//! Both send `Authorization: token <token>`. Point the base URL at
//! `https://<host>/api/v3` to talk to GitHub Enterprise Server.

mod client;
mod errors;
mod wire;

pub use client::{ApiToken, GithubClient, DEFAULT_BASE_URL};
pub use errors::GithubError;
