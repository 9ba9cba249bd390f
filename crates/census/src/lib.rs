//! Core domain for the contributor census.
//!
//! This crate contains every domain concept, newtype identifier, value type and
//! error type used to count the developers active in a GitHub organization, plus
//! the logic that walks the listings and aggregates the result. Infrastructure
//! crates implement the traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`OrganizationName`, `RepositoryName`, `DeveloperLogin`, `ScanRunId`) |
//! | [`types`] | Value types (`PageNumber`, `PageSize`, `Timestamp`, `LookbackWindow`) |
//! | [`errors`] | `CensusError` and the `Partial` pagination outcome |
//! | [`ports`] | `CodeHost` and `Clock` traits with their listing records |
//! | [`pagination`] | `PageCursor` for "fetch until empty" loops |
//! | [`repositories`] | Repository listing and the exclusion filter |
//! | [`contributors`] | Per-repository contributor collection |
//! | [`aggregate`] | Developer → repository-count map |
//! | [`scan`] | The end-to-end census run |

pub mod aggregate;
pub mod contributors;
pub mod errors;
pub mod identifiers;
pub mod pagination;
pub mod ports;
pub mod repositories;
pub mod scan;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use aggregate::RepositoryCounts;
pub use contributors::{collect_contributors, ContributorSet};
pub use errors::{CensusError, Partial};
pub use identifiers::{DeveloperLogin, OrganizationName, RepositoryName, ScanRunId};
pub use pagination::PageCursor;
pub use ports::{Clock, CodeHost, CommitSummary, RepositorySummary, SystemClock};
pub use repositories::{list_repositories, ExclusionFilter};
pub use scan::{scan, ScanReport, ScanRequest};
pub use types::{LookbackWindow, PageNumber, PageSize, Timestamp};
