//! Port traits implemented by infrastructure crates.
//!
//! The census logic depends only on these traits. The `github` crate supplies
//! the production [`CodeHost`]; tests supply in-memory fakes.

use async_trait::async_trait;

use crate::{
    CensusError, DeveloperLogin, OrganizationName, PageNumber, PageSize, RepositoryName,
    Timestamp,
};

// ---------------------------------------------------------------------------
// Listing records
// ---------------------------------------------------------------------------

/// One entry of an organization's repository listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Short repository name.
    pub name: RepositoryName,
}

/// One entry of a repository's commit listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Login of the GitHub account the commit is attributed to.
    ///
    /// `None` when the author email is not linked to an account or the account
    /// was deleted.
    pub author: Option<DeveloperLogin>,
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Read access to a code host's organization and commit listings.
///
/// Each method fetches exactly one page. An empty `Vec` marks the end of the
/// listing. Implementations issue a single request per call and never retry.
#[async_trait]
pub trait CodeHost: Send + Sync {
    /// Fetches one page of the repositories owned by `org`.
    async fn repositories_page(
        &self,
        org: &OrganizationName,
        page: PageNumber,
        size: PageSize,
    ) -> Result<Vec<RepositorySummary>, CensusError>;

    /// Fetches one page of the commits in `org/repo` authored at or after
    /// `since`.
    async fn commits_page(
        &self,
        org: &OrganizationName,
        repo: &RepositoryName,
        since: Timestamp,
        page: PageNumber,
        size: PageSize,
    ) -> Result<Vec<CommitSummary>, CensusError>;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

/// [`Clock`] backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
