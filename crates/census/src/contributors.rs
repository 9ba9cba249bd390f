//! Per-repository contributor collection.

use indexmap::IndexSet;
use tracing::{debug, instrument};

use crate::{
    CensusError, Clock, CodeHost, DeveloperLogin, LookbackWindow, OrganizationName, PageCursor,
    PageSize, RepositoryName,
};

/// The distinct logins that authored at least one commit in one repository
/// inside the lookback window.
///
/// Logins keep the order in which they first appeared in the commit listing,
/// which makes the report's row order reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorSet {
    logins: IndexSet<DeveloperLogin>,
}

impl ContributorSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `login`, returning `true` if it was not already present.
    pub fn insert(&mut self, login: DeveloperLogin) -> bool {
        self.logins.insert(login)
    }

    /// Returns `true` if `login` is in the set.
    pub fn contains(&self, login: &DeveloperLogin) -> bool {
        self.logins.contains(login)
    }

    /// Returns the number of distinct logins.
    pub fn len(&self) -> usize {
        self.logins.len()
    }

    /// Returns `true` if no commit in the window had an author.
    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    /// Iterates the logins in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = &DeveloperLogin> {
        self.logins.iter()
    }
}

impl FromIterator<DeveloperLogin> for ContributorSet {
    fn from_iter<I: IntoIterator<Item = DeveloperLogin>>(iter: I) -> Self {
        Self {
            logins: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ContributorSet {
    type Item = &'a DeveloperLogin;
    type IntoIter = indexmap::set::Iter<'a, DeveloperLogin>;

    fn into_iter(self) -> Self::IntoIter {
        self.logins.iter()
    }
}

/// Collects the authors of every commit in `org/repo` inside `window`.
///
/// The window's cutoff is computed from `clock` when this function is called,
/// so every repository of a scan gets its own cutoff and later repositories
/// see a slightly later one. Commits without a linked author are skipped.
/// Any failed request aborts the collection.
#[instrument(skip(host, clock))]
pub async fn collect_contributors(
    host: &dyn CodeHost,
    clock: &dyn Clock,
    org: &OrganizationName,
    repo: &RepositoryName,
    window: LookbackWindow,
    size: PageSize,
) -> Result<ContributorSet, CensusError> {
    let since = window.cutoff_from(clock.now());
    let mut contributors = ContributorSet::new();
    let mut cursor = PageCursor::new();

    while let Some(page) = cursor.next_page() {
        let commits = host.commits_page(org, repo, since, page, size).await?;
        cursor.record(commits.len());

        for author in commits.into_iter().filter_map(|commit| commit.author) {
            debug!(contributor = %author, repository = %repo, "Added contributor");
            contributors.insert(author);
        }
        debug!(page = %page, repository = %repo, "Processed commits page");
    }

    Ok(contributors)
}
