//! Developer → repository-count aggregation.

use indexmap::IndexMap;
use tracing::debug;

use crate::{ContributorSet, DeveloperLogin, RepositoryName};

/// Number of distinct repositories each developer contributed to.
///
/// Entries iterate in the order developers were first seen. Counts only ever
/// grow; there is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryCounts {
    counts: IndexMap<DeveloperLogin, u32>,
}

impl RepositoryCounts {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one repository's contributors.
    ///
    /// Each login in `contributors` gains exactly 1, however many commits it
    /// authored in `repo`. Accumulating the same repository twice counts it
    /// twice; callers pass each repository once.
    pub fn accumulate(&mut self, contributors: &ContributorSet, repo: &RepositoryName) {
        for login in contributors {
            debug!(contributor = %login, repository = %repo, "Updating count for contributor");
            *self.counts.entry(login.clone()).or_insert(0) += 1;
        }
    }

    /// Returns the count for `login`, or `None` if it was never seen.
    pub fn get(&self, login: &DeveloperLogin) -> Option<u32> {
        self.counts.get(login).copied()
    }

    /// Number of distinct developers seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no developer has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(login, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&DeveloperLogin, u32)> {
        self.counts.iter().map(|(login, count)| (login, *count))
    }
}
