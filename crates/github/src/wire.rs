//! JSON shapes of the GitHub REST responses the census reads.
//!
//! Only the fields the census needs are declared; everything else in the
//! payload is ignored.

use census::{CensusError, CommitSummary, DeveloperLogin, RepositoryName, RepositorySummary};
use serde::Deserialize;

/// An element of `GET /orgs/{org}/repos`.
#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryPayload {
    pub name: String,
}

/// An element of `GET /repos/{owner}/{repo}/commits`.
///
/// `author` is the linked GitHub account and is `null` when the commit email
/// does not belong to any account.
#[derive(Debug, Deserialize)]
pub(crate) struct CommitPayload {
    #[serde(default)]
    pub author: Option<AuthorPayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthorPayload {
    #[serde(default)]
    pub login: Option<String>,
}

impl RepositoryPayload {
    /// Converts to the domain record. An empty name is a malformed listing
    /// from `url`.
    pub fn into_summary(self, url: &str) -> Result<RepositorySummary, CensusError> {
        RepositoryName::new(self.name)
            .map(|name| RepositorySummary { name })
            .ok_or_else(|| CensusError::Decode {
                url: url.to_string(),
                message: "repository entry has an empty name".to_string(),
            })
    }
}

impl From<CommitPayload> for CommitSummary {
    fn from(payload: CommitPayload) -> Self {
        CommitSummary {
            author: payload
                .author
                .and_then(|author| author.login)
                .and_then(DeveloperLogin::new),
        }
    }
}
