//! Repository listing with the name exclusion filter.

use tracing::{debug, instrument};

use crate::{CodeHost, OrganizationName, PageCursor, PageSize, Partial, RepositoryName};

/// Case-insensitive substring filter on repository names.
///
/// An empty pattern excludes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilter {
    needle: String,
}

impl ExclusionFilter {
    /// Creates a filter that excludes names containing `pattern`, ignoring case.
    pub fn new(pattern: impl AsRef<str>) -> Self {
        Self {
            needle: pattern.as_ref().to_lowercase(),
        }
    }

    /// Returns `true` if `name` should be skipped.
    pub fn excludes(&self, name: &RepositoryName) -> bool {
        !self.needle.is_empty() && name.as_str().to_lowercase().contains(&self.needle)
    }
}

/// Lists every repository of `org` that survives `filter`, in API order.
///
/// Pages are requested until one comes back empty. A failed request ends the
/// loop early: the error is returned as a [`Partial`] carrying the names kept
/// so far, and the caller decides whether the partial list is usable.
#[instrument(skip(host, filter), fields(exclude = %filter.needle))]
pub async fn list_repositories(
    host: &dyn CodeHost,
    org: &OrganizationName,
    filter: &ExclusionFilter,
    size: PageSize,
) -> Result<Vec<RepositoryName>, Partial<RepositoryName>> {
    let mut kept = Vec::new();
    let mut cursor = PageCursor::new();

    while let Some(page) = cursor.next_page() {
        let repositories = match host.repositories_page(org, page, size).await {
            Ok(repositories) => repositories,
            Err(source) => {
                return Err(Partial {
                    collected: kept,
                    source,
                })
            }
        };
        cursor.record(repositories.len());
        debug!(page = %page, count = repositories.len(), "Fetched repositories page");

        for repository in repositories {
            debug!(repository = %repository.name, "Repository listed");
            if filter.excludes(&repository.name) {
                continue;
            }
            kept.push(repository.name);
        }
    }

    debug!(
        fetched = cursor.fetched(),
        kept = kept.len(),
        "Repository listing complete"
    );
    Ok(kept)
}
