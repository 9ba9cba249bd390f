//! Census orchestration: list repositories, collect each one's contributors,
//! and fold them into [`RepositoryCounts`].

use tracing::{error, info, info_span, Instrument};

use crate::{
    collect_contributors, list_repositories, CensusError, Clock, CodeHost, ExclusionFilter,
    LookbackWindow, OrganizationName, PageSize, RepositoryCounts, RepositoryName, ScanRunId,
};

/// Parameters of one census run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Identifier attached to the run's tracing span.
    pub run_id: ScanRunId,
    /// Organization whose repositories are scanned.
    pub organization: OrganizationName,
    /// Repositories whose name matches this filter are skipped.
    pub exclude: ExclusionFilter,
    /// How far back a commit may be and still count.
    pub window: LookbackWindow,
    /// `per_page` for every listing request.
    pub page_size: PageSize,
}

impl ScanRequest {
    /// Creates a request with the default 90-day window and 100-item pages.
    pub fn new(organization: OrganizationName, exclude: ExclusionFilter) -> Self {
        Self {
            run_id: ScanRunId::new_random(),
            organization,
            exclude,
            window: LookbackWindow::DEFAULT,
            page_size: PageSize::DEFAULT,
        }
    }
}

/// Result of a completed census run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// The organization that was scanned.
    pub organization: OrganizationName,
    /// Repositories whose commits were collected, in scan order.
    pub repositories: Vec<RepositoryName>,
    /// Per-developer repository counts.
    pub counts: RepositoryCounts,
}

impl ScanReport {
    /// Number of distinct developers found.
    pub fn unique_developers(&self) -> usize {
        self.counts.len()
    }
}

/// Runs a census over `request.organization`.
///
/// A failure while listing repositories is logged and the repositories listed
/// before it are still scanned. A failure while listing any repository's
/// commits aborts the run.
pub async fn scan(
    host: &dyn CodeHost,
    clock: &dyn Clock,
    request: &ScanRequest,
) -> Result<ScanReport, CensusError> {
    let span = info_span!(
        "scan",
        run_id = %request.run_id,
        organization = %request.organization,
    );

    async move {
        let repositories = match list_repositories(
            host,
            &request.organization,
            &request.exclude,
            request.page_size,
        )
        .await
        {
            Ok(repositories) => repositories,
            Err(partial) => {
                error!(
                    error = %partial.source,
                    kept = partial.collected.len(),
                    "Error fetching repositories; continuing with the repositories listed so far"
                );
                partial.collected
            }
        };
        info!(repositories = repositories.len(), "Scanning repositories");

        let mut counts = RepositoryCounts::new();
        for repo in &repositories {
            let contributors = collect_contributors(
                host,
                clock,
                &request.organization,
                repo,
                request.window,
                request.page_size,
            )
            .await?;
            counts.accumulate(&contributors, repo);
        }

        info!(developers = counts.len(), "Scan complete");
        Ok(ScanReport {
            organization: request.organization.clone(),
            repositories,
            counts,
        })
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::{commits, login, names, org, repo, FakeHost, SteppingClock};
    use crate::Timestamp;

    fn request(exclude: &str) -> ScanRequest {
        ScanRequest::new(org("acme"), ExclusionFilter::new(exclude))
    }

    fn start() -> Timestamp {
        Timestamp::from_utc(Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn excluded_repositories_are_not_scanned() {
        let host = FakeHost::new()
            .with_repository_pages(vec![names(&["api", "api-legacy", "web"])])
            .with_commit_pages("api", vec![commits(&[Some("alice"), Some("bob")])])
            .with_commit_pages("web", vec![commits(&[Some("alice")])]);
        let clock = SteppingClock::fixed(start());

        let report = scan(&host, &clock, &request("legacy")).await.unwrap();

        assert_eq!(report.repositories, vec![repo("api"), repo("web")]);
        assert_eq!(report.counts.get(&login("alice")), Some(2));
        assert_eq!(report.counts.get(&login("bob")), Some(1));
        assert_eq!(report.unique_developers(), 2);
        assert!(host.commit_pages_requested("api-legacy").is_empty());
    }

    #[tokio::test]
    async fn empty_organization_reports_no_developers() {
        let host = FakeHost::new();
        let clock = SteppingClock::fixed(start());

        let report = scan(&host, &clock, &request("")).await.unwrap();

        assert!(report.repositories.is_empty());
        assert_eq!(report.unique_developers(), 0);
    }

    #[tokio::test]
    async fn repository_listing_failure_keeps_partial_list() {
        let host = FakeHost::new()
            .with_repository_pages(vec![names(&["api"])])
            .failing_repositories_on_page(2)
            .with_commit_pages("api", vec![commits(&[Some("alice")])]);
        let clock = SteppingClock::fixed(start());

        let report = scan(&host, &clock, &request("")).await.unwrap();

        assert_eq!(report.repositories, vec![repo("api")]);
        assert_eq!(report.counts.get(&login("alice")), Some(1));
    }

    #[tokio::test]
    async fn commit_listing_failure_aborts_the_scan() {
        let host = FakeHost::new()
            .with_repository_pages(vec![names(&["one", "two", "three"])])
            .with_commit_pages("one", vec![commits(&[Some("alice")])])
            .failing_commits_for("two")
            .with_commit_pages("three", vec![commits(&[Some("bob")])]);
        let clock = SteppingClock::fixed(start());

        let err = scan(&host, &clock, &request("")).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert!(host.commit_pages_requested("three").is_empty());
    }

    #[tokio::test]
    async fn cutoff_is_recomputed_for_each_repository() {
        let host = FakeHost::new().with_repository_pages(vec![names(&["api", "web"])]);
        let clock = SteppingClock::new(start(), TimeDelta::minutes(5));

        scan(&host, &clock, &request("")).await.unwrap();

        assert_eq!(
            host.commit_since_values("api"),
            vec!["2024-04-01T12:00:00Z".to_string()]
        );
        assert_eq!(
            host.commit_since_values("web"),
            vec!["2024-04-01T12:05:00Z".to_string()]
        );
    }
}
