//! In-memory fakes of the census ports, for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::TimeDelta;

use crate::{
    CensusError, Clock, CodeHost, CommitSummary, DeveloperLogin, OrganizationName, PageNumber,
    PageSize, RepositoryName, RepositorySummary, Timestamp,
};

pub fn org(name: &str) -> OrganizationName {
    OrganizationName::new(name).unwrap()
}

pub fn repo(name: &str) -> RepositoryName {
    RepositoryName::new(name).unwrap()
}

pub fn login(name: &str) -> DeveloperLogin {
    DeveloperLogin::new(name).unwrap()
}

pub fn names(repos: &[&str]) -> Vec<RepositorySummary> {
    repos
        .iter()
        .map(|name| RepositorySummary { name: repo(name) })
        .collect()
}

pub fn commits(authors: &[Option<&str>]) -> Vec<CommitSummary> {
    authors
        .iter()
        .map(|author| CommitSummary {
            author: author.map(login),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Repositories { page: u32 },
    Commits { repo: String, since: String, page: u32 },
}

/// Serves canned pages; any page past the configured ones is empty.
#[derive(Default)]
pub struct FakeHost {
    repository_pages: Vec<Vec<RepositorySummary>>,
    failing_repository_page: Option<u32>,
    commit_pages: HashMap<String, Vec<Vec<CommitSummary>>>,
    failing_commit_repos: HashSet<String>,
    requests: Mutex<Vec<Request>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository_pages(mut self, pages: Vec<Vec<RepositorySummary>>) -> Self {
        self.repository_pages = pages;
        self
    }

    pub fn failing_repositories_on_page(mut self, page: u32) -> Self {
        self.failing_repository_page = Some(page);
        self
    }

    pub fn with_commit_pages(mut self, repo: &str, pages: Vec<Vec<CommitSummary>>) -> Self {
        self.commit_pages.insert(repo.to_string(), pages);
        self
    }

    pub fn failing_commits_for(mut self, repo: &str) -> Self {
        self.failing_commit_repos.insert(repo.to_string());
        self
    }

    pub fn repository_pages_requested(&self) -> Vec<u32> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| match r {
                Request::Repositories { page } => Some(*page),
                Request::Commits { .. } => None,
            })
            .collect()
    }

    pub fn commit_pages_requested(&self, repo_name: &str) -> Vec<u32> {
        self.commit_requests(repo_name)
            .into_iter()
            .map(|(_, page)| page)
            .collect()
    }

    /// Distinct `since` values sent for `repo_name`, in request order.
    pub fn commit_since_values(&self, repo_name: &str) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for (since, _) in self.commit_requests(repo_name) {
            if !values.contains(&since) {
                values.push(since);
            }
        }
        values
    }

    fn commit_requests(&self, repo_name: &str) -> Vec<(String, u32)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| match r {
                Request::Commits { repo, since, page } if repo == repo_name => {
                    Some((since.clone(), *page))
                }
                _ => None,
            })
            .collect()
    }

    fn server_error(url: String) -> CensusError {
        CensusError::Http {
            url,
            status: Some(500),
            message: "Internal Server Error".to_string(),
        }
    }
}

fn page_at<T: Clone>(pages: &[Vec<T>], page: PageNumber) -> Vec<T> {
    pages
        .get(page.as_u32() as usize - 1)
        .cloned()
        .unwrap_or_default()
}

#[async_trait]
impl CodeHost for FakeHost {
    async fn repositories_page(
        &self,
        org: &OrganizationName,
        page: PageNumber,
        _size: PageSize,
    ) -> Result<Vec<RepositorySummary>, CensusError> {
        self.requests.lock().unwrap().push(Request::Repositories {
            page: page.as_u32(),
        });
        if self.failing_repository_page == Some(page.as_u32()) {
            return Err(Self::server_error(format!("/orgs/{org}/repos?page={page}")));
        }
        Ok(page_at(&self.repository_pages, page))
    }

    async fn commits_page(
        &self,
        org: &OrganizationName,
        repo: &RepositoryName,
        since: Timestamp,
        page: PageNumber,
        _size: PageSize,
    ) -> Result<Vec<CommitSummary>, CensusError> {
        self.requests.lock().unwrap().push(Request::Commits {
            repo: repo.to_string(),
            since: since.to_iso8601(),
            page: page.as_u32(),
        });
        if self.failing_commit_repos.contains(repo.as_str()) {
            return Err(Self::server_error(format!(
                "/repos/{org}/{repo}/commits?page={page}"
            )));
        }
        let pages = self
            .commit_pages
            .get(repo.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(page_at(pages, page))
    }
}

/// Clock that advances by `step` every time it is read.
pub struct SteppingClock {
    start: Timestamp,
    step: TimeDelta,
    reads: Mutex<i32>,
}

impl SteppingClock {
    pub fn new(start: Timestamp, step: TimeDelta) -> Self {
        Self {
            start,
            step,
            reads: Mutex::new(0),
        }
    }

    pub fn fixed(at: Timestamp) -> Self {
        Self::new(at, TimeDelta::zero())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        let mut reads = self.reads.lock().unwrap();
        let now = self.start.as_datetime() + self.step * *reads;
        *reads += 1;
        Timestamp::from_utc(now)
    }
}
