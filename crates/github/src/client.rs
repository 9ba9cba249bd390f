//! Authenticated GitHub REST client.

use async_trait::async_trait;
use census::{
    CensusError, CodeHost, CommitSummary, OrganizationName, PageNumber, PageSize, RepositoryName,
    RepositorySummary, Timestamp,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::wire::{CommitPayload, RepositoryPayload};
use crate::GithubError;

/// Public GitHub API root. GitHub Enterprise Server uses `https://<host>/api/v3`.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("contributor-census/", env!("CARGO_PKG_VERSION"));

/// A personal access token or installation token.
///
/// The value never appears in `Debug` output.
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wraps a token, returning `None` if it is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    fn authorization(&self) -> String {
        format!("token {}", self.0)
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Issues authenticated `GET` requests against a GitHub REST API root.
///
/// Every request is sent once. A non-2xx status is an error; nothing is
/// retried and rate-limit headers are not inspected.
#[derive(Debug, Clone)]
pub struct GithubClient {
    base_url: String,
    token: ApiToken,
    http: Client,
}

impl GithubClient {
    /// Creates a client rooted at `base_url` (trailing `/` is ignored).
    pub fn new(base_url: &str, token: ApiToken) -> Result<Self, GithubError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GithubError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            token,
            http,
        })
    }

    /// Returns the API root this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `url` and parses the body as JSON.
    pub async fn fetch(&self, url: &str) -> Result<Value, CensusError> {
        debug!(url, "Requesting URL");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.token.authorization())
            .send()
            .await
            .map_err(|e| CensusError::Http {
                url: url.to_string(),
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match github_message(&body) {
                Some(message) => message,
                None => status.canonical_reason().unwrap_or("request failed").to_string(),
            };
            return Err(CensusError::Http {
                url: url.to_string(),
                status: Some(status.as_u16()),
                message,
            });
        }

        response.json::<Value>().await.map_err(|e| CensusError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn fetch_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, CensusError> {
        let value = self.fetch(url).await?;
        serde_json::from_value(value).map_err(|e| CensusError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn repositories_url(&self, org: &OrganizationName, page: PageNumber, size: PageSize) -> String {
        format!(
            "{}/orgs/{}/repos?page={}&per_page={}",
            self.base_url, org, page, size
        )
    }

    fn commits_url(
        &self,
        org: &OrganizationName,
        repo: &RepositoryName,
        since: Timestamp,
        page: PageNumber,
        size: PageSize,
    ) -> String {
        format!(
            "{}/repos/{}/{}/commits?since={}&page={}&per_page={}",
            self.base_url,
            org,
            repo,
            since.to_iso8601(),
            page,
            size
        )
    }
}

/// Extracts the `message` field GitHub puts in error bodies.
fn github_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[async_trait]
impl CodeHost for GithubClient {
    #[instrument(skip(self), level = "debug")]
    async fn repositories_page(
        &self,
        org: &OrganizationName,
        page: PageNumber,
        size: PageSize,
    ) -> Result<Vec<RepositorySummary>, CensusError> {
        let url = self.repositories_url(org, page, size);
        let payloads: Vec<RepositoryPayload> = self.fetch_list(&url).await?;
        payloads
            .into_iter()
            .map(|payload| payload.into_summary(&url))
            .collect()
    }

    #[instrument(skip(self), level = "debug")]
    async fn commits_page(
        &self,
        org: &OrganizationName,
        repo: &RepositoryName,
        since: Timestamp,
        page: PageNumber,
        size: PageSize,
    ) -> Result<Vec<CommitSummary>, CensusError> {
        let url = self.commits_url(org, repo, since, page, size);
        let payloads: Vec<CommitPayload> = self.fetch_list(&url).await?;
        Ok(payloads.into_iter().map(CommitSummary::from).collect())
    }
}
