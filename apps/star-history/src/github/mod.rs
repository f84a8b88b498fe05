//! # GitHub Client Module
//!
//! Fetches stargazer timestamps for a repository, paging until the API
//! signals no further pages. One request in flight at a time, each
//! awaited to completion. No retries — every failure is terminal and
//! mapped to a distinct [`FetchError`] variant.
//!
//! ## Transports
//!
//! Two API surfaces expose star-grant timestamps:
//!
//! - `graphql` (default): cursor pagination over `stargazers.edges`,
//!   token required, no cap on repository size
//! - `rest`: numbered pages of `/repos/{owner}/{repo}/stargazers` with
//!   the `star+json` media type, token optional, capped at 40,000
//!   stars by the API

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use star_history_core::RepoId;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// CONSTANTS
// =============================================================================

/// GraphQL endpoint.
const GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Base URL for the REST API.
const REST_BASE_URL: &str = "https://api.github.com";

/// Stargazers fetched per page. 100 is the API maximum for both transports.
const PER_PAGE: u32 = 100;

/// Fixed per-request ceiling. No retries on top of this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("star-history/", env!("CARGO_PKG_VERSION"));

/// Stargazer pagination query, cursor-based.
const STARGAZERS_QUERY: &str = "\
query($owner: String!, $name: String!, $first: Int!, $after: String) {
  repository(owner: $owner, name: $name) {
    stargazers(first: $first, after: $after) {
      totalCount
      edges {
        starredAt
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}";

// =============================================================================
// TRANSPORT SELECTION
// =============================================================================

/// Which GitHub API surface to page through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// GraphQL API. Token required, no star-count cap.
    Graphql,
    /// REST API. Token optional, capped at 40,000 stars upstream.
    Rest,
}

impl Transport {
    /// Parse a transport name from the CLI.
    pub fn parse(s: &str) -> Result<Self, FetchError> {
        match s {
            "graphql" => Ok(Self::Graphql),
            "rest" => Ok(Self::Rest),
            _ => Err(FetchError::UnknownTransport(s.to_string())),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Terminal fetch failures, each reported distinctly to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport name was not recognized.
    #[error("Unknown transport: {0}. Use: graphql, rest")]
    UnknownTransport(String),

    /// GraphQL transport selected without a token.
    #[error(
        "GITHUB_TOKEN is required for the graphql transport \
         (a classic token with no scopes is enough for public repositories)"
    )]
    MissingToken,

    /// The API rejected the credential (HTTP 401).
    #[error("Authentication failed. Check your GITHUB_TOKEN.")]
    Unauthorized,

    /// Rate limit exhausted (HTTP 403/429), with the reset time when the
    /// API provided one.
    #[error("Rate limit exceeded{}", format_reset(.reset))]
    RateLimited {
        /// Value of `X-RateLimit-Reset`, if present.
        reset: Option<DateTime<Utc>>,
    },

    /// Repository does not exist or is not visible (HTTP 404).
    #[error("Repository not found: {0}")]
    NotFound(String),

    /// Upstream service unavailable (HTTP 502/503).
    #[error("GitHub API temporarily unavailable (HTTP {0}). Try again later.")]
    Unavailable(u16),

    /// Any other non-success status.
    #[error("Unexpected HTTP status {0} from GitHub")]
    UnexpectedStatus(u16),

    /// Connection, DNS, TLS, or timeout failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("Could not parse GitHub response: {0}")]
    InvalidBody(String),

    /// GraphQL-level errors returned inside a 200 response.
    #[error("GraphQL error: {0}")]
    GraphQl(String),
}

fn format_reset(reset: &Option<DateTime<Utc>>) -> String {
    reset.map_or_else(String::new, |at| format!(". Resets at {}", at.to_rfc3339()))
}

// =============================================================================
// RESPONSE SHAPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<GraphqlData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    stargazers: StargazerPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StargazerPage {
    total_count: u64,
    edges: Vec<StargazerEdge>,
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StargazerEdge {
    starred_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RestStargazer {
    starred_at: String,
}

// =============================================================================
// CLIENT
// =============================================================================

/// HTTP client that pages through a repository's stargazers.
#[derive(Debug, Clone)]
pub struct StarsClient {
    http: Client,
    token: Option<String>,
}

impl StarsClient {
    /// Create a client with the fixed request timeout and User-Agent.
    pub fn new(token: Option<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, token })
    }

    /// Fetch every star-grant timestamp for `repo` over the given transport.
    ///
    /// Timestamps are returned in API order (oldest first); the
    /// aggregator does not depend on that ordering.
    pub async fn fetch_timestamps(
        &self,
        repo: &RepoId,
        transport: Transport,
    ) -> Result<Vec<String>, FetchError> {
        match transport {
            Transport::Graphql => self.fetch_graphql(repo).await,
            Transport::Rest => self.fetch_rest(repo).await,
        }
    }

    /// Cursor pagination over the GraphQL stargazers connection.
    async fn fetch_graphql(&self, repo: &RepoId) -> Result<Vec<String>, FetchError> {
        let token = self.token.as_deref().ok_or(FetchError::MissingToken)?;

        let mut timestamps: Vec<String> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page: u32 = 0;

        loop {
            page += 1;
            let body = serde_json::json!({
                "query": STARGAZERS_QUERY,
                "variables": {
                    "owner": repo.owner,
                    "name": repo.name,
                    "first": PER_PAGE,
                    "after": cursor,
                },
            });

            let response = self
                .http
                .post(GRAPHQL_URL)
                .bearer_auth(token)
                .json(&body)
                .send()
                .await?;
            let response = check_status(response, repo)?;

            // Captured before the body is consumed; the point-based GraphQL
            // rate limit arrives as a 200 with an in-body error
            let reset = rate_limit_reset(response.headers());

            let parsed: GraphqlResponse = response
                .json()
                .await
                .map_err(|e| FetchError::InvalidBody(e.to_string()))?;

            if let Some(errors) = parsed.errors.filter(|errs| !errs.is_empty()) {
                return Err(classify_graphql_errors(errors, repo, reset));
            }

            let stargazers = parsed
                .data
                .and_then(|data| data.repository)
                .ok_or_else(|| FetchError::NotFound(repo.to_string()))?
                .stargazers;

            let batch = stargazers.edges.len();
            timestamps.extend(stargazers.edges.into_iter().map(|edge| edge.starred_at));

            tracing::info!(
                "page {}: {} stars ({}/{})",
                page,
                batch,
                timestamps.len(),
                stargazers.total_count
            );

            if !stargazers.page_info.has_next_page {
                break;
            }
            match stargazers.page_info.end_cursor {
                Some(next) => cursor = Some(next),
                // hasNextPage without a cursor would loop forever
                None => break,
            }
        }

        Ok(timestamps)
    }

    /// Numbered-page pagination over the REST stargazers endpoint.
    ///
    /// The `star+json` media type makes each element carry `starred_at`.
    /// An empty page signals the end.
    async fn fetch_rest(&self, repo: &RepoId) -> Result<Vec<String>, FetchError> {
        let url = format!("{REST_BASE_URL}/repos/{}/{}/stargazers", repo.owner, repo.name);

        let mut timestamps: Vec<String> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut request = self
                .http
                .get(&url)
                .header(ACCEPT, "application/vnd.github.star+json")
                .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())]);
            if let Some(ref token) = self.token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await?;
            let response = check_status(response, repo)?;

            let batch: Vec<RestStargazer> = response
                .json()
                .await
                .map_err(|e| FetchError::InvalidBody(e.to_string()))?;

            if batch.is_empty() {
                break;
            }

            tracing::info!("page {}: {} stars ({} total)", page, batch.len(), timestamps.len() + batch.len());
            timestamps.extend(batch.into_iter().map(|star| star.starred_at));
            page += 1;
        }

        Ok(timestamps)
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

/// Map GraphQL in-body errors to their distinct terminal variants.
///
/// `NOT_FOUND` and `RATE_LIMITED` get the same treatment as their HTTP
/// status counterparts; anything else surfaces as a joined `GraphQl`
/// message.
fn classify_graphql_errors(
    errors: Vec<GraphqlError>,
    repo: &RepoId,
    reset: Option<DateTime<Utc>>,
) -> FetchError {
    if errors
        .iter()
        .any(|e| e.error_type.as_deref() == Some("NOT_FOUND"))
    {
        return FetchError::NotFound(repo.to_string());
    }
    if errors
        .iter()
        .any(|e| e.error_type.as_deref() == Some("RATE_LIMITED"))
    {
        return FetchError::RateLimited { reset };
    }

    let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
    FetchError::GraphQl(messages.join("; "))
}

/// Map non-success statuses to their distinct terminal errors.
fn check_status(response: Response, repo: &RepoId) -> Result<Response, FetchError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(FetchError::Unauthorized);
    }
    // GitHub reports primary rate-limit exhaustion as 403
    if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
        return Err(FetchError::RateLimited {
            reset: rate_limit_reset(response.headers()),
        });
    }
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound(repo.to_string()));
    }
    if status == StatusCode::BAD_GATEWAY || status == StatusCode::SERVICE_UNAVAILABLE {
        return Err(FetchError::Unavailable(status.as_u16()));
    }
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus(status.as_u16()));
    }

    Ok(response)
}

/// Parse `X-RateLimit-Reset` (epoch seconds) into a UTC timestamp.
fn rate_limit_reset(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    let epoch: i64 = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse().ok()?;
    DateTime::from_timestamp(epoch, 0)
}

// =============================================================================
// TESTS
// =============================================================================
