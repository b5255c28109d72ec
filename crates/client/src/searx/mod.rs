//! SearXNG search client.
//!
//! Queries the JSON API of a self-hosted SearXNG instance and passes its
//! result objects through untouched. See:
//! https://docs.searxng.org/dev/search_api.html
//!
//! ### Behaviour
//!
//! - **Endpoint**: `GET {base_url}/search?format=json`
//! - **Pagination**: walks `pageno` up to `max_pages`, sleeping `delay`
//!   between pages to stay under instance rate limits, stopping early when
//!   a page comes back empty or `max_results` is reached.
//! - **Passthrough**: result objects are kept as opaque records; no field
//!   is interpreted or validated here.

pub mod error;
pub mod response;

pub use error::SearxError;
pub use response::SearxResponse;

use quarry_core::{AppConfig, Backend, Error, Query, ResultRecord, SearchKind, SearchProvider};
use std::future::Future;
use std::time::Duration;

/// Default base URL for a local SearXNG instance.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "quarry/0.1";

/// SearXNG client configuration.
#[derive(Debug, Clone)]
pub struct SearxConfig {
    /// Instance base URL (default: http://localhost:8080).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: quarry/0.x).
    pub user_agent: String,
}

impl Default for SearxConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SearxConfig {
    /// Derive client configuration from the application configuration.
    pub fn from_app(config: &AppConfig) -> Self {
        Self {
            base_url: config.searx_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// SearXNG API client.
///
/// Holds two HTTP clients because reqwest fixes the redirect policy at
/// build time while `Query::follow_redirects` is a per-call setting.
#[derive(Debug, Clone)]
pub struct SearxClient {
    http: reqwest::Client,
    http_no_redirect: reqwest::Client,
    config: SearxConfig,
}

impl SearxClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SearxConfig) -> Result<Self, SearxError> {
        if config.base_url.is_empty() {
            return Err(SearxError::InvalidBaseUrl("base URL is empty".to_string()));
        }
        url::Url::parse(&config.base_url).map_err(|e| SearxError::InvalidBaseUrl(e.to_string()))?;

        let builder = || {
            reqwest::Client::builder()
                .timeout(config.timeout)
                .user_agent(config.user_agent.as_str())
        };

        let http = builder().build().map_err(SearxError::from)?;
        let http_no_redirect = builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(SearxError::from)?;

        Ok(Self { http, http_no_redirect, config })
    }

    /// Fetch one result page.
    async fn fetch_page(&self, kind: SearchKind, query: &Query, page: usize) -> Result<Vec<ResultRecord>, SearxError> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let params = page_params(kind, query, page);

        tracing::debug!(kind = kind.as_str(), query = %query.text, page, "querying SearXNG");

        let http = if query.follow_redirects { &self.http } else { &self.http_no_redirect };
        let response = http.get(&url).query(&params).send().await?;

        let status = response.status();
        if status == 429 {
            return Err(SearxError::RateLimited);
        }
        if status.is_client_error() || status.is_server_error() {
            return Err(SearxError::HttpError { status: status.as_u16() });
        }

        let body: SearxResponse = response
            .json()
            .await
            .map_err(|e| SearxError::Parse(e.to_string()))?;

        tracing::debug!(page, count = body.results.len(), "page fetched");

        Ok(body.results)
    }
}

/// Build the request parameters for one page.
fn page_params(kind: SearchKind, query: &Query, page: usize) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("q", query.text.clone()),
        ("format", "json".to_string()),
        ("pageno", page.to_string()),
        ("language", region_to_language(&query.region)),
        ("safesearch", query.safesearch.as_level().to_string()),
    ];

    if let Some(timelimit) = query.timelimit {
        params.push(("time_range", timelimit.as_range().to_string()));
    }
    if kind == SearchKind::News {
        params.push(("categories", "news".to_string()));
    }
    if let Some(engines) = backend_engines(query.backend) {
        params.push(("engines", engines.to_string()));
    }

    params
}

/// Map the region code onto the instance's `language` parameter.
///
/// "wt-wt" is the world-wide marker and becomes `all`.
fn region_to_language(region: &str) -> String {
    if region == "wt-wt" { "all".to_string() } else { region.to_string() }
}

/// Map a backend profile onto the instance's `engines` parameter.
///
/// The default `api` profile sends no `engines` and lets the instance pick
/// its configured defaults; the other profiles name a specific engine.
/// Engines unknown to the instance degrade server-side, which keeps the
/// selector an opaque passthrough.
fn backend_engines(backend: Backend) -> Option<&'static str> {
    match backend {
        Backend::Api => None,
        Backend::Html => Some("duckduckgo_html"),
        Backend::Lite => Some("duckduckgo_lite"),
    }
}

#[async_trait::async_trait]
impl SearchProvider for SearxClient {
    /// Walk result pages and return the fully materialized sequence.
    async fn search(&self, kind: SearchKind, query: &Query) -> Result<Vec<ResultRecord>, Error> {
        collect_pages(query, |page| self.fetch_page(kind, query, page))
            .await
            .map_err(Error::upstream)
    }
}

/// Accumulate result pages from `fetch` until `max_results` records are
/// collected, a page comes back empty, or `max_pages` is exhausted, sleeping
/// `delay` between pages. The collected sequence is truncated to
/// `max_results`; a page fetch failure propagates immediately.
async fn collect_pages<F, Fut>(query: &Query, mut fetch: F) -> Result<Vec<ResultRecord>, SearxError>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Vec<ResultRecord>, SearxError>>,
{
    let mut collected: Vec<ResultRecord> = Vec::with_capacity(query.max_results);

    for page in 1..=query.max_pages {
        if page > 1 {
            tokio::time::sleep(query.delay).await;
        }

        let records = fetch(page).await?;
        if records.is_empty() {
            break;
        }

        collected.extend(records);
        if collected.len() >= query.max_results {
            break;
        }
    }

    collected.truncate(query.max_results);
    Ok(collected)
}
