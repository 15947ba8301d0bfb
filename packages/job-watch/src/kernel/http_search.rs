//! Job board search over plain HTTP.
//!
//! Fetches result pages with reqwest and hands the HTML to the listing page
//! parser. One query walks pages `0..max_pages` and stops at the first
//! failure or empty page; failures are logged here and never reach the caller.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::traits::{BaseJobSearch, BaseSleeper};
use crate::domains::listings::{JobRecord, ListingPageParser, SearchQuery};

/// Errors fetching a single results page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status from the job board
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Where and how to query the job board.
#[derive(Debug, Clone)]
pub struct SearchEndpoint {
    pub search_url: String,
    /// Base that relative listing links are resolved against.
    pub site_url: String,
    pub user_agent: String,
    /// Results per page; the `start` offset advances by this much.
    pub page_size: usize,
    pub timeout: Duration,
    pub page_pause: Duration,
}

impl Default for SearchEndpoint {
    fn default() -> Self {
        Self {
            search_url: "https://fr.indeed.com/jobs".to_string(),
            site_url: "https://fr.indeed.com".to_string(),
            user_agent: "Mozilla/5.0 (compatible; JobNotifier/1.0; +https://example.com)"
                .to_string(),
            page_size: 10,
            timeout: Duration::from_secs(15),
            page_pause: Duration::from_secs(1),
        }
    }
}

/// `<search_url>?q=<phrase>&l=<location>&start=<start>`
pub fn build_search_url(
    search_url: &str,
    phrase: &str,
    location: &str,
    start: usize,
) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        search_url,
        &[
            ("q", phrase),
            ("l", location),
            ("start", start.to_string().as_str()),
        ],
    )
}

pub struct HttpJobSearch {
    client: reqwest::Client,
    endpoint: SearchEndpoint,
    parser: ListingPageParser,
    sleeper: Arc<dyn BaseSleeper>,
}

impl HttpJobSearch {
    pub fn new(
        endpoint: SearchEndpoint,
        contract_keywords: Vec<String>,
        sleeper: Arc<dyn BaseSleeper>,
    ) -> Result<Self> {
        let site_url = Url::parse(&endpoint.site_url)
            .with_context(|| format!("Invalid site URL {}", endpoint.site_url))?;

        let client = reqwest::Client::builder()
            .timeout(endpoint.timeout)
            .user_agent(endpoint.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            parser: ListingPageParser::new(site_url, contract_keywords),
            endpoint,
            sleeper,
        })
    }

    /// Replace the page parser (custom locator ranking).
    pub fn with_parser(mut self, parser: ListingPageParser) -> Self {
        self.parser = parser;
        self
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page_index: usize,
    ) -> Result<Vec<JobRecord>, FetchError> {
        let url = build_search_url(
            &self.endpoint.search_url,
            &query.phrase,
            &query.location,
            page_index * self.endpoint.page_size,
        )?;

        debug!(url = %url, "Fetching results page");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        Ok(self.parser.parse(&html))
    }
}

#[async_trait]
impl BaseJobSearch for HttpJobSearch {
    async fn search(&self, query: &SearchQuery, max_pages: usize) -> Vec<JobRecord> {
        let mut records = Vec::new();

        for page in 0..max_pages {
            match self.fetch_page(query, page).await {
                Ok(found) if found.is_empty() => {
                    debug!(query = %query, page, "Empty results page, stopping");
                    break;
                }
                Ok(found) => {
                    debug!(query = %query, page, count = found.len(), "Results page parsed");
                    records.extend(found);
                }
                Err(e) => {
                    warn!(query = %query, page, error = %e, "Search fetch failed, skipping rest of query");
                    break;
                }
            }

            if page + 1 < max_pages {
                self.sleeper.sleep(self.endpoint.page_pause).await;
            }
        }

        records
    }
}
