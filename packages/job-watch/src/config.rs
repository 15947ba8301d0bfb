use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domains::listings::SearchQuery;

/// Shortest allowed pause between two cycles.
pub const MIN_CHECK_INTERVAL: Duration = Duration::from_secs(60);

const DEFAULT_CHECK_INTERVAL_SECS: u64 = 3600;
const DEFAULT_SEEN_FILE: &str = "seen.json";

const DEFAULT_TITLES: &[&str] = &[
    "opérateur de saisie",
    "opérateur saisie",
    "saisie de données",
    "saisie",
    "data entry",
];

const DEFAULT_CITIES: &[&str] = &[
    "Rennes",
    "Nantes",
    "Brest",
    "Saint-Brieuc",
    "Vannes",
    "Lorient",
    "Quimper",
];

/// Ordered: the first keyword found in a listing becomes its contract tag.
const CONTRACT_KEYWORDS: &[&str] = &["CDI", "CDD", "Intérim", "Interim", "Contrat"];

/// Contract words that rescue a listing whose tag is not accepted.
const SUMMARY_CONTRACT_KEYWORDS: &[&str] = &["cdi", "cdd", "intérim", "interim"];

const REMOTE_MARKERS: &[&str] = &["télétravail", "teletravail", "remote"];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    /// Already floored at [`MIN_CHECK_INTERVAL`].
    pub check_interval: Duration,
    pub seen_file: PathBuf,
    pub search: SearchSettings,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    ///
    /// Blank values count as missing, so `TELEGRAM_CHAT_ID=` in a `.env` file
    /// is still a configuration error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let telegram_bot_token =
            get("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;
        let telegram_chat_id = get("TELEGRAM_CHAT_ID").context("TELEGRAM_CHAT_ID must be set")?;

        // Zero and negative values fall to the floor below like any short interval.
        let interval_secs: u64 = match get("CHECK_INTERVAL") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .context("CHECK_INTERVAL must be a number of seconds")?
                .max(0)
                .unsigned_abs(),
            None => DEFAULT_CHECK_INTERVAL_SECS,
        };

        let mut search = SearchSettings::default();
        if let Some(titles) = get("SEARCH_TITLES").map(|raw| split_list(&raw)) {
            if !titles.is_empty() {
                search = search.with_titles(titles);
            }
        }
        if let Some(cities) = get("SEARCH_CITIES").map(|raw| split_list(&raw)) {
            if !cities.is_empty() {
                search = search.with_cities(cities);
            }
        }

        Ok(Self {
            telegram_bot_token: telegram_bot_token.trim().to_string(),
            telegram_chat_id: telegram_chat_id.trim().to_string(),
            check_interval: Duration::from_secs(interval_secs).max(MIN_CHECK_INTERVAL),
            seen_file: get("SEEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SEEN_FILE)),
            search,
        })
    }
}

/// What to search for and how to judge the results.
///
/// Built once at startup and shared read-only (behind an `Arc`) for the rest
/// of the process.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub titles: Vec<String>,
    pub cities: Vec<String>,
    pub contract_keywords: Vec<String>,
    pub accepted_contracts: Vec<String>,
    pub summary_contract_keywords: Vec<String>,
    pub remote_markers: Vec<String>,
    /// Appended to each title for the remote sweep.
    pub remote_qualifier: String,
    /// Nationwide location used by the remote sweep.
    pub remote_location: String,
    pub pages_per_query: usize,
    /// Pause after each search query.
    pub query_pause: Duration,
    /// Pause after each notification.
    pub send_pause: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            titles: to_strings(DEFAULT_TITLES),
            cities: to_strings(DEFAULT_CITIES),
            contract_keywords: to_strings(CONTRACT_KEYWORDS),
            accepted_contracts: to_strings(CONTRACT_KEYWORDS),
            summary_contract_keywords: to_strings(SUMMARY_CONTRACT_KEYWORDS),
            remote_markers: to_strings(REMOTE_MARKERS),
            remote_qualifier: "télétravail".to_string(),
            remote_location: "France".to_string(),
            pages_per_query: 1,
            query_pause: Duration::from_secs(1),
            send_pause: Duration::from_secs(1),
        }
    }
}

impl SearchSettings {
    pub fn with_titles(mut self, titles: Vec<String>) -> Self {
        self.titles = dedup_preserving_order(titles);
        self
    }

    pub fn with_cities(mut self, cities: Vec<String>) -> Self {
        self.cities = dedup_preserving_order(cities);
        self
    }

    pub fn with_accepted_contracts(mut self, accepted: Vec<String>) -> Self {
        self.accepted_contracts = accepted;
        self
    }

    pub fn with_pauses(mut self, query_pause: Duration, send_pause: Duration) -> Self {
        self.query_pause = query_pause;
        self.send_pause = send_pause;
        self
    }

    /// Every title × city pair, titles outermost.
    pub fn regional_queries(&self) -> Vec<SearchQuery> {
        self.titles
            .iter()
            .flat_map(|title| {
                self.cities
                    .iter()
                    .map(move |city| SearchQuery::regional(title.clone(), city.clone()))
            })
            .collect()
    }

    /// One nationwide remote query per title.
    pub fn remote_queries(&self) -> Vec<SearchQuery> {
        self.titles
            .iter()
            .map(|title| {
                SearchQuery::remote(
                    format!("{} {}", title, self.remote_qualifier),
                    self.remote_location.clone(),
                )
            })
            .collect()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn split_list(raw: &str) -> Vec<String> {
    dedup_preserving_order(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
