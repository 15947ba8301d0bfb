// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no filtering or dedup logic.
// The cycle runner composes them; tests swap in the mocks from test_dependencies.
//
// Naming convention: Base* for trait names (e.g., BaseJobSearch, BaseNotifier)

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::domains::listings::{JobRecord, SearchQuery};

// =============================================================================
// Job Search Trait (Infrastructure - listing source)
// =============================================================================

#[async_trait]
pub trait BaseJobSearch: Send + Sync {
    /// Fetch up to `max_pages` result pages for the query.
    ///
    /// Infallible by contract: a failed page ends the query early and the
    /// records gathered so far are returned.
    async fn search(&self, query: &SearchQuery, max_pages: usize) -> Vec<JobRecord>;
}

// =============================================================================
// Notifier Trait (Infrastructure - messaging endpoint)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Deliver one plain-text message to the configured destination
    async fn send_message(&self, text: &str) -> Result<()>;
}

// =============================================================================
// Sleeper Trait (Infrastructure - pacing)
// =============================================================================

#[async_trait]
pub trait BaseSleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
