// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into the cycle runner for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::deps::WatchDeps;
use super::traits::{BaseJobSearch, BaseNotifier, BaseSleeper};
use crate::domains::listings::{JobRecord, SearchQuery};

// =============================================================================
// Mock Job Search
// =============================================================================

/// Arguments captured from a search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCallArgs {
    pub query: SearchQuery,
    pub max_pages: usize,
}

/// Returns canned records per `(phrase, location)`; unknown queries find nothing.
#[derive(Default)]
pub struct MockJobSearch {
    responses: Mutex<HashMap<(String, String), Vec<JobRecord>>>,
    calls: Mutex<Vec<SearchCallArgs>>,
}

impl MockJobSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records returned every time this phrase/location pair is searched
    pub fn with_results(self, phrase: &str, location: &str, records: Vec<JobRecord>) -> Self {
        self.set_results(phrase, location, records);
        self
    }

    /// Change the canned results between cycles
    pub fn set_results(&self, phrase: &str, location: &str, records: Vec<JobRecord>) {
        self.responses
            .lock()
            .unwrap()
            .insert((phrase.to_string(), location.to_string()), records);
    }

    /// Get all search calls in order
    pub fn calls(&self) -> Vec<SearchCallArgs> {
        self.calls.lock().unwrap().clone()
    }

    /// Check if a phrase/location pair was searched
    pub fn was_searched(&self, phrase: &str, location: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.query.phrase == phrase && c.query.location == location)
    }
}

#[async_trait]
impl BaseJobSearch for MockJobSearch {
    async fn search(&self, query: &SearchQuery, max_pages: usize) -> Vec<JobRecord> {
        self.calls.lock().unwrap().push(SearchCallArgs {
            query: query.clone(),
            max_pages,
        });

        self.responses
            .lock()
            .unwrap()
            .get(&(query.phrase.clone(), query.location.clone()))
            .cloned()
            .unwrap_or_default()
    }
}

// =============================================================================
// Mock Notifier
// =============================================================================

/// Records every message; fails those containing a configured marker.
#[derive(Default)]
pub struct MockNotifier {
    fail_when_contains: Mutex<Vec<String>>,
    attempts: Mutex<Vec<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any message whose text contains `marker`
    pub fn failing_on(self, marker: &str) -> Self {
        self.fail_when_contains
            .lock()
            .unwrap()
            .push(marker.to_string());
        self
    }

    /// Every message passed to `send_message`, delivered or not
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }

    /// Messages that were accepted
    pub fn delivered(&self) -> Vec<String> {
        let markers = self.fail_when_contains.lock().unwrap().clone();
        self.attempts()
            .into_iter()
            .filter(|text| !markers.iter().any(|m| text.contains(m)))
            .collect()
    }
}

#[async_trait]
impl BaseNotifier for MockNotifier {
    async fn send_message(&self, text: &str) -> Result<()> {
        self.attempts.lock().unwrap().push(text.to_string());

        let rejected = self
            .fail_when_contains
            .lock()
            .unwrap()
            .iter()
            .any(|m| text.contains(m));
        if rejected {
            anyhow::bail!("Mock notifier rejected message");
        }
        Ok(())
    }
}

// =============================================================================
// Recording Sleeper
// =============================================================================

/// Returns immediately and remembers how long it was asked to sleep.
#[derive(Default)]
pub struct RecordingSleeper {
    durations: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn durations(&self) -> Vec<Duration> {
        self.durations.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.durations.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<Duration> {
        self.durations.lock().unwrap().last().copied()
    }
}

#[async_trait]
impl BaseSleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.durations.lock().unwrap().push(duration);
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock services plus handles to inspect them after a run
#[derive(Clone)]
pub struct TestDependencies {
    pub search: Arc<MockJobSearch>,
    pub notifier: Arc<MockNotifier>,
    pub sleeper: Arc<RecordingSleeper>,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            search: Arc::new(MockJobSearch::new()),
            notifier: Arc::new(MockNotifier::new()),
            sleeper: Arc::new(RecordingSleeper::new()),
        }
    }

    pub fn with_search(mut self, search: MockJobSearch) -> Self {
        self.search = Arc::new(search);
        self
    }

    pub fn with_notifier(mut self, notifier: MockNotifier) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Trait-object view for the cycle runner
    pub fn deps(&self) -> WatchDeps {
        WatchDeps::new(
            self.search.clone(),
            self.notifier.clone(),
            self.sleeper.clone(),
        )
    }
}
