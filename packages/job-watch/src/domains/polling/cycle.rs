//! One polling cycle.
//!
//! ```text
//! regional sweep (title × city, accept_remote = false)
//!     └─► remote sweep (title + qualifier over the whole country, accept_remote = true)
//!             └─► new matches? ──► notify each ──► persist fingerprints
//! ```
//!
//! Ids are inserted into the store as soon as a match is collected, before
//! any notification is attempted. A crash between the two loses those
//! notifications; a failed send is never retried.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::SearchSettings;
use crate::domains::listings::{
    filter_eligible, mentions_remote, notify_job, FilterPolicy, FingerprintStore, JobRecord,
    SearchQuery,
};
use crate::kernel::WatchDeps;

/// What one cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub started_at: DateTime<Utc>,
    pub queries: usize,
    pub regional_matches: usize,
    pub remote_matches: usize,
    pub notified: usize,
    pub failed: usize,
    pub persisted: bool,
}

impl CycleReport {
    fn new() -> Self {
        Self {
            started_at: Utc::now(),
            queries: 0,
            regional_matches: 0,
            remote_matches: 0,
            notified: 0,
            failed: 0,
            persisted: false,
        }
    }

    pub fn new_matches(&self) -> usize {
        self.regional_matches + self.remote_matches
    }
}

/// Owns the fingerprint store and runs cycles against it.
pub struct CycleRunner {
    settings: Arc<SearchSettings>,
    deps: WatchDeps,
    store: FingerprintStore,
}

impl CycleRunner {
    pub fn new(settings: Arc<SearchSettings>, deps: WatchDeps, store: FingerprintStore) -> Self {
        Self {
            settings,
            deps,
            store,
        }
    }

    pub fn store(&self) -> &FingerprintStore {
        &self.store
    }

    /// Keep unseen records and mark them seen.
    fn collect_unseen(&mut self, candidates: Vec<JobRecord>, all_new: &mut Vec<JobRecord>) -> usize {
        let mut added = 0;
        for record in candidates {
            if self.store.insert(record.id.clone()) {
                all_new.push(record);
                added += 1;
            }
        }
        added
    }

    /// Search one query, filter by its kind and collect what is new.
    ///
    /// Remote results must also mention remote work outside the title,
    /// since the title echoes the query's own qualifier.
    async fn run_query(&mut self, query: &SearchQuery, all_new: &mut Vec<JobRecord>) -> usize {
        let settings = Arc::clone(&self.settings);

        let records = self
            .deps
            .search
            .search(query, settings.pages_per_query)
            .await;
        let fetched = records.len();

        let mut candidates = filter_eligible(records, &settings, FilterPolicy::for_query(query));
        if query.remote {
            candidates.retain(|r| mentions_remote(r, &settings.remote_markers));
        }
        let added = self.collect_unseen(candidates, all_new);

        debug!(query = %query, remote = query.remote, fetched, added, "Query done");
        self.deps.sleeper.sleep(settings.query_pause).await;
        added
    }

    async fn regional_sweep(&mut self, report: &mut CycleReport, all_new: &mut Vec<JobRecord>) {
        for query in self.settings.regional_queries() {
            report.regional_matches += self.run_query(&query, all_new).await;
            report.queries += 1;
        }
    }

    async fn remote_sweep(&mut self, report: &mut CycleReport, all_new: &mut Vec<JobRecord>) {
        for query in self.settings.remote_queries() {
            report.remote_matches += self.run_query(&query, all_new).await;
            report.queries += 1;
        }
    }

    /// Run both sweeps, notify new matches and persist. Never fails: every
    /// error is logged and the cycle carries on.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let mut report = CycleReport::new();
        let mut all_new = Vec::new();

        self.regional_sweep(&mut report, &mut all_new).await;
        self.remote_sweep(&mut report, &mut all_new).await;

        if all_new.is_empty() {
            info!(queries = report.queries, "No new listings this cycle");
            return report;
        }

        info!(count = all_new.len(), "New listings found, sending notifications");
        for job in &all_new {
            if notify_job(self.deps.notifier.as_ref(), job).await {
                report.notified += 1;
            } else {
                report.failed += 1;
            }
            self.deps.sleeper.sleep(self.settings.send_pause).await;
        }

        match self.store.persist() {
            Ok(()) => report.persisted = true,
            Err(e) => warn!(
                path = %self.store.path().display(),
                error = %format!("{e:#}"),
                "Failed to persist fingerprints; these listings may be sent again after a restart"
            ),
        }

        info!(
            regional = report.regional_matches,
            remote = report.remote_matches,
            notified = report.notified,
            failed = report.failed,
            remembered = self.store.len(),
            "Cycle complete"
        );

        report
    }
}
