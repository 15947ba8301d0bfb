//! Shared fixtures for cycle integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use job_watch_core::domains::listings::{FingerprintStore, JobRecord};
use job_watch_core::domains::polling::CycleRunner;
use job_watch_core::kernel::TestDependencies;
use job_watch_core::SearchSettings;

/// One title, two cities, no pauses worth measuring.
pub fn small_settings() -> SearchSettings {
    SearchSettings::default()
        .with_titles(vec!["saisie".into()])
        .with_cities(vec!["Rennes".into(), "Brest".into()])
        .with_pauses(Duration::from_millis(1), Duration::from_millis(2))
}

pub fn job(title: &str, location: &str, summary: &str, jk: &str) -> JobRecord {
    JobRecord::new(
        title,
        "Acme",
        location,
        summary,
        format!("https://fr.indeed.com/rc/clk?jk={jk}"),
        None,
    )
}

pub fn runner(deps: &TestDependencies, seen_file: &Path) -> CycleRunner {
    CycleRunner::new(
        Arc::new(small_settings()),
        deps.deps(),
        FingerprintStore::load(seen_file),
    )
}
