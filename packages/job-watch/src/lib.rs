// Job Watch - Core
//
// Polls a job board for postings matching configured titles and cities,
// filters them, drops the ones already seen and pushes the rest to Telegram.
//
// kernel/   infrastructure behind Base* traits (HTTP search, Telegram, timers)
// domains/  listings (records, extraction, filtering, dedup) and polling (cycles)

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
