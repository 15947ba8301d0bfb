//! Kernel module - infrastructure the watcher runs on.

pub mod deps;
pub mod http_search;
pub mod sleeper;
pub mod telegram_notifier;
pub mod test_dependencies;
pub mod traits;

pub use deps::WatchDeps;
pub use http_search::{build_search_url, FetchError, HttpJobSearch, SearchEndpoint};
pub use sleeper::TokioSleeper;
pub use telegram_notifier::TelegramNotifier;
pub use test_dependencies::TestDependencies;
pub use traits::*;
