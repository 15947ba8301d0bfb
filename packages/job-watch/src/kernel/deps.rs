use std::sync::Arc;

use super::traits::{BaseJobSearch, BaseNotifier, BaseSleeper};

/// Dependencies the cycle runner reaches the outside world through (trait objects for testability)
#[derive(Clone)]
pub struct WatchDeps {
    pub search: Arc<dyn BaseJobSearch>,
    pub notifier: Arc<dyn BaseNotifier>,
    pub sleeper: Arc<dyn BaseSleeper>,
}

impl WatchDeps {
    pub fn new(
        search: Arc<dyn BaseJobSearch>,
        notifier: Arc<dyn BaseNotifier>,
        sleeper: Arc<dyn BaseSleeper>,
    ) -> Self {
        Self {
            search,
            notifier,
            sleeper,
        }
    }
}
