use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::cycle::{CycleReport, CycleRunner};
use crate::config::MIN_CHECK_INTERVAL;
use crate::kernel::BaseSleeper;

/// Drives the cycle runner on a fixed interval, forever.
pub struct PollScheduler {
    runner: CycleRunner,
    sleeper: Arc<dyn BaseSleeper>,
    interval: Duration,
}

impl PollScheduler {
    /// `interval` is floored at [`MIN_CHECK_INTERVAL`].
    pub fn new(runner: CycleRunner, sleeper: Arc<dyn BaseSleeper>, interval: Duration) -> Self {
        Self {
            runner,
            sleeper,
            interval: interval.max(MIN_CHECK_INTERVAL),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn runner(&self) -> &CycleRunner {
        &self.runner
    }

    /// One cycle followed by the interval sleep.
    pub async fn tick(&mut self) -> CycleReport {
        let report = self.runner.run_cycle().await;

        info!(seconds = self.interval.as_secs(), "Waiting before next check");
        self.sleeper.sleep(self.interval).await;

        report
    }

    /// Tick until the process is killed.
    pub async fn run_forever(&mut self) {
        loop {
            self.tick().await;
        }
    }
}
