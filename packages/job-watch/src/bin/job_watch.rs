// Entry point for the job watcher daemon

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use job_watch_core::domains::listings::FingerprintStore;
use job_watch_core::domains::polling::{CycleRunner, PollScheduler};
use job_watch_core::kernel::{
    BaseSleeper, HttpJobSearch, SearchEndpoint, TelegramNotifier, TokioSleeper, WatchDeps,
};
use job_watch_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_watch_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting job watcher");

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Configuration error, not starting");
            std::process::exit(1);
        }
    };
    tracing::info!(
        titles = config.search.titles.len(),
        cities = config.search.cities.len(),
        interval_secs = config.check_interval.as_secs(),
        "Configuration loaded"
    );

    let store = FingerprintStore::load(&config.seen_file);
    tracing::info!(count = store.len(), "Listings already remembered");

    let sleeper: Arc<dyn BaseSleeper> = Arc::new(TokioSleeper);
    let search = HttpJobSearch::new(
        SearchEndpoint::default(),
        config.search.contract_keywords.clone(),
        sleeper.clone(),
    )
    .context("Failed to build job search client")?;
    let notifier = TelegramNotifier::new(&config.telegram_bot_token, config.telegram_chat_id.clone())
        .context("Failed to build Telegram notifier")?;

    let deps = WatchDeps::new(Arc::new(search), Arc::new(notifier), sleeper.clone());
    let runner = CycleRunner::new(Arc::new(config.search), deps, store);

    let mut scheduler = PollScheduler::new(runner, sleeper, config.check_interval);
    scheduler.run_forever().await;

    Ok(())
}
