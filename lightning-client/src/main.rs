use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use lightning_client::cache::{CacheRevalidator, dashboard_cache};
use lightning_client::command::Command;
use lightning_client::config;
use lightning_client::environment::HostEnvironment;
use lightning_client::logging;
use lightning_client::session::{Outcome, Session};
use lightning_client::settings::SettingsController;
use lightning_client::tracker::SpellTracker;
use lightning_client::DataClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::read_config()?;
    let _logging_guard = logging::init_logging(&config.log_dir, "lightning", &config.log_level)?;

    tracing::info!("Lightning client started.");

    let environment = HostEnvironment::current();
    let client = DataClient::from_config(config, environment)?;

    let dashboard = Arc::new(dashboard_cache(client.clone(), config.cache.stale_after()));
    let revalidator =
        CacheRevalidator::new(dashboard.clone(), config.cache.revalidate_interval()).start();

    let tracker = Arc::new(SpellTracker::new(client.clone()));
    let refresher = tracker.clone().start_refresh(config.tracker.spell_refresh());
    let ticker = tracker.clone().start_ticker();

    let settings = match SettingsController::load(client.clone()).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings, using defaults: {}", e);
            SettingsController::new(client.clone(), Default::default())
        }
    };

    let session = Session::new(dashboard, tracker, settings, config.summoner.clone());
    if let Outcome::Continue(output) = session.execute(Command::Dashboard(None)).await {
        println!("{}", output);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match session.run_line(&line).await {
                    Outcome::Continue(output) => println!("{}", output),
                    Outcome::Quit => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received.");
                break;
            }
        }
    }

    revalidator.abort();
    refresher.abort();
    ticker.abort();
    tracing::info!("Lightning client stopped.");

    Ok(())
}
