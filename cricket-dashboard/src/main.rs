// Cricket dashboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Build the HTTP backend and the controller
// 4. Create mpsc channels
// 5. Spawn app logic task
// 6. Run the TUI until the user quits
// 7. Cleanup on exit

use std::sync::Arc;
use std::time::Duration;

use cricket_dashboard::api::HttpBackend;
use cricket_dashboard::app;
use cricket_dashboard::config;
use cricket_dashboard::dashboard::{DashboardController, FlowSettings};
use cricket_dashboard::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Cricket dashboard starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: backend={}, min query length {}, season {}",
        config.api.base_url, config.search.min_query_len, config.prediction.season
    );

    let backend = HttpBackend::from_config(&config).context("failed to build backend client")?;
    info!("Health checks against {}", backend.health_url());

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    let controller = DashboardController::new(
        Arc::new(backend),
        ui_tx,
        FlowSettings::from_config(&config),
    );

    let health_interval = Duration::from_secs(config.api.health_check_secs);
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, controller, health_interval).await {
            error!("Application loop error: {}", e);
        }
    });

    // Blocks until the user quits. Flow tasks still holding a view sender
    // keep `ui_rx` open, so the TUI, not the channel, decides when to stop.
    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    let _ = tokio::time::timeout(Duration::from_secs(2), app_handle).await;

    info!("Cricket dashboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("cricket-dashboard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cricket_dashboard=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
