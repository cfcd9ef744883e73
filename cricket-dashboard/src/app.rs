// Application orchestration loop.
//
// Receives user commands from the TUI and dispatches each one to the
// `DashboardController`. Network flows run as detached tasks so the loop
// (and the UI) never waits on the backend; their renders race back to the
// TUI over the controller's view channel. A periodic health check keeps the
// connection indicator current.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::dashboard::DashboardController;
use crate::protocol::UserCommand;

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the application event loop until `Quit` arrives or the command
/// channel closes.
///
/// Listens on two sources using `tokio::select!`:
/// 1. User commands from the TUI
/// 2. The health-check interval (first tick fires immediately)
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    controller: DashboardController,
    health_interval: Duration,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    let mut health_tick = tokio::time::interval(health_interval);
    health_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&controller, cmd).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            _ = health_tick.tick() => {
                spawn_health_check(&controller);
            }
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

/// Dispatch a single user command.
///
/// Section switching touches no network and is handled inline; every other
/// command is spawned so overlapping requests are allowed.
pub async fn handle_user_command(controller: &DashboardController, cmd: UserCommand) {
    match cmd {
        UserCommand::ShowSection(id) => {
            debug!("Switching to section: {id}");
            controller.show_section(&id).await;
        }
        UserCommand::Search(query) => {
            let controller = controller.clone();
            tokio::spawn(async move {
                controller.search_players(&query).await;
            });
        }
        UserCommand::LoadPlayer { id, name } => {
            info!("Loading player {id} ({name})");
            let controller = controller.clone();
            tokio::spawn(async move {
                controller.load_player_stats(id, &name).await;
            });
        }
        UserCommand::Predict(form) => {
            info!("Prediction requested: {} vs {}", form.team, form.opposition);
            let controller = controller.clone();
            tokio::spawn(async move {
                controller.predict_runs(form).await;
            });
        }
        UserCommand::CheckHealth => {
            spawn_health_check(controller);
        }
        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

fn spawn_health_check(controller: &DashboardController) {
    let controller = controller.clone();
    tokio::spawn(async move {
        controller.check_health().await;
    });
}
