use std::sync::Arc;

use cihui_config::Config;
use cihui_types::AppEvent;
use tokio::signal;

mod controller;
mod events;
mod favorites;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::favorites::Favorites;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::new();
    let channel_capacity = config.channel_capacity;
    let favorites = Favorites::load(&config.storage.favorites_path);
    let state = Arc::new(AppState::new(config, favorites));

    let controller = AppController::new(state, channel_capacity);
    let mut tasks = controller.spawn_tasks();

    // initial word load
    controller.send(AppEvent::ReloadWords).await?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    Ok(())
}
