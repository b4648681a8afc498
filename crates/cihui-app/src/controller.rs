use std::sync::Arc;

use cihui_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity * 4), // round/result bursts
            ui_to_app: kanal::bounded_async(capacity),     // UI interactions + timers
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, channel_capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(channel_capacity.max(1)),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Inject an event as if the UI surface had sent it.
    pub async fn send(&self, event: AppEvent) -> anyhow::Result<()> {
        self.channels.ui_to_app.0.send(event).await?;
        Ok(())
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        tasks.spawn(ui_loop(self.channels.app_to_ui.1.clone()));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
