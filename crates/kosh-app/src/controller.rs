use std::future::Future;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kosh_types::AppEvent;
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(input_capacity: usize, output_capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(output_capacity),
            ui_to_app: kanal::bounded_async(input_capacity),
        }
    }
}

pub struct AppTasks {
    /// Ends when the user quits
    pub ui: JoinHandle<anyhow::Result<()>>,
    pub background: JoinSet<anyhow::Result<()>>,
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub async fn new(state: Arc<AppState>) -> Self {
        let channels = {
            let config = state.config.read().await;
            ChannelSet::new(config.input_channel_capacity, config.output_channel_capacity)
        };

        Self {
            channels,
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, interactive: bool) -> AppTasks {
        let mut background = JoinSet::new();

        // Event loop
        background.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Input watcher
        background.spawn(watcher_io(
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        // UI loop
        let ui = tokio::spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.state.config.clone(),
            interactive,
        ));

        AppTasks { ui, background }
    }

    /// Run until the user quits, a task fails, or `shutdown` resolves
    pub async fn run(
        &self,
        shutdown: impl Future<Output = ()>,
        interactive: bool,
    ) -> anyhow::Result<()> {
        let AppTasks { mut ui, mut background } = self.spawn_tasks(interactive);
        tokio::pin!(shutdown);

        let outcome = loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested");
                    break Ok(());
                }
                result = &mut ui => {
                    break match result {
                        Ok(result) => result,
                        Err(e) => {
                            tracing::error!("ui task panicked: {e}");
                            Err(e.into())
                        }
                    };
                }
                Some(result) = background.join_next() => {
                    match result {
                        Ok(Ok(())) => tracing::debug!("background task finished"),
                        Ok(Err(e)) => {
                            tracing::error!("background task failed: {e}");
                            break Err(e);
                        }
                        Err(e) => {
                            tracing::error!("background task panicked: {e}");
                            break Err(e.into());
                        }
                    }
                }
            }
        };

        self.shutdown();
        ui.abort();
        background.shutdown().await;
        outcome
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
