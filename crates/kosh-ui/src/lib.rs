use std::sync::Arc;

use kanal::AsyncReceiver;
use kosh_config::Config;
use kosh_types::AppEvent;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

pub mod events;
pub mod render;
pub mod state;

use self::events::{UiOutput, handle_events};
use self::state::UiState;

/// Terminal UI loop: renders app events to stdout until the app asks to quit
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
    interactive: bool,
) -> anyhow::Result<()> {
    let ui_config = config.read().await.ui.clone();
    let mut state = UiState::new();
    let mut stdout = tokio::io::stdout();

    tracing::debug!("[UI] Render loop started (interactive: {})", interactive);

    while let Ok(event) = app_to_ui_rx.recv().await {
        let UiOutput { text, quit } = handle_events(event, &mut state, &ui_config);

        if !text.is_empty() {
            stdout.write_all(text.as_bytes()).await?;
            if interactive && !quit {
                stdout.write_all(ui_config.prompt.as_bytes()).await?;
            }
            stdout.flush().await?;
        }

        if quit {
            tracing::debug!("[UI] Quit requested");
            break;
        }
    }

    Ok(())
}
