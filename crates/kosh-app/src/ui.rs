use std::sync::Arc;

use kanal::AsyncReceiver;
use kosh_config::Config;
use kosh_types::AppEvent;
use tokio::sync::RwLock;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
    interactive: bool,
) -> anyhow::Result<()> {
    kosh_ui::ui_loop(app_to_ui_rx, config, interactive).await
}
