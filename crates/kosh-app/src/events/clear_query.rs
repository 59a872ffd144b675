use kanal::AsyncSender;
use kosh_types::AppEvent;

use super::LookupContext;

/// Clear button: drops any pending keystroke, the results and the selection
pub async fn handle_clear_query(
    ctx: &mut LookupContext,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Some(pending) = ctx.debouncer.cancel() {
        tracing::debug!("Discarding pending query '{}'", pending);
    }
    ctx.session.clear();

    app_to_ui_tx
        .send(AppEvent::ShowResults {
            query: String::new(),
            results: Vec::new(),
        })
        .await?;
    app_to_ui_tx.send(AppEvent::ShowDetail(None)).await?;

    Ok(())
}
