use kanal::AsyncSender;
use kosh_types::{AppEvent, UiEvent};

use super::LookupContext;
use super::query_input::to_display;

pub async fn handle_select_result(
    ctx: &mut LookupContext,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let detail = ctx
        .session
        .select(index)
        .and_then(|position| to_display(ctx.dictionary.as_ref(), position));

    match detail {
        Some(detail) => {
            tracing::debug!("Selected result {} -> entry {}", index, detail.position);
            app_to_ui_tx.send(AppEvent::ShowDetail(Some(detail))).await?;
        }
        None => {
            tracing::debug!(
                "Selection {} out of range ({} results)",
                index,
                ctx.session.results().len()
            );
            let notice = format!("No result {} in the current list", index + 1);
            app_to_ui_tx
                .send(AppEvent::UiEvent(UiEvent::Message(notice)))
                .await?;
        }
    }

    Ok(())
}
