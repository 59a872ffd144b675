use kanal::AsyncSender;
use kosh_core::Dictionary;
use kosh_types::{AppEvent, DisplayResult};

use super::LookupContext;

/// Every keystroke re-arms the debounce timer; nothing is searched yet
pub fn handle_query_input(ctx: &mut LookupContext, text: String) {
    tracing::debug!("Query input: '{}'", text);
    ctx.debouncer.push(text);
}

/// Runs once per settled input value
pub async fn handle_settled_query(
    ctx: &mut LookupContext,
    query: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let had_selection = ctx.session.selected().is_some();

    let positions = ctx.session.run(ctx.dictionary.as_ref(), &query).to_vec();
    tracing::debug!(
        "Search '{}' (normalized '{}'): {} results",
        query,
        ctx.session.normalized(),
        positions.len()
    );

    let results: Vec<DisplayResult> = positions
        .into_iter()
        .filter_map(|position| to_display(ctx.dictionary.as_ref(), position))
        .collect();

    app_to_ui_tx
        .send(AppEvent::ShowResults { query, results })
        .await?;

    if had_selection && ctx.session.selected().is_none() {
        app_to_ui_tx.send(AppEvent::ShowDetail(None)).await?;
    }

    Ok(())
}

pub fn to_display(dictionary: &dyn Dictionary, position: usize) -> Option<DisplayResult> {
    let entry = dictionary.get(position)?;
    Some(DisplayResult {
        position,
        headword: entry.headword.clone(),
        romanization: entry.romanization.clone(),
        definition: entry.definition.clone(),
        entry_type: entry.entry_type.clone(),
        source: entry.source.clone(),
    })
}
