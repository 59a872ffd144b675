use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use kosh_core::{Debouncer, Dictionary, LookupSession, PrefixDictionary};
use kosh_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod clear_query;
pub mod load_dictionary;
pub mod query_input;
pub mod select_result;

use clear_query::handle_clear_query;
use load_dictionary::{LoadHandle, handle_load_result, start_load, wait_for_load};
use query_input::{handle_query_input, handle_settled_query};
use select_result::handle_select_result;

/// Everything the lookup path owns. Only the event loop touches it.
pub struct LookupContext {
    /// Empty until the load finishes, replaced once afterwards
    pub dictionary: Arc<dyn Dictionary>,
    pub session: LookupSession,
    pub debouncer: Debouncer<String>,
}

impl LookupContext {
    pub fn new(debounce: Duration) -> Self {
        Self {
            dictionary: Arc::new(PrefixDictionary::empty()),
            session: LookupSession::new(),
            debouncer: Debouncer::new(debounce),
        }
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let debounce = {
        let config = state.config.read().await;
        Duration::from_millis(config.search.debounce_ms)
    };
    let mut ctx = LookupContext::new(debounce);
    let mut loading: Option<LoadHandle> = Some(start_load(&state, &app_to_ui_tx).await?);

    tracing::info!("[EVENT_LOOP] Starting main loop (debounce {:?})", debounce);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => {
                let Ok(event) = event else {
                    tracing::info!("[EVENT_LOOP] Input channel closed");
                    break;
                };

                if matches!(event, AppEvent::Quit) {
                    drain(&state, &mut ctx, &mut loading, &app_to_ui_tx).await?;
                    app_to_ui_tx.send(AppEvent::Quit).await?;
                    break;
                }

                if matches!(event, AppEvent::RetryLoad) {
                    handle_retry(&state, &mut loading, &app_to_ui_tx).await?;
                    continue;
                }

                if handle_events(&mut ctx, &app_to_ui_tx, event).await?.is_break() {
                    break;
                }
            }
            query = ctx.debouncer.settled() => {
                handle_settled_query(&mut ctx, query, &app_to_ui_tx).await?;
            }
            result = wait_for_load(&mut loading) => {
                loading = None;
                handle_load_result(&state, &mut ctx, result, &app_to_ui_tx).await?;
            }
        }
    }

    Ok(())
}

async fn handle_events(
    ctx: &mut LookupContext,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    match event {
        AppEvent::QueryInput(text) => {
            handle_query_input(ctx, text);
        }
        AppEvent::ClearQuery => {
            handle_clear_query(ctx, app_to_ui_tx).await?;
        }
        AppEvent::SelectResult(index) => {
            handle_select_result(ctx, index, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(event) => {
            // help and notices are rendered by the UI
            app_to_ui_tx.send(AppEvent::UiEvent(event)).await?;
        }
        AppEvent::Quit => return Ok(ControlFlow::Break(())),
        AppEvent::RetryLoad => {}
        AppEvent::ShowResults { .. } | AppEvent::ShowDetail(_) | AppEvent::LoadStatusUpdate(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(ControlFlow::Continue(()))
}

async fn handle_retry(
    state: &AppState,
    loading: &mut Option<LoadHandle>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let notice = if loading.is_some() {
        Some("Dictionary is still loading")
    } else if state.status.is_ready().await {
        Some("Dictionary is already loaded")
    } else {
        None
    };

    match notice {
        Some(notice) => {
            tracing::debug!("Retry ignored: {}", notice);
            app_to_ui_tx
                .send(AppEvent::UiEvent(UiEvent::Message(notice.to_string())))
                .await?;
        }
        None => {
            tracing::info!("Retrying dictionary load");
            *loading = Some(start_load(state, app_to_ui_tx).await?);
        }
    }

    Ok(())
}

/// Finish in-flight work before quitting: wait for the load, then run the
/// pending query right away.
async fn drain(
    state: &AppState,
    ctx: &mut LookupContext,
    loading: &mut Option<LoadHandle>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if loading.is_some() {
        let result = wait_for_load(loading).await;
        *loading = None;
        handle_load_result(state, ctx, result, app_to_ui_tx).await?;
    }

    if let Some(query) = ctx.debouncer.cancel() {
        handle_settled_query(ctx, query, app_to_ui_tx).await?;
    }

    Ok(())
}
