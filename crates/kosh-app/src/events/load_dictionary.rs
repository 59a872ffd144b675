use std::sync::Arc;

use kanal::AsyncSender;
use kosh_config::search::SearchConfig;
use kosh_core::{Dictionary, LoadError, PrefixDictionary, SearchOptions};
use kosh_loader::{DictionaryLoader, LoadOptions};
use kosh_types::{AppEvent, LoadStatus};
use tokio::task::JoinHandle;

use super::LookupContext;
use super::query_input::handle_settled_query;
use crate::state::AppState;

pub type LoadHandle = JoinHandle<Result<PrefixDictionary, LoadError>>;

pub fn search_options(config: &SearchConfig) -> SearchOptions {
    let requested = SearchOptions {
        max_results: config.max_results,
        max_prefix_len: config.max_prefix_len,
        unicode_normalize: config.unicode_normalize,
    };
    let options = requested.clamped();
    if options.max_results != requested.max_results {
        tracing::warn!(
            "search.max_results {} is out of range, using {}",
            requested.max_results,
            options.max_results
        );
    }
    if options.max_prefix_len != requested.max_prefix_len {
        tracing::warn!(
            "search.max_prefix_len {} is out of range, using {}",
            requested.max_prefix_len,
            options.max_prefix_len
        );
    }
    options
}

/// Spawn the one-time fetch + index build
pub async fn start_load(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<LoadHandle> {
    let (location, options, search) = {
        let config = state.config.read().await;
        (
            config.source.location.clone(),
            LoadOptions::from(&config.source),
            search_options(&config.search),
        )
    };

    let status = LoadStatus::Loading {
        source: location.clone(),
        attempt: 1,
    };
    state.status.record(&status).await;
    app_to_ui_tx.send(AppEvent::LoadStatusUpdate(status)).await?;

    let tx = app_to_ui_tx.clone();
    Ok(tokio::spawn(async move {
        let loader = DictionaryLoader::from_location(&location, options, search)?;
        let source = loader.describe();

        loader
            .load_with_progress(|attempt| {
                // first attempt was already announced
                if attempt > 1 {
                    let status = LoadStatus::Loading {
                        source: source.clone(),
                        attempt,
                    };
                    if !matches!(tx.try_send(AppEvent::LoadStatusUpdate(status)), Ok(true)) {
                        tracing::warn!("Could not report load attempt {}", attempt);
                    }
                }
            })
            .await
    }))
}

/// Resolves when the load task finishes; never while nothing is loading
pub async fn wait_for_load(
    loading: &mut Option<LoadHandle>,
) -> Result<PrefixDictionary, LoadError> {
    match loading {
        Some(handle) => match handle.await {
            Ok(result) => result,
            Err(e) => Err(LoadError::Io(std::io::Error::other(e))),
        },
        None => std::future::pending().await,
    }
}

pub async fn handle_load_result(
    state: &AppState,
    ctx: &mut LookupContext,
    result: Result<PrefixDictionary, LoadError>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let status = match result {
        Ok(dictionary) => {
            let metadata = dictionary.metadata();
            tracing::info!(
                "Dictionary '{}' ready: {} entries, {} skipped",
                metadata.name,
                metadata.entry_count,
                metadata.skipped
            );
            ctx.dictionary = Arc::new(dictionary);

            LoadStatus::Ready {
                name: metadata.name,
                entry_count: metadata.entry_count,
                skipped: metadata.skipped,
            }
        }
        Err(e) => {
            // searches keep answering with the empty dictionary
            tracing::error!("Dictionary load failed: {}", e);
            LoadStatus::Failed {
                message: e.to_string(),
            }
        }
    };

    let ready = status.is_ready();
    state.status.record(&status).await;
    app_to_ui_tx.send(AppEvent::LoadStatusUpdate(status)).await?;

    // a query typed while loading gets answered now
    if ready && ctx.session.has_query() && !ctx.debouncer.is_pending() {
        let query = ctx.session.query().to_string();
        handle_settled_query(ctx, query, app_to_ui_tx).await?;
    }

    Ok(())
}
