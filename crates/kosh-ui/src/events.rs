use kosh_config::ui::UiConfig;
use kosh_types::{AppEvent, UiEvent};

use crate::render::{render_detail, render_help, render_results, render_status};
use crate::state::UiState;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct UiOutput {
    pub text: String,
    pub quit: bool,
}

impl UiOutput {
    fn text(text: String) -> Self {
        Self { text, quit: false }
    }
}

/// Apply an app event to the UI state and return what to print
pub fn handle_events(event: AppEvent, state: &mut UiState, config: &UiConfig) -> UiOutput {
    match event {
        AppEvent::LoadStatusUpdate(status) => {
            tracing::debug!("[UI] Load status: {:?}", status);
            UiOutput::text(render_status(&status))
        }
        AppEvent::ShowResults { query, results } => {
            tracing::debug!("[UI] Showing {} results for '{}'", results.len(), query);
            UiOutput::text(render_results(&query, &results, config))
        }
        AppEvent::ShowDetail(Some(entry)) => {
            tracing::debug!("[UI] Detail for entry {}", entry.position);
            let text = render_detail(&entry);
            state.detail = Some(entry);
            UiOutput::text(text)
        }
        AppEvent::ShowDetail(None) => {
            let had_detail = state.detail.take().is_some();
            if had_detail {
                UiOutput::text("(selection cleared)\n".to_string())
            } else {
                UiOutput::default()
            }
        }
        AppEvent::UiEvent(UiEvent::ShowHelp) => UiOutput::text(render_help()),
        AppEvent::UiEvent(UiEvent::Message(message)) => UiOutput::text(format!("{message}\n")),
        AppEvent::Quit => UiOutput {
            text: String::new(),
            quit: true,
        },
        // input events travel the other way
        AppEvent::QueryInput(_)
        | AppEvent::ClearQuery
        | AppEvent::SelectResult(_)
        | AppEvent::RetryLoad => UiOutput::default(),
    }
}

#[cfg(test)]
mod tests {
    use kosh_types::{DisplayResult, LoadStatus};

    use super::*;

    fn entry(position: usize, headword: &str) -> DisplayResult {
        DisplayResult {
            position,
            headword: headword.to_string(),
            romanization: None,
            definition: String::new(),
            entry_type: String::new(),
            source: String::new(),
        }
    }

    #[test]
    fn results_are_listed() {
        let mut state = UiState::new();
        let out = handle_events(
            AppEvent::ShowResults {
                query: "आ".into(),
                results: vec![entry(0, "आई")],
            },
            &mut state,
            &UiConfig::default(),
        );

        assert_eq!(out.text, " 1. आई\n");
        assert!(state.detail.is_none());
    }

    #[test]
    fn clearing_detail_is_reported_once() {
        let mut state = UiState::new();
        let config = UiConfig::default();

        handle_events(AppEvent::ShowDetail(Some(entry(3, "घर"))), &mut state, &config);
        assert!(state.detail.is_some());

        let first = handle_events(AppEvent::ShowDetail(None), &mut state, &config);
        assert!(!first.text.is_empty());
        let second = handle_events(AppEvent::ShowDetail(None), &mut state, &config);
        assert_eq!(second, UiOutput::default());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut state = UiState::new();
        let out = handle_events(AppEvent::Quit, &mut state, &UiConfig::default());
        assert!(out.quit);
    }

    #[test]
    fn failed_status_is_printed() {
        let mut state = UiState::new();
        let out = handle_events(
            AppEvent::LoadStatusUpdate(LoadStatus::Failed {
                message: "boom".into(),
            }),
            &mut state,
            &UiConfig::default(),
        );

        assert!(out.text.contains("boom"));
        assert!(!out.quit);
    }
}
