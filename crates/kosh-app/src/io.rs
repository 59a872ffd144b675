use std::io::BufRead;

use kanal::{AsyncSender, Sender};
use kosh_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

/// Turn one input line into an event. Plain text is a new search box value;
/// lines starting with `:` are commands, `::` escapes a literal colon.
pub fn parse_command(line: &str) -> AppEvent {
    if line.starts_with("::") {
        return AppEvent::QueryInput(line[1..].to_string());
    }

    let Some(command) = line.strip_prefix(':') else {
        return AppEvent::QueryInput(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("q" | "quit" | "exit", _) => AppEvent::Quit,
        ("c" | "clear", _) => AppEvent::ClearQuery,
        ("r" | "retry", _) => AppEvent::RetryLoad,
        ("h" | "help" | "?", _) => AppEvent::UiEvent(UiEvent::ShowHelp),
        ("s" | "select", Some(n)) => select(n),
        (n, None) if n.chars().all(|c| c.is_ascii_digit()) && !n.is_empty() => select(n),
        _ => AppEvent::UiEvent(UiEvent::Message(format!(
            "Unknown command ':{}', type :help",
            command.trim()
        ))),
    }
}

fn select(number: &str) -> AppEvent {
    match number.parse::<usize>() {
        Ok(n) if n >= 1 => AppEvent::SelectResult(n - 1),
        _ => AppEvent::UiEvent(UiEvent::Message(
            "Results are numbered from 1".to_string(),
        )),
    }
}

/// Blocking line reader; sends `Quit` on `:quit` or end of input
pub fn read_lines<R: BufRead>(reader: R, event_tx: &Sender<AppEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        let event = parse_command(line.trim_end_matches('\r'));
        let quit = matches!(event, AppEvent::Quit);

        if let Err(e) = event_tx.send(event) {
            tracing::warn!("App stopped listening: {}", e);
            return;
        }
        if quit {
            return;
        }
    }

    tracing::debug!("End of input");
    let _ = event_tx.send(AppEvent::Quit);
}

/// Watcher for stdin
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (done_tx, done_rx) = tokio::sync::oneshot::channel::<()>();
    let tx = event_tx.to_sync();

    // Plain thread: a blocked stdin read must not hold up runtime shutdown
    std::thread::Builder::new()
        .name("kosh-stdin".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            read_lines(stdin.lock(), &tx);
            let _ = done_tx.send(());
        })?;

    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::info!("Input watcher stopping");
        }
        _ = done_rx => {
            tracing::info!("Input closed");
        }
    }

    Ok(())
}
