use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod status;
pub mod ui;


use self::args::Args;
use self::controller::AppController;
use self::state::AppState;

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout belongs to the UI
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.log_filter());

    let mut config = profile::load_config(args.config.as_deref())?;
    args.apply(&mut config);

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let interactive = atty::is(atty::Stream::Stdin);
    tracing::info!(
        "Starting kosh (source: {}, interactive: {})",
        config.source.location,
        interactive
    );

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state).await;

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    controller.run(shutdown, interactive).await
}
