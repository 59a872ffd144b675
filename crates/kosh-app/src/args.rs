use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};
use kosh_config::Config;

/// Prefix lookup for a headword dictionary
#[derive(Debug, Parser)]
#[command(name = "kosh", version)]
pub struct Args {
    /// Dictionary file path or http(s) URL
    #[arg(short, long)]
    pub source: Option<String>,

    /// JSON config file
    #[arg(short, long, env = "KOSH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Delay after the last keystroke before searching
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Number of results to show (1-10)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..=10))]
    pub max_results: Option<usize>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Command line values win over file and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.source.location = source.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
        if let Some(max_results) = self.max_results {
            config.search.max_results = max_results;
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
