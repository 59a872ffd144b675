use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use kosh_config::Config;

const DEFAULT_CONFIG_FILE: &str = "config.json";

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}

/// Explicit config file, else `config.json` in the working directory if present,
/// else environment defaults. Any field a file leaves out, in a present or a
/// missing section, falls back to its environment variable, then its default.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return load_config_file(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return load_config_file(default_path);
    }

    tracing::debug!("No config file, using environment defaults");
    Ok(Config::new())
}
