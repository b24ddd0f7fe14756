pub mod config;

use config::Config;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::{error, info};

/// Reads the toml config at `filepath`. Missing keys fall back to the built in defaults.
pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<Config> {
    let filepath = filepath.as_ref();
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read config file {}", filepath.display()))?;
    info!("loading file, {}: {} bytes", filepath.display(), read_count);

    let config: Config = toml::from_str(&input).map_err(|e| {
        error!("encountered error when parsing config file: {}", e);
        e
    })?;
    Ok(config)
}
