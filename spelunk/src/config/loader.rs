// src/config/loader.rs
use crate::config::{CONFIG_FILE_NAME, Config};
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loads the configuration from the nearest `.spelunk.toml`, starting in
/// `dir` and checking each parent directory until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for a configuration file
///
/// # Returns
///
/// * `Ok(Config)` - The parsed configuration, or the defaults when no file exists
///
/// # Errors
///
/// This function may return an error if:
/// * A configuration file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let start = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(dir)
    };

    let mut current_dir = start;
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return load_config_file(&config_file);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    debug!("no {CONFIG_FILE_NAME} found, using defaults");
    Ok(Config::default())
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
#[inline]
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
