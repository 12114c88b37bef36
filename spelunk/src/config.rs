// src/config.rs
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod loader;

/// File name looked up in the working directory and its parents.
pub const CONFIG_FILE_NAME: &str = ".spelunk.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub what: WhatConfig,
    pub tools: ToolPaths,
}

/// Settings for the statistics scan.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WhatConfig {
    /// Directory names always pruned, in addition to `--exclude`.
    pub exclude: Vec<String>,
    /// Glob patterns for files to leave out of the counts.
    pub ignore: Vec<String>,
    /// Extra extension to category mappings layered over the built-in table.
    pub extensions: BTreeMap<String, String>,
}

/// Executables used by `code-spelunk`. Bare names are resolved through `PATH`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolPaths {
    pub cscope: PathBuf,
    pub gtags: PathBuf,
    pub htags: PathBuf,
    pub doxygen: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            cscope: PathBuf::from("cscope"),
            gtags: PathBuf::from("gtags"),
            htags: PathBuf::from("htags"),
            doxygen: PathBuf::from("doxygen"),
        }
    }
}

pub use loader::{load_config, load_config_file};
