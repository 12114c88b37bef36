// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;

pub use crate::config::{Config, ToolPaths, WhatConfig, load_config, load_config_file};
pub use crate::core::classifier::{Classifier, DEFAULT_EXTENSIONS, UNKNOWN};
pub use crate::core::ignore::Patterns;
pub use crate::core::report::{OutputFormat, Row, render, rows};
pub use crate::core::scanner::{ScanOptions, scan};
pub use crate::core::spelunk::{
    CommandRunner, Invocation, SpelunkError, SpelunkOptions, Step, SystemRunner, plan, run_tools,
};
pub use crate::models::{ScanReport, Totals};
