// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{Config, load_config, load_config_file};
use crate::core::classifier::Classifier;
use crate::core::ignore::Patterns;
use crate::core::report::{OutputFormat, render};
use crate::core::scanner::{ScanOptions, scan};
use crate::core::spelunk::{SpelunkOptions, SystemRunner, run_tools};

/// Tabulate files and lines per language under the current directory
#[derive(Parser, Debug, Default)]
#[command(name = "what", author, version, about, long_about = None)]
pub struct WhatArgs {
    /// List the directories holding each kind of code
    #[arg(short = 'w', long = "where")]
    pub r#where: bool,

    /// Directory name to leave out of the walk (repeatable)
    #[arg(short, long, value_name = "DIR")]
    pub exclude: Vec<String>,

    /// Only count files of this language, e.g. "Python"
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Print an HTML or LaTeX table instead of plain text
    #[arg(short, long, value_enum, ignore_case = true)]
    pub pretty: Option<Pretty>,

    /// Configuration file to use instead of the nearest .spelunk.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pretty {
    #[value(name = "HTML")]
    Html,
    #[value(name = "LaTeX")]
    Latex,
}

impl From<Pretty> for OutputFormat {
    fn from(pretty: Pretty) -> Self {
        match pretty {
            Pretty::Html => Self::Html,
            Pretty::Latex => Self::Latex,
        }
    }
}

/// Run the code indexing tools over the current directory
#[derive(Parser, Debug, Default)]
#[command(name = "code-spelunk", author, version, about, long_about = None)]
pub struct SpelunkArgs {
    /// Kernel code: do not use /usr/include with cscope
    #[arg(short, long)]
    pub kernel: bool,

    /// Build doxygen output
    #[arg(short, long)]
    pub doxygen: bool,

    /// Generate the cscope database
    #[arg(short, long)]
    pub cscope: bool,

    /// Build web pages with htags as well
    #[arg(short, long)]
    pub web: bool,

    /// Title to give to the web pages
    #[arg(short, long)]
    pub title: Option<String>,

    /// Configuration file to use instead of the nearest .spelunk.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` always takes precedence; `verbose` falls back to DEBUG,
/// otherwise WARN.
pub fn init_logging(verbose: bool) {
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), verbose);
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

/// Builds the filter from a `RUST_LOG` value, falling back to the verbosity
/// flag when the variable is unset, blank or unparsable.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

fn resolve_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_file(path),
        None => load_config(root),
    }
}

/// Scans `root` as `what` would and returns the rendered report.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, an ignore pattern
/// is invalid, or `root` cannot be read.
pub fn what_report(root: &Path, args: &WhatArgs) -> Result<String> {
    let config = resolve_config(root, args.config.as_deref())?;

    let classifier = Classifier::with_extensions(config.what.extensions);
    let mut exclude_dirs = args.exclude.clone();
    exclude_dirs.extend(config.what.exclude);

    let options = ScanOptions {
        exclude_dirs,
        language: args.language.clone(),
        ignore: Patterns::from_globs(&config.what.ignore)?,
    };

    let report = scan(root, &options, &classifier)
        .with_context(|| format!("Failed to scan directory: {}", root.display()))?;

    let format = args.pretty.map(OutputFormat::from).unwrap_or_default();
    Ok(render(&report, format, args.r#where))
}

/// Entry point of the `what` binary. The walk always starts in the current
/// directory.
///
/// # Errors
///
/// See [`what_report`].
pub fn run_what(args: &WhatArgs) -> Result<()> {
    let report = what_report(Path::new("."), args)?;
    print!("{report}");
    Ok(())
}

/// Entry point of the `code-spelunk` binary.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or any tool in the
/// sequence fails.
pub fn run_spelunk(args: SpelunkArgs) -> Result<()> {
    let root = Path::new(".");
    let config = resolve_config(root, args.config.as_deref())?;

    let options = SpelunkOptions {
        kernel: args.kernel,
        doxygen: args.doxygen,
        cscope: args.cscope,
        web: args.web,
        title: args.title,
    };

    let mut runner = SystemRunner::new(root);
    run_tools(root, &options, &config.tools, &mut runner, &mut io::stdout().lock())?;
    Ok(())
}
