// src/core/ignore.rs
use anyhow::{Context as _, Result};
use glob::{MatchOptions, Pattern};
use std::path::Path;

/// Glob patterns naming files that a scan should pretend are not there.
#[derive(Debug, Default, Clone)]
pub struct Patterns {
    /// Each pattern is tried against the path relative to the scan root and
    /// against the bare file name.
    patterns: Vec<Pattern>,
}

impl Patterns {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compiles every entry of `patterns`. Blank entries and `#` comments are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern with invalid glob syntax.
    pub fn from_globs<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut compiled = Self::new();
        for pattern in patterns {
            compiled.add_pattern(pattern.as_ref())?;
        }
        Ok(compiled)
    }

    /// Adds one glob pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not valid glob syntax.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }
        let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
        let compiled =
            Pattern::new(pattern).with_context(|| format!("Invalid ignore pattern: {pattern}"))?;
        self.patterns.push(compiled);
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Tests `relative`, a path below the scan root, against every pattern.
    #[must_use]
    pub fn matches(&self, relative: impl AsRef<Path>) -> bool {
        let relative = relative.as_ref();
        let relative = relative.strip_prefix(".").unwrap_or(relative);
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        self.patterns.iter().any(|pattern| {
            pattern.matches_path_with(relative, options)
                || relative
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| pattern.matches_with(name, options))
        })
    }
}
