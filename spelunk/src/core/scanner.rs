// src/core/scanner.rs
use crate::core::classifier::{Classifier, UNKNOWN};
use crate::core::ignore::Patterns;
use crate::models::ScanReport;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub mod lines;
pub mod utils;

use lines::count_file_lines;
use utils::{is_countable_file, parent_display, should_exclude};

/// What a scan should look at.
#[derive(Debug, Default, Clone)]
pub struct ScanOptions {
    /// Directory names pruned from the walk, on top of `CVS`.
    pub exclude_dirs: Vec<String>,
    /// When set, only files of this exact category are counted.
    pub language: Option<String>,
    /// Files matching these patterns are treated as absent.
    pub ignore: Patterns,
}

/// Walks the tree under `root` and tabulates files and lines per category.
///
/// Excluded directories are pruned before they are entered. Every remaining
/// file is classified, counted, and has its lines added to its category.
/// Files that can't be opened still count as files but add no lines and no
/// location; unreadable content counts as zero lines. Unknown files are kept
/// out of the location index and the directory tally.
///
/// # Arguments
///
/// * `root` - The directory to walk
/// * `options` - Exclusions, language filter and ignore patterns
/// * `classifier` - Maps each file to its category
///
/// # Returns
///
/// * `Ok(ScanReport)` - The per-category counts and locations
///
/// # Errors
///
/// This function returns an error only if `root` itself cannot be read.
/// Entries that vanish or cannot be read during the walk are skipped.
pub fn scan(root: &Path, options: &ScanOptions, classifier: &Classifier) -> Result<ScanReport> {
    fs::read_dir(root)
        .with_context(|| format!("Failed to read directory: {}", root.display()))?;

    let mut report = ScanReport::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, &options.exclude_dirs))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !is_countable_file(&entry) {
            continue;
        }

        let path = entry.path();
        if !options.ignore.is_empty() {
            let relative = path.strip_prefix(root).unwrap_or(path);
            if options.ignore.matches(relative) {
                debug!(path = %path.display(), "ignored by pattern");
                continue;
            }
        }

        let category = classifier.classify(path);
        if options
            .language
            .as_deref()
            .is_some_and(|language| language != category)
        {
            continue;
        }

        report.record_file(category);

        let Some(lines) = count_file_lines(path) else {
            continue;
        };
        report.record_lines(category, lines);

        if category != UNKNOWN {
            report.record_location(category, &parent_display(path));
        }
    }

    let identified = report.identified();
    info!(
        root = %root.display(),
        files = identified.files,
        lines = identified.lines,
        "scan complete"
    );

    Ok(report)
}
