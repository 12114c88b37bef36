// src/models/scan_report.rs
use crate::core::classifier::UNKNOWN;
use std::collections::BTreeMap;

/// Aggregates collected by a single tree walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of files seen per category.
    pub files: BTreeMap<String, u64>,
    /// Summed line counts per category.
    pub lines: BTreeMap<String, u64>,
    /// Per category, the directories holding files of that category and how
    /// many files each one holds.
    pub locations: BTreeMap<String, BTreeMap<String, u64>>,
    /// Incremented on every location update, so a directory holding two
    /// files is counted twice.
    pub directory_tally: u64,
}

/// A pair of file and line totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub files: u64,
    pub lines: u64,
}

impl Totals {
    #[must_use]
    pub const fn new(files: u64, lines: u64) -> Self {
        Self { files, lines }
    }

    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self {
            files: self.files.saturating_add(other.files),
            lines: self.lines.saturating_add(other.lines),
        }
    }
}

impl ScanReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            lines: BTreeMap::new(),
            locations: BTreeMap::new(),
            directory_tally: 0,
        }
    }

    pub fn record_file(&mut self, category: &str) {
        let count = self.files.entry(category.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn record_lines(&mut self, category: &str, lines: u64) {
        let total = self.lines.entry(category.to_owned()).or_insert(0);
        *total = total.saturating_add(lines);
    }

    /// Records one file of `category` found in `dir`. Unknown files are not
    /// tracked by location.
    pub fn record_location(&mut self, category: &str, dir: &str) {
        if category == UNKNOWN {
            return;
        }
        let count = self
            .locations
            .entry(category.to_owned())
            .or_default()
            .entry(dir.to_owned())
            .or_insert(0);
        *count = count.saturating_add(1);
        self.directory_tally = self.directory_tally.saturating_add(1);
    }

    /// File and line totals for `category`, zero when it was never seen.
    #[must_use]
    pub fn totals_for(&self, category: &str) -> Totals {
        Totals::new(
            self.files.get(category).copied().unwrap_or(0),
            self.lines.get(category).copied().unwrap_or(0),
        )
    }

    /// Totals over every category except Unknown.
    #[must_use]
    pub fn identified(&self) -> Totals {
        self.files
            .keys()
            .filter(|category| category.as_str() != UNKNOWN)
            .fold(Totals::default(), |acc, category| {
                acc.plus(self.totals_for(category))
            })
    }

    /// Totals for Unknown, if any unknown file was seen.
    #[must_use]
    pub fn unknown(&self) -> Option<Totals> {
        self.files
            .contains_key(UNKNOWN)
            .then(|| self.totals_for(UNKNOWN))
    }

    /// Identified totals plus Unknown totals when present.
    #[must_use]
    pub fn grand_total(&self) -> Totals {
        self.unknown()
            .map_or_else(|| self.identified(), |unknown| self.identified().plus(unknown))
    }
}
