// src/core/classifier.rs
use std::collections::HashMap;
use std::path::Path;

/// Category given to files whose name does not identify a language.
pub const UNKNOWN: &str = "Unknown";

/// Built-in extension table. Keys are matched case-sensitively and carry no
/// leading dot.
pub const DEFAULT_EXTENSIONS: &[(&str, &str)] = &[
    ("awk", "AWK"),
    ("py", "Python"),
    ("pyl", "Python"),
    ("el", "Emacs Lisp"),
    ("elc", "Emacs Lisp"),
    ("h", "C or C++ Header Files"),
    ("c", "C"),
    ("cc", "C++"),
    ("cpp", "C++"),
    ("c++", "C++"),
    ("m", "Objective C"),
    ("tcl", "TCL"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("java", "Java"),
    ("idl", "Interface Definition Language"),
    ("xml", "XML"),
    ("xsl", "XML"),
    ("php", "PHP"),
    ("inc", "PHP include"),
    ("sh", "Shell Script"),
    ("ksh", "Shell Script"),
    ("bash", "Shell Script"),
    ("csh", "Shell Script"),
    ("tcsh", "Shell Script"),
    ("mk", "Makefile"),
    ("am", "Automake"),
    ("m4", "M4"),
];

/// Extensionless file names that still identify a category.
const SPECIAL_NAMES: &[(&str, &str)] = &[("Makefile", "Makefile"), ("configure", "Autoconf")];

/// Maps file names to language categories using an extension table.
#[derive(Debug, Clone)]
pub struct Classifier {
    extensions: HashMap<String, String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Creates a classifier backed by [`DEFAULT_EXTENSIONS`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS
                .iter()
                .map(|&(ext, category)| (ext.to_owned(), category.to_owned()))
                .collect(),
        }
    }

    /// Returns a classifier whose table is the built-in one overlaid with
    /// `extra`. Entries in `extra` replace built-in entries with the same key.
    #[must_use]
    pub fn with_extensions<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut classifier = Self::new();
        for (ext, category) in extra {
            let ext: String = ext.into();
            let ext = ext.strip_prefix('.').map_or_else(|| ext.clone(), str::to_owned);
            classifier.extensions.insert(ext, category.into());
        }
        classifier
    }

    /// Classifies `path` by its file name.
    ///
    /// Only the final component is inspected. A name without an extension is
    /// `Makefile`, `Autoconf` or [`UNKNOWN`]; a name with an extension maps
    /// through the table, falling back to [`UNKNOWN`].
    #[must_use]
    pub fn classify(&self, path: &Path) -> &str {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        match split_extension(&name) {
            None => SPECIAL_NAMES
                .iter()
                .find(|&&(special, _)| special == name)
                .map_or(UNKNOWN, |&(_, category)| category),
            Some(ext) => self.extensions.get(ext).map_or(UNKNOWN, String::as_str),
        }
    }
}

/// Splits off the text after the last dot of `name`. Leading dots belong to
/// the stem, so `.profile` has no extension.
fn split_extension(name: &str) -> Option<&str> {
    let stem_start = name.len().saturating_sub(name.trim_start_matches('.').len());
    let rest = name.get(stem_start..)?;
    rest.rfind('.')
        .and_then(|dot| rest.get(dot.saturating_add(1)..))
}
