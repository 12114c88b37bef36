// src/core/scanner/utils.rs
use std::fs;
use std::path::Path;

/// Legacy version-control directory that is never descended into.
pub const VCS_DIR: &str = "CVS";

/// Determines if a directory entry should be pruned from the walk.
///
/// Only directories below the root are pruned: anything named [`VCS_DIR`] or
/// listed in `exclude_dirs`. Files are never pruned here, even when their
/// name matches.
pub fn should_exclude(entry: &walkdir::DirEntry, exclude_dirs: &[String]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name == VCS_DIR || exclude_dirs.iter().any(|dir| dir == name))
}

/// Checks whether an entry is a regular file that should be counted.
///
/// The entry must still exist when it is visited. Symbolic links are
/// resolved and must point at a regular file. Pipes, sockets and device
/// nodes are never opened.
pub fn is_countable_file(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file());
    }
    file_type.is_file() && entry.path().try_exists().unwrap_or(false)
}

/// Renders the directory that holds `path` the way location reports show it.
pub fn parent_display(path: &Path) -> String {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| String::from("."), |parent| parent.display().to_string())
}
