//! Executable search inside an extracted tree
//!
//! Release bundles nest the executable under a versioned top-level folder
//! whose name changes between builds, so the location is discovered by
//! walking the tree rather than assumed.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find `executable_name` anywhere below `root`
///
/// Depth-first, entries sorted by file name so results are deterministic.
/// A match whose parent directory is named `bin` ends the walk immediately;
/// otherwise the whole tree is visited and the first match in walk order is
/// returned. Unreadable entries are skipped. Returns an absolute path, or
/// `None` when nothing matches.
pub fn find_executable(root: &Path, executable_name: &str) -> Option<PathBuf> {
    let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let mut first_match: Option<PathBuf> = None;

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry during search: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.file_name() != executable_name {
            continue;
        }

        if is_in_bin_dir(entry.path()) {
            debug!("Found {} in bin directory", entry.path().display());
            return Some(entry.into_path());
        }

        if first_match.is_none() {
            debug!("Found {} outside a bin directory, continuing", entry.path().display());
            first_match = Some(entry.into_path());
        }
    }

    first_match
}

fn is_in_bin_dir(path: &Path) -> bool {
    path.parent()
        .and_then(Path::file_name)
        .is_some_and(|name| name == "bin")
}
