// src/discover/walk.rs
// =============================================================================
// Finds manifest files under a root directory.
//
// How it works:
// 1. Check the root exists and is a directory (otherwise the run can't start)
// 2. Walk it recursively with walkdir
// 3. Keep files (or links to files) whose extension is in the allowed list
// 4. Return the paths, sorted, as a plain Vec
//
// A path we can't read while walking (permissions, a dangling symlink, a file
// removed mid-walk) is logged and skipped; the walk carries on.
// =============================================================================

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::CheckError;

// Extensions a manifest may have when nothing else is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["yml", "yaml"];

// Collects every manifest file under `root`
//
// Parameters:
//   root: directory to walk
//   extensions: accepted extensions, without the dot, compared ignoring case
//
// Returns: manifest paths sorted for stable output, or an error if `root`
// isn't a directory we can walk
pub fn find_manifests(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, CheckError> {
    if !root.exists() {
        return Err(CheckError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CheckError::RootNotDirectory(root.to_path_buf()));
    }

    let mut manifests = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable path: {}", e);
                continue;
            }
        };

        if !has_manifest_extension(entry.path(), extensions) {
            continue;
        }

        // walkdir doesn't follow links, so a symlink's own file type is never
        // "file". Look through it: reading the path later follows it too.
        if entry.path_is_symlink() {
            if !entry.path().is_file() {
                warn!(path = %entry.path().display(), "skipping link that doesn't point to a file");
                continue;
            }
        } else if !entry.file_type().is_file() {
            continue;
        }

        debug!(path = %entry.path().display(), "found manifest");
        manifests.push(entry.into_path());
    }

    manifests.sort();
    Ok(manifests)
}

fn has_manifest_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}
