//! Upward search for `.apibuilder/config`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::paths;
use crate::domain::{AppError, DiscoveryStop};
use crate::ports::ConfigFilesystem;

/// Find the nearest `.apibuilder/config` at or above `start_dir`.
///
/// The search is bounded by the enclosing git repository: every directory
/// from `start_dir` up to the one holding `.git` is checked. Outside a
/// repository only `start_dir` itself is checked. `.` and `..` segments in
/// `start_dir` are resolved before walking.
pub fn discover_config_file<F: ConfigFilesystem>(
    start_dir: &Path,
    fs: &F,
) -> Result<PathBuf, AppError> {
    let start_dir = paths::normalize(start_dir);
    let start_dir = start_dir.as_path();
    let (boundary, reason) = match find_repository_root(start_dir, fs) {
        Some(root) => (root, DiscoveryStop::RepositoryRoot),
        None => (start_dir.to_path_buf(), DiscoveryStop::NoRepository),
    };

    for dir in start_dir.ancestors() {
        let candidate = paths::config_file(dir);
        debug!(dir = %dir.display(), "checking for config");
        if fs.is_file(&candidate) {
            debug!(path = %candidate.display(), "found config");
            return Ok(candidate);
        }
        if dir == boundary {
            break;
        }
    }

    Err(AppError::DiscoveryExhausted {
        start: start_dir.to_path_buf(),
        stopped_at: boundary,
        reason,
    })
}

/// Nearest directory at or above `start_dir` containing a `.git` entry.
pub fn find_repository_root<F: ConfigFilesystem>(start_dir: &Path, fs: &F) -> Option<PathBuf> {
    start_dir.ancestors().find(|dir| fs.exists(&paths::git_marker(dir))).map(Path::to_path_buf)
}
