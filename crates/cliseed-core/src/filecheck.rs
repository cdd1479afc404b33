//! File non-emptiness check.

use std::fs;
use std::path::Path;

/// Return `true` if `path` is an existing regular file with at least one byte.
///
/// Symlinks are followed. Missing paths, directories, and paths that cannot
/// be stat'ed all yield `false`.
pub fn is_non_empty_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.len() > 0,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "stat failed");
            false
        }
    }
}
