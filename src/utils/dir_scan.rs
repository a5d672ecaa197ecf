use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::PatchConfig;

/// List all subdirectories (not files) of a directory, sorted by name.
/// Symlinks to directories are included.
pub fn list_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Find every `jpeg.inl` below the dependency cache.
///
/// Returns an empty list when the cache directory does not exist yet.
/// Environments without JPEGDEC are skipped.
pub fn find_targets(config: &PatchConfig) -> io::Result<Vec<PathBuf>> {
    let libdeps_dir = config.libdeps_dir();
    if !libdeps_dir.is_dir() {
        debug!(dir = %libdeps_dir.display(), "no dependency cache");
        return Ok(Vec::new());
    }

    let mut targets = Vec::new();
    for env_dir in list_dirs(&libdeps_dir)? {
        let target = PatchConfig::target_file(&env_dir);
        if target.is_file() {
            targets.push(target);
        } else {
            debug!(env = %env_dir.display(), "JPEGDEC not installed");
        }
    }

    Ok(targets)
}
