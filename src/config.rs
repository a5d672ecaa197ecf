use std::path::{Path, PathBuf};

use crate::patch::{LIBDEPS_DIR, TARGET_FILE};

/// Inputs for one patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchConfig {
    /// Root of the PlatformIO project (the directory holding `platformio.ini`)
    pub project_dir: PathBuf,
}

impl PatchConfig {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        PatchConfig {
            project_dir: project_dir.into(),
        }
    }

    /// `<project>/.pio/libdeps`, one subdirectory per build environment.
    pub fn libdeps_dir(&self) -> PathBuf {
        LIBDEPS_DIR
            .iter()
            .fold(self.project_dir.clone(), |path, part| path.join(part))
    }

    /// Location of `jpeg.inl` inside one environment directory.
    pub fn target_file(env_dir: &Path) -> PathBuf {
        TARGET_FILE
            .iter()
            .fold(env_dir.to_path_buf(), |path, part| path.join(part))
    }
}
