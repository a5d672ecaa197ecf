use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::config::PatchConfig;
use crate::patch::{PATCHES, PatchError, PatchOutcome, SourcePatch, apply_to_file};
use crate::utils::dir_scan::find_targets;

/// Something worth telling the user about during a patch run.
///
/// Already-patched files and missing targets produce no event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyEvent {
    Patched {
        patch: &'static SourcePatch,
        file: PathBuf,
    },
    TargetNotFound {
        patch: &'static SourcePatch,
        file: PathBuf,
    },
    Failed(PatchError),
}

impl ApplyEvent {
    pub fn is_warning(&self) -> bool {
        !matches!(self, ApplyEvent::Patched { .. })
    }
}

impl fmt::Display for ApplyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyEvent::Patched { patch, file } => f.write_str(&patch.patched_message(file)),
            ApplyEvent::TargetNotFound { patch, file } => {
                f.write_str(&patch.anchor_missing_message(file))
            }
            ApplyEvent::Failed(e) => write!(f, "WARNING: {}", e),
        }
    }
}

/// Counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// `jpeg.inl` files found
    pub targets: usize,
    /// Patches applied during this run
    pub patched: usize,
    /// Patches whose marker was already present
    pub already_patched: usize,
    /// Anchor misses and I/O failures
    pub warnings: usize,
}

/// Patch every JPEGDEC copy in the project's dependency cache.
///
/// Workflow:
/// 1. Return immediately if `.pio/libdeps` does not exist
/// 2. Find `JPEGDEC/src/jpeg.inl` in each environment directory
/// 3. Apply the AC table patch, then the MCU_SKIP patch, to each file
///
/// Never fails: problems are reported through `on_event` as warnings so the
/// build carries on.
pub fn run<F>(config: &PatchConfig, mut on_event: F) -> ApplySummary
where
    F: FnMut(ApplyEvent),
{
    let mut summary = ApplySummary::default();

    let targets = match find_targets(config) {
        Ok(targets) => targets,
        Err(e) => {
            summary.warnings += 1;
            on_event(ApplyEvent::Failed(PatchError::ScanFailed {
                dir: config.libdeps_dir().display().to_string(),
                reason: e.to_string(),
            }));
            return summary;
        }
    };

    for target in targets {
        summary.targets += 1;

        for patch in PATCHES {
            match apply_to_file(patch, &target) {
                Ok(PatchOutcome::Applied { .. }) => {
                    summary.patched += 1;
                    on_event(ApplyEvent::Patched {
                        patch,
                        file: target.clone(),
                    });
                }
                Ok(PatchOutcome::AlreadyPatched) => {
                    summary.already_patched += 1;
                }
                Ok(PatchOutcome::AnchorNotFound) => {
                    summary.warnings += 1;
                    on_event(ApplyEvent::TargetNotFound {
                        patch,
                        file: target.clone(),
                    });
                }
                Err(e) => {
                    summary.warnings += 1;
                    on_event(ApplyEvent::Failed(e));
                }
            }
        }
    }

    debug!(?summary, "patch run finished");
    summary
}
