use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::PatchConfig;
use crate::patch::{PATCHES, PatchError, PatchState, SourcePatch};
use crate::utils::dir_scan::find_targets;
use crate::utils::hash::content_hash;

/// Read-only view of one `jpeg.inl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStatus {
    pub file: PathBuf,
    pub state: TargetState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetState {
    Read {
        hash: String,
        patches: Vec<(&'static SourcePatch, PatchState)>,
    },
    Unreadable(PatchError),
}

/// Report which patches each JPEGDEC copy carries, without writing anything.
pub fn run(config: &PatchConfig) -> io::Result<Vec<TargetStatus>> {
    let mut statuses = Vec::new();

    for file in find_targets(config)? {
        let state = match read_text(&file) {
            Ok((hash, content)) => TargetState::Read {
                hash,
                patches: PATCHES
                    .iter()
                    .map(|patch| (patch, patch.state(&content)))
                    .collect(),
            },
            Err(e) => TargetState::Unreadable(e),
        };
        statuses.push(TargetStatus { file, state });
    }

    Ok(statuses)
}

fn read_text(file: &Path) -> Result<(String, String), PatchError> {
    let data = fs::read(file).map_err(|e| PatchError::ReadFailed {
        file: file.display().to_string(),
        reason: e.to_string(),
    })?;
    let hash = content_hash(&data);
    let content = String::from_utf8(data).map_err(|_| PatchError::InvalidEncoding {
        file: file.display().to_string(),
    })?;
    Ok((hash, content))
}

pub fn format_state(state: PatchState) -> &'static str {
    match state {
        PatchState::Patched => "patched",
        PatchState::Pending => "not yet patched",
        PatchState::AnchorMissing => "target not found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::apply;
    use crate::patch::fixtures::{HUFF_TABLES, jpeg_inl};
    use crate::patch::{AC_TABLE_PATCH, MCU_SKIP_PATCH};
    use tempfile::tempdir;

    fn install_jpegdec(project: &Path, env: &str, content: &str) -> PathBuf {
        let target = PatchConfig::target_file(&project.join(".pio/libdeps").join(env));
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, content).unwrap();
        target
    }

    #[test]
    fn reports_pending_then_patched() {
        let project = tempdir().unwrap();
        let target = install_jpegdec(project.path(), "esp32c3", &jpeg_inl());
        let config = PatchConfig::new(project.path());

        let before = run(&config).unwrap();
        apply::run(&config, |_| {});
        let after = run(&config).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].file, target);
        match (&before[0].state, &after[0].state) {
            (
                TargetState::Read { hash: h1, patches: p1 },
                TargetState::Read { hash: h2, patches: p2 },
            ) => {
                assert_ne!(h1, h2);
                assert!(p1.iter().all(|(_, s)| *s == PatchState::Pending));
                assert!(p2.iter().all(|(_, s)| *s == PatchState::Patched));
            }
            other => panic!("Expected readable targets, got {:?}", other),
        }
    }

    #[test]
    fn status_does_not_modify_files() {
        let project = tempdir().unwrap();
        let target = install_jpegdec(project.path(), "esp32c3", &jpeg_inl());

        run(&PatchConfig::new(project.path())).unwrap();

        assert_eq!(fs::read_to_string(target).unwrap(), jpeg_inl());
    }

    #[test]
    fn reports_missing_anchor_per_patch() {
        let project = tempdir().unwrap();
        install_jpegdec(project.path(), "esp32c3", HUFF_TABLES);

        let statuses = run(&PatchConfig::new(project.path())).unwrap();

        let TargetState::Read { patches, .. } = &statuses[0].state else {
            panic!("Expected readable target");
        };
        assert_eq!(
            patches,
            &vec![
                (&AC_TABLE_PATCH, PatchState::Pending),
                (&MCU_SKIP_PATCH, PatchState::AnchorMissing),
            ]
        );
    }

    #[test]
    fn non_utf8_target_is_unreadable() {
        let project = tempdir().unwrap();
        let target = PatchConfig::target_file(&project.path().join(".pio/libdeps/esp32c3"));
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, b"\xff\xfe").unwrap();

        let statuses = run(&PatchConfig::new(project.path())).unwrap();

        assert!(matches!(
            statuses[0].state,
            TargetState::Unreadable(PatchError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn no_cache_dir_reports_nothing() {
        let project = tempdir().unwrap();

        let statuses = run(&PatchConfig::new(project.path())).unwrap();

        assert!(statuses.is_empty());
    }
}
