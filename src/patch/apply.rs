use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::patch::PatchError;
use crate::patch::constants::COMPONENT;

/// Rewrite `\n`-terminated patch text to the line endings of `content`.
fn match_line_endings(text: &'static str, content: &str) -> Cow<'static, str> {
    if content.contains("\r\n") {
        Cow::Owned(text.replace('\n', "\r\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// An exact-text splice point: `anchor` is replaced by `replacement`.
///
/// Matching is literal and whitespace-sensitive apart from line endings: a
/// CRLF file is matched against the CRLF form of the anchor and keeps its
/// CRLF endings. A library update that moves or reformats the anchor makes
/// the splice miss instead of landing somewhere unexpected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splice {
    pub anchor: &'static str,
    pub replacement: &'static str,
}

impl Splice {
    pub fn matches(&self, content: &str) -> bool {
        content.contains(match_line_endings(self.anchor, content).as_ref())
    }

    /// Replace the first occurrence of the anchor.
    /// Returns `None` if the anchor does not occur in `content`.
    pub fn apply(&self, content: &str) -> Option<String> {
        let anchor = match_line_endings(self.anchor, content);
        if content.contains(anchor.as_ref()) {
            let replacement = match_line_endings(self.replacement, content);
            Some(content.replacen(anchor.as_ref(), &replacement, 1))
        } else {
            None
        }
    }
}

/// One idempotent source patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePatch {
    /// Name used in warnings, e.g. "AC table patch"
    pub label: &'static str,
    /// What the patch does, used in the confirmation line
    pub description: &'static str,
    /// Comment inserted by the primary replacement. Its presence means the
    /// file is already patched.
    pub marker: &'static str,
    pub primary: Splice,
    /// Optional second site, applied only together with the primary one and
    /// skipped silently when absent
    pub secondary: Option<Splice>,
}

/// Result of applying a [`SourcePatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Marker found, nothing to do
    AlreadyPatched,
    /// Primary anchor missing, content left as is
    AnchorNotFound,
    /// Primary site replaced
    Applied {
        content: String,
        secondary_applied: bool,
    },
}

/// Patch state of some content, without modifying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchState {
    Patched,
    Pending,
    AnchorMissing,
}

impl SourcePatch {
    /// Apply the patch to `content`. Only [`PatchOutcome::Applied`] carries
    /// new content; in every other case the input stays as it is.
    pub fn apply(&self, content: &str) -> PatchOutcome {
        if content.contains(self.marker) {
            return PatchOutcome::AlreadyPatched;
        }

        let Some(patched) = self.primary.apply(content) else {
            return PatchOutcome::AnchorNotFound;
        };

        match self.secondary.and_then(|splice| splice.apply(&patched)) {
            Some(both) => PatchOutcome::Applied {
                content: both,
                secondary_applied: true,
            },
            None => PatchOutcome::Applied {
                content: patched,
                secondary_applied: false,
            },
        }
    }

    pub fn state(&self, content: &str) -> PatchState {
        if content.contains(self.marker) {
            PatchState::Patched
        } else if self.primary.matches(content) {
            PatchState::Pending
        } else {
            PatchState::AnchorMissing
        }
    }

    pub fn patched_message(&self, file: &Path) -> String {
        format!("Patched {}: {}: {}", COMPONENT, self.description, file.display())
    }

    pub fn anchor_missing_message(&self, file: &Path) -> String {
        format!(
            "WARNING: {} {} target not found in {} — library may have been updated",
            COMPONENT,
            self.label,
            file.display()
        )
    }
}

/// Apply a patch to a file in place.
///
/// The file is read as UTF-8 and written back only when the patch applies.
pub fn apply_to_file(patch: &SourcePatch, path: &Path) -> Result<PatchOutcome, PatchError> {
    let file = path.display().to_string();

    let data = fs::read(path).map_err(|e| PatchError::ReadFailed {
        file: file.clone(),
        reason: e.to_string(),
    })?;
    let content =
        String::from_utf8(data).map_err(|_| PatchError::InvalidEncoding { file: file.clone() })?;

    let outcome = patch.apply(&content);
    if let PatchOutcome::Applied { content, .. } = &outcome {
        fs::write(path, content).map_err(|e| PatchError::WriteFailed {
            file: file.clone(),
            reason: e.to_string(),
        })?;
    }

    debug!(
        patch = patch.label,
        file = %file,
        applied = matches!(outcome, PatchOutcome::Applied { .. }),
        "patch attempted"
    );
    Ok(outcome)
}
