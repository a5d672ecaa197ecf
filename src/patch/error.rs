use std::fmt;

/// Error type for patch operations.
///
/// None of these abort a build. The driver reports them as warnings and moves
/// on to the next target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// Dependency cache directory exists but could not be listed
    ScanFailed { dir: String, reason: String },
    /// Target file could not be read
    ReadFailed { file: String, reason: String },
    /// Target file is not valid UTF-8 text
    InvalidEncoding { file: String },
    /// Patched content could not be written back
    WriteFailed { file: String, reason: String },
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::ScanFailed { dir, reason } => {
                write!(f, "failed to scan '{}': {}", dir, reason)
            }
            PatchError::ReadFailed { file, reason } => {
                write!(f, "failed to read '{}': {}", file, reason)
            }
            PatchError::InvalidEncoding { file } => {
                write!(f, "'{}' is not valid UTF-8, left unpatched", file)
            }
            PatchError::WriteFailed { file, reason } => {
                write!(f, "failed to write '{}': {}", file, reason)
            }
        }
    }
}

impl std::error::Error for PatchError {}
