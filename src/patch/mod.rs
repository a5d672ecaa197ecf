pub mod apply;
mod constants;
mod error;
#[cfg(test)]
pub(crate) mod fixtures;

// Re-export public items
pub use apply::{PatchOutcome, PatchState, SourcePatch, Splice, apply_to_file};
pub use constants::{AC_TABLE_PATCH, COMPONENT, LIBDEPS_DIR, MCU_SKIP_PATCH, PATCHES, TARGET_FILE};
pub use error::PatchError;
