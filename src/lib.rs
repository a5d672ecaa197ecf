//! Pre-build patcher for the JPEGDEC library vendored by PlatformIO.
//!
//! Finds `JPEGDEC/src/jpeg.inl` in every environment under `.pio/libdeps`
//! and applies two idempotent source patches for progressive JPEG decoding.

pub mod commands;
pub mod config;
pub mod patch;
pub mod utils;
