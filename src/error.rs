/// Error types
///
/// None of these are fatal: asset errors are logged and the asset skipped,
/// phase errors are logged and the offending event dropped.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn an asset file into a display-ready handle
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("animation has no frames: {}", .0.display())]
    NoFrames(PathBuf),
}

/// Invalid Loading → Ready transition
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PhaseError {
    #[error("loading already finished")]
    AlreadyReady,

    #[error("loading incomplete ({:.0}% done)", .0 * 100.0)]
    Incomplete(f32),
}
