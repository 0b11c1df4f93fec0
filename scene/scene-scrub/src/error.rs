//! Error types for scene scrubbing.

use thiserror::Error;

/// Result type for scrub operations.
pub type ScrubResult<T> = Result<T, ScrubError>;

/// Errors that abort a scrub.
///
/// Individual invalid arrays, meshes, channels or animations are never
/// errors; they are removed and reported through the diagnostic sink.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrubError {
    /// The scene has no meshes left after scrubbing.
    #[error("no meshes remaining after removing {removed} meshes with invalid positions")]
    NoMeshesRemaining {
        /// Number of meshes removed by the scrub.
        removed: usize,
    },
}
