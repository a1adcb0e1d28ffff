use std::path::PathBuf;

/// The primary error type for all operations in the `urldrop` crate.
#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    /// An I/O error occurred while opening or writing the handoff file.
    /// Includes the path where the error happened.
    #[error("I/O error on path '{}': {}", .path.display(), .source)]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl ShimError {
    /// Attach the handoff path to a raw I/O error.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ShimError::Io {
            source,
            path: path.into(),
        }
    }
}
