//! Error types for rendering

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a render before any output is produced.
///
/// Problems inside the tree (an unreadable subdirectory, a broken `.tags`
/// file) never surface here; they degrade into placeholder lines or nothing.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
