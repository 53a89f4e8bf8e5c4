//! Custom error types for mouse-click-sender.
//!
//! The click core deliberately exposes almost no recoverable errors: bad
//! option codes degrade to no-op emission and OS-level injection failures
//! are fire-and-forget. The only surfaced conditions are worker-thread
//! spawn failure and hotkey setup problems.

use std::io;
use thiserror::Error;

/// Main error type for mouse-click-sender operations.
#[derive(Error, Debug)]
pub enum ClickError {
    /// The worker thread could not be spawned. The run flag has already
    /// been rolled back to false when this is returned.
    #[error("failed to spawn click worker thread: {source}")]
    WorkerSpawn { source: io::Error },

    /// Error registering or parsing a global hotkey.
    #[error("hotkey error: {0}")]
    Hotkey(String),
}

/// Result type alias for mouse-click-sender operations.
pub type Result<T> = std::result::Result<T, ClickError>;

impl ClickError {
    /// Create a new WorkerSpawn error.
    pub fn worker_spawn(source: io::Error) -> Self {
        Self::WorkerSpawn { source }
    }

    /// Create a new Hotkey error.
    pub fn hotkey(message: impl Into<String>) -> Self {
        Self::Hotkey(message.into())
    }
}
