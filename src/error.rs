//! Error types for the external tool boundary.

use thiserror::Error;

/// Failure of an external brightness write.
///
/// The panel is allowed to drop this. A failed commit never reaches the
/// user interface; the `Result` exists so that ignoring it is a visible
/// decision at the call site rather than an implicit one.
#[derive(Error, Debug)]
pub enum ExternalToolError {
    /// The tool binary could not be spawned at all.
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but reported failure.
    #[error("{command} exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
}
