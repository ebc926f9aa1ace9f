use std::path::PathBuf;
use thiserror::Error;

// Error type for file sink operations.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Appending to the log file still failed after the last retry attempt.
    #[error("failed to append to {}: {source}", path.display())]
    AppendFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
