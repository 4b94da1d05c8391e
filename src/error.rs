use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CpcError {
    #[error("'{0}' is not a valid file or directory.")]
    InvalidPath(String),

    #[error("'{0}' is not a directory for --tree mode.")]
    NotADirectory(String),

    #[error("could not read file '{}'", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to file '{}'", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why the text did not reach the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("'{tool}' command not found. Is it installed?")]
    ToolMissing { tool: String },

    #[error("'{tool}' failed: {reason}")]
    ToolFailed { tool: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CpcError>;
