use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Fatal failures of one aggregation run.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Cannot open root directory {}", path.display())]
    Root { path: PathBuf, source: io::Error },

    #[error("Failed to create output file {}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("Failed to write to {}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

/// Soft failures of a single clipboard delivery strategy.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to spawn {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("failed to write to {program}: {source}")]
    Pipe { program: String, source: io::Error },

    #[error("{program} exited with {status}")]
    Exit { program: String, status: ExitStatus },

    #[error("GUI clipboard unavailable: {0}")]
    Toolkit(#[from] arboard::Error),
}
