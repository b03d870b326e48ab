//! Relocation error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem failure during relocation. Aborts the whole pass.
#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("failed to read emitted page `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory `{}`", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write page `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove intermediate output `{}`", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RelocateError {
    /// Path the failed operation was working on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. }
            | Self::CreateDir { path, .. }
            | Self::Write { path, .. }
            | Self::Cleanup { path, .. } => path,
        }
    }
}
