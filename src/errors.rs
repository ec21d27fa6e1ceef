//! Typed error definitions for asset_relocate.
//! Provides the well-known move faults for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("Destination path already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Cannot copy a non-regular file across filesystems: {0}")]
    NotAFile(PathBuf),

    #[error("Source path has no file name: {0}")]
    MissingFileName(PathBuf),
}

impl RelocateError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            RelocateError::DestinationExists(_) => 10,
            RelocateError::NotAFile(_) => 11,
            RelocateError::MissingFileName(_) => 12,
        }
    }
}
