//! The relocation itself: check the source, move it, then look for the destination.
//!
//! The destination check is unconditional. A missing source still ends with the
//! destination probe, so a file left by an earlier run reports as ready right after
//! the "not found" line.

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::fs_ops::{MoveReport, move_path};
use crate::output::Console;

/// A file identified only by its path; presence is observed, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAsset {
    path: PathBuf,
}

impl FileAsset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Follows symlinks; a dangling link or a stat error counts as absent.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStatus {
    Moved(MoveReport),
    SourceMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: MoveStatus,
    /// Whether the destination existed when re-checked at the end.
    pub destination_ready: bool,
}

/// Move `src` to `dst` and report each step on `console`.
///
/// Move faults propagate before the destination check; missing sources do not.
pub fn relocate<W: Write>(src: &Path, dst: &Path, console: &mut Console<W>) -> Result<Outcome> {
    let source = FileAsset::new(src);
    let destination = FileAsset::new(dst);

    let status = if source.exists() {
        let report = move_path(source.path(), destination.path())?;
        console.success("Logo renamed successfully!")?;
        console.line(&format!("New location: {}", destination.path().display()))?;
        MoveStatus::Moved(report)
    } else {
        debug!(src = %source.path().display(), "Source absent; skipping move");
        console.failure(&format!("Source file not found: {}", source.path().display()))?;
        MoveStatus::SourceMissing
    };

    let destination_ready = destination.exists();
    if destination_ready {
        console.success("Logo file is ready!")?;
    } else {
        console.failure("Something went wrong")?;
    }

    info!(
        src = %source.path().display(),
        dst = %destination.path().display(),
        moved = matches!(status, MoveStatus::Moved(_)),
        destination_ready,
        "Relocation finished"
    );

    Ok(Outcome {
        status,
        destination_ready,
    })
}
