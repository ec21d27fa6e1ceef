//! Atomic rename helper.
//! - Overwrites an existing destination file on every platform (`fs::rename` maps to
//!   `MoveFileExW(MOVEFILE_REPLACE_EXISTING)` on Windows), so a failed rename leaves
//!   the old destination in place.
//! - On Unix, best-effort fsync of the destination directory after rename.
//!
//! Returns the raw io::Error so callers can inspect the OS code before deciding
//! whether to fall back to copying.

use std::fs;
use std::io;
use std::path::Path;

pub(crate) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    // A failed directory fsync must not turn a completed rename into a failure.
    if let Some(parent) = dst.parent() {
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
