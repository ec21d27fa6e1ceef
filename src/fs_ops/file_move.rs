//! Move implementation.
//! Attempts an atomic rename; on any rename error falls back to a metadata-preserving
//! copy into place followed by removal of the source.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::atomic::try_atomic_move;
use super::copy::safe_copy_and_rename;
#[cfg(unix)]
use super::copy::safe_relink;
use super::helpers::io_error_with_help;
use super::util::is_cross_device;
use crate::errors::RelocateError;

/// How the file reached its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMethod {
    Rename,
    Copy,
    /// Source was a symlink; the link itself was recreated.
    Symlink,
}

/// Result of a completed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Final path of the file (inside `dst` when `dst` was a directory).
    pub destination: PathBuf,
    pub method: MoveMethod,
}

/// Resolve where the file should land: an existing directory receives the file
/// under its own name, anything else is the literal target.
fn real_destination(src: &Path, dst: &Path) -> Result<PathBuf> {
    if !dst.is_dir() {
        return Ok(dst.to_path_buf());
    }
    let name = src
        .file_name()
        .ok_or_else(|| RelocateError::MissingFileName(src.to_path_buf()))?;
    let target = dst.join(name);
    if target.exists() {
        return Err(RelocateError::DestinationExists(target).into());
    }
    Ok(target)
}

fn fallback_hint(e: &io::Error) -> &'static str {
    if is_cross_device(e) {
        return "cross-filesystem; will copy instead";
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => "permission denied; check destination perms",
        _ => "falling back to copy",
    }
}

/// Move `src` to `dst`, replacing an existing destination file.
pub fn move_path(src: &Path, dst: &Path) -> Result<MoveReport> {
    let dest = real_destination(src, dst)?;
    debug!(src = %src.display(), dest = %dest.display(), "Resolved destination");

    match try_atomic_move(src, &dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
            Ok(MoveReport {
                destination: dest,
                method: MoveMethod::Rename,
            })
        }
        Err(e) => {
            warn!(error = %e, hint = fallback_hint(&e), "Atomic rename failed, using copy+remove");

            // A symlink is recreated at the destination, never dereferenced.
            #[cfg(unix)]
            {
                let meta = fs::symlink_metadata(src).map_err(io_error_with_help("stat source", src))?;
                if meta.file_type().is_symlink() {
                    safe_relink(src, &dest)?;
                    fs::remove_file(src).map_err(io_error_with_help("remove original link", src))?;
                    info!(src = %src.display(), dest = %dest.display(), "Recreated symlink and removed source");
                    return Ok(MoveReport {
                        destination: dest,
                        method: MoveMethod::Symlink,
                    });
                }
            }

            let bytes = safe_copy_and_rename(src, &dest)?;
            fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
            info!(src = %src.display(), dest = %dest.display(), bytes, "Copied file and removed source");
            Ok(MoveReport {
                destination: dest,
                method: MoveMethod::Copy,
            })
        }
    }
}
