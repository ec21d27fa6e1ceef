//! Copy-and-rename used when a plain rename is not possible:
//! - Copies into a temp file beside the destination (io_copy fsyncs it)
//! - Carries timestamps, permissions and (optionally) xattrs over
//! - Atomically renames temp -> dest, replacing an existing file
//!
//! Symlinks take a separate route (`safe_relink`): the link is recreated beside the
//! destination and renamed into place.
//!
//! The destination directory is never created here; a missing directory is a fault.

use anyhow::{Result, anyhow};
use std::fs;
use std::path::Path;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::{io_copy, metadata, util};
use crate::errors::RelocateError;

fn parent_dir(dest: &Path) -> Result<&Path> {
    match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => Ok(p),
        Some(_) => Ok(Path::new(".")),
        None => Err(anyhow!("destination has no parent: {}", dest.display())),
    }
}

/// Copy `src` to `dest` with metadata. `src` is left untouched.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<u64> {
    let src_meta = fs::metadata(src).map_err(io_error_with_help("stat source", src))?;
    if !src_meta.is_file() {
        return Err(RelocateError::NotAFile(src.to_path_buf()).into());
    }

    let dest_dir = parent_dir(dest)?;
    let tmp_path = util::unique_temp_path(dest_dir);
    let bytes = match io_copy::copy_streaming(src, &tmp_path) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(anyhow::Error::new(e).context("copy to temporary file"));
        }
    };

    metadata::preserve_metadata(&tmp_path, &src_meta);
    metadata::preserve_xattrs(src, &tmp_path);

    if let Err(e) = try_atomic_move(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        let err = io_error_with_help("rename temporary file into place", dest)(e);
        return Err(err.context(format!("temporary file was '{}'", tmp_path.display())));
    }

    Ok(bytes)
}

/// Recreate the symlink `src` at `dest` (same target text), replacing an existing file.
/// `src` is left untouched.
#[cfg(unix)]
pub fn safe_relink(src: &Path, dest: &Path) -> Result<()> {
    let target = fs::read_link(src).map_err(io_error_with_help("read link", src))?;
    let tmp_path = util::unique_temp_path(parent_dir(dest)?);
    std::os::unix::fs::symlink(&target, &tmp_path)
        .map_err(io_error_with_help("create temporary link", &tmp_path))?;

    if let Err(e) = try_atomic_move(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        let err = io_error_with_help("rename temporary link into place", dest)(e);
        return Err(err.context(format!("temporary link was '{}'", tmp_path.display())));
    }
    Ok(())
}
