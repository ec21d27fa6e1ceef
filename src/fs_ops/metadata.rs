//! Metadata carried over by the copy fallback.
//! - Timestamps (atime, mtime) and permission bits, mirroring a `copy2`-style copy.
//! - Extended attributes when built with the `xattrs` feature.
//! - Best-effort: failures are logged and never fail the move.

use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

/// Apply `src_meta` (already fetched before the copy) to `dest`.
pub(super) fn preserve_metadata(dest: &Path, src_meta: &fs::Metadata) {
    let at = FileTime::from_last_access_time(src_meta);
    let mt = FileTime::from_last_modification_time(src_meta);
    match set_file_times(dest, at, mt) {
        Ok(()) => trace!(path = %dest.display(), "set atime/mtime on destination"),
        Err(e) => {
            warn!(path = %dest.display(), error = %e, "failed to set atime/mtime on destination")
        }
    }

    // Unix mode bits; on Windows this carries the readonly attribute.
    #[cfg(unix)]
    let perms = {
        use std::os::unix::fs::PermissionsExt;
        fs::Permissions::from_mode(src_meta.permissions().mode() & 0o7777)
    };
    #[cfg(not(unix))]
    let perms = src_meta.permissions();

    if let Err(e) = fs::set_permissions(dest, perms) {
        warn!(path = %dest.display(), error = %e, "failed to set permissions on destination");
    }
}

/// Copy extended attributes from `src` to `dest` (no-op without the `xattrs` feature).
pub(super) fn preserve_xattrs(src: &Path, dest: &Path) {
    #[cfg(feature = "xattrs")]
    {
        let names = match xattr::list(src) {
            Ok(names) => names,
            Err(e) => {
                warn!(src = %src.display(), error = %e, "failed to list xattrs; continuing");
                return;
            }
        };
        for name in names {
            let name_disp = name.to_string_lossy().into_owned();
            let value = match xattr::get(src, &name) {
                Ok(v) => v.unwrap_or_default(),
                Err(e) => {
                    warn!(src = %src.display(), xattr = %name_disp, error = %e, "failed to read xattr");
                    continue;
                }
            };
            match xattr::set(dest, &name, &value) {
                Ok(()) => trace!(dest = %dest.display(), xattr = %name_disp, size = value.len(), "preserved xattr"),
                Err(e) => warn!(dest = %dest.display(), xattr = %name_disp, error = %e, "failed to set xattr"),
            }
        }
    }
    #[cfg(not(feature = "xattrs"))]
    {
        let _ = (src, dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::set_file_mtime;
    use tempfile::tempdir;

    #[test]
    fn copies_mtime() {
        let td = tempdir().unwrap();
        let src = td.path().join("a");
        let dst = td.path().join("b");
        fs::write(&src, b"a").unwrap();
        fs::write(&dst, b"b").unwrap();
        let ts = FileTime::from_unix_time(1_600_000_000, 0);
        set_file_mtime(&src, ts).unwrap();

        preserve_metadata(&dst, &fs::metadata(&src).unwrap());

        let got = FileTime::from_last_modification_time(&fs::metadata(&dst).unwrap());
        assert_eq!(got.unix_seconds(), ts.unix_seconds());
    }

    #[cfg(unix)]
    #[test]
    fn copies_mode_bits() {
        use std::os::unix::fs::PermissionsExt;
        let td = tempdir().unwrap();
        let src = td.path().join("a");
        let dst = td.path().join("b");
        fs::write(&src, b"a").unwrap();
        fs::write(&dst, b"b").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o640)).unwrap();

        preserve_metadata(&dst, &fs::metadata(&src).unwrap());

        assert_eq!(fs::metadata(&dst).unwrap().permissions().mode() & 0o777, 0o640);
    }
}
