//! I/O error enrichment.
//!
//! Every filesystem call in the move path goes through one of these adapters so a
//! fault that aborts the program names the operation, the path and a likely cause.
//!
//!   fs::remove_file(src).map_err(io_error_with_help("remove source", src))?;   // anyhow
//!   File::open(p).map_err(io_error_with_help_io("open source", p))?;           // io

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Hint keyed on the raw OS error code.
#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
        libc::EXDEV => "cross-filesystem; rename not possible",
        libc::EBUSY => "resource busy; another process holds the file",
        libc::ENOENT => "path not found; verify it exists",
        libc::ENOTDIR => "a path component is not a directory",
        libc::EISDIR => "target is a directory",
        libc::EEXIST => "already exists",
        libc::ENOSPC => "insufficient space on device",
        libc::EROFS => "read-only filesystem; cannot write here",
        libc::ELOOP => "too many symbolic link levels; possible symlink cycle",
        libc::ENAMETOOLONG => "file name or path too long",
        libc::EMFILE => "process file descriptor limit reached",
        libc::ENFILE => "system-wide file table overflow",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        5 => "access denied; check permissions",
        17 => "not same device; rename not possible",
        32 => "sharing violation; file is in use",
        2 | 3 => "path not found; verify it exists",
        80 | 183 => "already exists",
        112 => "insufficient disk space",
        19 => "write protected media",
        206 => "file name or path too long",
        _ => return None,
    };
    Some(hint)
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

/// Fallback hint when the error carries no OS code.
fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions")
        }
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        _ => None,
    }
}

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    match e.raw_os_error() {
        Some(code) => {
            if let Some(hint) = os_hint(code) {
                msg.push_str(" (");
                msg.push_str(hint);
                msg.push(')');
            }
            msg.push_str(&format!(" [os code: {}]", code));
        }
        None => {
            if let Some(hint) = kind_hint(e.kind()) {
                msg.push_str(" (");
                msg.push_str(hint);
                msg.push(')');
            }
        }
    }
    msg
}

/// `.map_err` adapter converting io::Error into an enriched anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// `.map_err` adapter for io::Result code; keeps the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
