//! Streaming copy used by the cross-filesystem fallback.
//!
//! - The destination is created with `create_new`, so an existing file is never clobbered.
//! - Linux tries `copy_file_range` first; everything else (and Linux when the kernel
//!   refuses) uses buffered `io::copy` with 1 MiB buffers.
//! - The destination is fsynced before returning.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use super::helpers::io_error_with_help_io;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` -> `dst` and fsync `dst`. Returns the number of bytes written.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src).map_err(io_error_with_help_io("open source", src))?;
    let dst_f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dst)
        .map_err(io_error_with_help_io("create destination", dst))?;

    #[cfg(target_os = "linux")]
    if let Some(bytes) = copy_in_kernel(&src_f, &dst_f)? {
        dst_f.sync_all()?;
        return Ok(bytes);
    }

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}

/// `Ok(None)` means the kernel path is unsupported here and nothing was written.
#[cfg(target_os = "linux")]
fn copy_in_kernel(src: &File, dst: &File) -> io::Result<Option<u64>> {
    use std::os::unix::io::AsRawFd;

    const CHUNK: usize = 16 * 1024 * 1024;
    let mut total: u64 = 0;
    loop {
        // SAFETY: both descriptors are open for the duration of the call and null
        // offsets make the kernel use (and advance) the file positions.
        let rc = unsafe {
            libc::copy_file_range(
                src.as_raw_fd(),
                std::ptr::null_mut(),
                dst.as_raw_fd(),
                std::ptr::null_mut(),
                CHUNK,
                0,
            )
        };
        match rc {
            n if n > 0 => total += n as u64,
            0 => return Ok(Some(total)),
            _ => {
                let err = io::Error::last_os_error();
                let unsupported = matches!(
                    err.raw_os_error(),
                    Some(libc::EXDEV | libc::ENOSYS | libc::EINVAL | libc::EPERM | libc::EOPNOTSUPP)
                );
                if total == 0 && unsupported {
                    return Ok(None);
                }
                return Err(err);
            }
        }
    }
}
