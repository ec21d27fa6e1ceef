//! Filesystem operations behind the relocation.

mod atomic;
mod copy;
mod file_move;
mod helpers;
mod io_copy;
mod metadata;
mod util;

pub use copy::safe_copy_and_rename;
#[cfg(unix)]
pub use copy::safe_relink;
pub use file_move::{MoveMethod, MoveReport, move_path};
pub use helpers::{io_error_with_help, io_error_with_help_io};
