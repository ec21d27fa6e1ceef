//! Core library for `asset_relocate`.
//!
//! Moves the web logo from its export name to the published name, then reports
//! whether the published file is in place. The binary wires these pieces to
//! stdout with compiled-in paths; tests drive `relocate` with their own.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod relocate;

pub use config::{Config, DEST_PATH_DEFAULT, LogLevel, SOURCE_PATH_DEFAULT};
pub use errors::RelocateError;
pub use relocate::{FileAsset, MoveStatus, Outcome, relocate};
