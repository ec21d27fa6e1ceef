//! Config module.
//! Holds the compiled-in asset paths and the runtime `Config` built from them.
//! No file or environment layer: the program takes no input.

pub mod types;

pub use types::{Config, LogLevel};

/// Where the exported logo lands before it is renamed.
pub const SOURCE_PATH_DEFAULT: &str =
    "/home/iteck/Dev_Projects/fin_teck/apps/web/public/We Make It Possible_01.png";
/// Published name the web app references.
pub const DEST_PATH_DEFAULT: &str = "/home/iteck/Dev_Projects/fin_teck/apps/web/public/iteck-logo.png";
