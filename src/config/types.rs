//! Core configuration types.
//! - Config holds the source/destination pair and diagnostic verbosity.
//! - LogLevel represents diagnostic verbosity.

use std::path::PathBuf;

use super::{DEST_PATH_DEFAULT, SOURCE_PATH_DEFAULT};

/// Program-defined verbosity levels for stderr diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors (default; stdout carries the status lines)
    #[default]
    Quiet,
    /// Informational output
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

/// Runtime configuration used by the relocator.
#[derive(Debug, Clone)]
pub struct Config {
    /// File to relocate
    pub source: PathBuf,
    /// Where it should end up
    pub destination: PathBuf,
    /// Diagnostic verbosity (stderr)
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH_DEFAULT),
            destination: PathBuf::from(DEST_PATH_DEFAULT),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Construct a Config with an explicit path pair; other fields use defaults.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }
}
