//! Application orchestrator.
//! Initializes logging, builds the compiled-in config and runs the relocation.
//! Move faults are returned so the process exits non-zero; typed faults are also
//! logged with their code.

use anyhow::Result;
use tracing::{debug, error};

use asset_relocate::cli::Args;
use asset_relocate::output::Console;
use asset_relocate::{Config, RelocateError, relocate};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg = Config::default();
    init_tracing(&cfg.log_level)?;
    debug!(?args, ?cfg, "Starting asset_relocate");

    let mut console = Console::stdout();
    match relocate(&cfg.source, &cfg.destination, &mut console) {
        Ok(outcome) => {
            debug!(?outcome, "Done");
            Ok(())
        }
        Err(e) => {
            log_fault(&e);
            Err(e)
        }
    }
}

/// Structured record for typed faults. Untyped I/O faults are left to `main`,
/// which prints the full context chain.
fn log_fault(e: &anyhow::Error) {
    let Some(re) = e.downcast_ref::<RelocateError>() else {
        return;
    };
    let code = re.code();
    match re {
        RelocateError::DestinationExists(path) => {
            error!(code, kind = "destination_exists", path = %path.display(), "Move failed")
        }
        RelocateError::NotAFile(path) => {
            error!(code, kind = "not_a_file", path = %path.display(), "Move failed")
        }
        RelocateError::MissingFileName(path) => {
            error!(code, kind = "missing_file_name", path = %path.display(), "Move failed")
        }
    }
}
