//! Command implementations for the qrgen CLI.
//!
//! Each subcommand lives in its own module. Commands return values instead of
//! printing so `main` owns the terminal and tests can inspect results.

pub mod completions;
pub mod copy;
pub mod download;
pub mod url;

pub use completions::generate_completions;
pub use copy::run_copy;
pub use download::run_download;
pub use url::run_url;

use anyhow::{Result, bail};
use qrgen_business::{ActionError, ActionOutcome};

use crate::output::Output;

pub const NOTHING_TO_ENCODE: &str = "Nothing to encode: pass --text or pipe data on stdin";

/// Prints an action outcome the way the UI would toast it.
///
/// Failures become errors so the process exits non-zero.
pub fn report_outcome(out: &Output, outcome: &ActionOutcome) -> Result<()> {
    if let Some(notification) = outcome.notification() {
        out.notification(&notification);
    }

    match &outcome.result {
        Ok(_) => Ok(()),
        Err(ActionError::EmptyInput) => bail!(NOTHING_TO_ENCODE),
        Err(ActionError::Failed { action, reason }) => bail!("{action} failed: {reason}"),
    }
}
