//! Reusable one-shot runner so that the windowed binary and the integration
//! tests share the same implementation without duplicating logic.

use crate::config::Config;
use crate::error::ShimError;
use crate::record::Record;

/// Perform the shim's single side effect: write the handoff record for
/// `cmdline` to the configured destination.
///
/// Every I/O failure (open, write, flush) is propagated and fatal to the
/// caller; there is no retry and no fallback destination.
pub fn run(cmdline: &str, config: &Config) -> Result<(), ShimError> {
    let record = Record::new(cmdline);
    record.write_to(&config.output_path)?;

    tracing::info!(
        path = %config.output_path.display(),
        payload_len = cmdline.len(),
        "handoff record written"
    );
    Ok(())
}
