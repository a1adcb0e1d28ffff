//! Diagnostics sink for the shim.
//!
//! Under the windowed subsystem there is no console, so anything printed is
//! normally invisible. The subscriber still writes to stderr: a launcher
//! that redirects handles, or a debug build run from a terminal, gets the
//! diagnostics instead of silence.

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter, e.g.
/// `URLDROP_LOG=debug`.
pub const LOG_ENV: &str = "URLDROP_LOG";

/// Install the global subscriber. Call once at startup; repeated calls
/// (as in tests) are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
