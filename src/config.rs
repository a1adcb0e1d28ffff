//! Destination configuration for the handoff file.
//!
//! The destination is an injected value rather than a compiled-in literal so
//! the shim is testable without touching the real handoff location.
//! Priority:
//! 1. `URLDROP_OUTPUT` environment variable.
//! 2. Compiled-in default path.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the handoff file destination.
pub const OUTPUT_ENV: &str = "URLDROP_OUTPUT";

/// Default handoff destination. The containing directory is expected to
/// pre-exist; the shim does not create it.
#[cfg(target_os = "windows")]
pub const DEFAULT_OUTPUT_PATH: &str = r"C:\lib\urldrop\url.txt";
#[cfg(not(target_os = "windows"))]
pub const DEFAULT_OUTPUT_PATH: &str = "/var/lib/urldrop/url.txt";

/// Runtime configuration of the shim.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the handoff record is written.
    pub output_path: PathBuf,
}

impl Config {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var_os(OUTPUT_ENV))
    }

    fn resolve(output_override: Option<OsString>) -> Self {
        let output_path = match output_override {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_OUTPUT_PATH),
        };
        Config { output_path }
    }
}
