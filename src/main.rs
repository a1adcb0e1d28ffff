//! Main entry point for the urldrop shim binary.

// Prevents a console window on Windows in release; the OS launches the shim
// as a windowed process when a registered URL scheme is opened.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use urldrop::{cmdline, config::Config, logging};

fn main() -> std::process::ExitCode {
    logging::init();

    if let Err(e) = run_app() {
        tracing::error!("{e}");
        eprintln!("Error: {}", e);
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), urldrop::ShimError> {
    let config = Config::from_env();
    let payload = cmdline::command_tail();
    urldrop::run(&payload, &config)
}
