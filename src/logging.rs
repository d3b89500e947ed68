//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through tracing; stdout carries only command output.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing for the process
pub fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level(verbose)))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .without_time()
        .init();

    debug!("verbump started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
