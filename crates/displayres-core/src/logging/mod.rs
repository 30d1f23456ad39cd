use tracing_subscriber::EnvFilter;

/// Initialize structured JSON logging on stderr.
///
/// Quiet mode only surfaces warnings and errors; `RUST_LOG` overrides both
/// modes. Calling this more than once is a no-op.
pub fn init_logging(quiet: bool) {
    let default_directive = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
