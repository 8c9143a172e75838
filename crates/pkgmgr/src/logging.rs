use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PKGMGR_LOG=debug`.
pub const LOG_VAR: &str = "PKGMGR_LOG";

/// Install a stderr subscriber. Stays quiet below `warn` unless [`LOG_VAR`] says otherwise.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
