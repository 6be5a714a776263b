use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `PARISH_LOG` takes any `EnvFilter` directive; without it only warnings
/// are shown, or debug logs with `--verbose`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("PARISH_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
