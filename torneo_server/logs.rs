use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up the logging configuration for the application.
///
/// Two layers: stdout, and a daily rotating file under `logs/`.
/// Levels come from `RUST_LOG`; without it everything logs at `info`
/// and the `torneo` crates at `debug`.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "torneo.log");
    let (non_blocking_file, guard_file) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = "info,torneo=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The file writer stops as soon as the guard drops; the process owns it until exit.
    std::mem::forget(guard_file);
}
