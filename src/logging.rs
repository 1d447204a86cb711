use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_ENV: &str = "ETRACKER_LOG";

/// Diagnostics go to stderr so stdout stays clean for command output.
/// Quiet unless `ETRACKER_LOG` asks for more, e.g. `ETRACKER_LOG=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_log = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(stderr_log.with_filter(filter))
        .try_init();
}
