use rblcheck_domain::{LogFormat, LoggingConfig};
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout belongs to the resolver output.
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    match config.format {
        LogFormat::Text => builder.with_ansi(std::io::stderr().is_terminal()).init(),
        LogFormat::Json => builder.json().init(),
    }

    debug!("Logging initialized at level: {}", config.level);
}
