//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "coinlist.log";

/// Installs the global tracing subscriber writing to the rotating log file.
///
/// The pipeline is:
/// 1. `EnvFilter` built from `config.trace_level` (default `"info"`)
/// 2. `fmt` layer producing plain-text lines without ANSI colors
/// 3. [`RotatingFileWriter`] at `<data_dir>/coinlist.log`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust,no_run
/// use coinlist::observability::init_tracing;
/// use coinlist::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFileWriter::new(data_dir.join(LOG_FILE_NAME));

    let subscriber = tracing_subscriber::registry().with(EnvFilter::new(level)).with(
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer),
    );

    let _ = subscriber.try_init();
}
