use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Where and how logs are written
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory for rolling log files
    pub log_dir: PathBuf,
    /// File name prefix inside `log_dir`
    pub file_name: String,
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,
    /// Also write to stderr
    pub stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_name: "npa-hooks.log".to_string(),
            default_filter: "info".to_string(),
            stderr: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    pub fn with_stderr(mut self, stderr: bool) -> Self {
        self.stderr = stderr;
        self
    }

    /// Full path of the current log file (before rotation suffix)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_name)
    }
}

/// Initialize the logging system
///
/// Logs go to a daily-rotated file in `config.log_dir`, and to stderr when
/// `config.stderr` is set. `RUST_LOG` overrides the default filter.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    ensure_log_dir(&config.log_dir)?;

    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, &config.log_dir, &config.file_name);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    let stderr_layer = config.stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    });

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::info!("Logging system initialized");
    tracing::info!("Log files location: {}", config.log_file().display());

    Ok(())
}

/// Create the log directory if it doesn't exist
fn ensure_log_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
