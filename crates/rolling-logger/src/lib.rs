//! Rolling Logger
//!
//! Process-wide logging for the app shell:
//! - `tracing` events and `log` records go to a size-rotated file
//! - the last few hundred lines stay in memory for a diagnostics view
//! - on Android, `log` records are forwarded to logcat instead

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

mod writer;

pub use writer::{RollingConfig, RollingFile, RollingWriter};

static LOGGER: OnceLock<RollingFile> = OnceLock::new();

/// Local wall-clock timestamps for log lines
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger with default limits
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    init_with_config(RollingConfig::new(log_dir, app_name))
}

/// Initialize the global logger. Fails if a logger is already installed.
pub fn init_with_config(config: RollingConfig) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Err("Logger already initialized".to_string());
    }

    #[cfg(target_os = "android")]
    let tag = config.app_name.clone();

    let file = RollingFile::open(config)
        .map_err(|e| format!("Failed to open log file: {}", e))?;

    let builder = tracing_subscriber::fmt()
        .with_writer(file.clone())
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_max_level(tracing::Level::DEBUG);

    #[cfg(not(target_os = "android"))]
    builder
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    #[cfg(target_os = "android")]
    {
        tracing::subscriber::set_global_default(builder.finish())
            .map_err(|e| format!("Failed to install subscriber: {}", e))?;
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(tag),
        );
    }

    LOGGER
        .set(file)
        .map_err(|_| "Logger already initialized".to_string())?;

    tracing::info!("logger initialized");
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    LOGGER
        .get()
        .map(|_| ())
        .ok_or_else(|| "Logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Recent log lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingFile::recent_lines).unwrap_or_default()
}

/// Path of the active log file, if initialized
pub fn log_file_path() -> Option<PathBuf> {
    LOGGER.get().map(RollingFile::path)
}
