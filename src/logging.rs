//! Tracing setup: stdout plus one `loan_approval_<timestamp>.log` per launch.
//!
//! File names sort chronologically, so retention keeps the last
//! [`MAX_LOG_FILES`] launches by name. UI toolkit crates are held at `warn`
//! unless `RUST_LOG` says otherwise.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs::{self, AppDirError};

/// Launch logs kept in the logs folder.
pub const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "loan_approval_";
const DEFAULT_FILTER: &str = "warn,loan_approval=info";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Why file logging could not be set up.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error(transparent)]
    AppDir(#[from] AppDirError),
    #[error("Failed to name log file: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber. Repeated calls are no-ops.
///
/// On error nothing is installed; the caller decides whether to run without
/// logs.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }
    let log_dir = app_dirs::logs_dir()?;
    let file_name = launch_file_name(now_local_or_utc())?;
    let log_path = log_dir.join(&file_name);
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|source| LoggingError::Open {
            path: log_path.clone(),
            source,
        })?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::never(&log_dir, &file_name));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let timer = fmt::time::OffsetTime::new(
        UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    );
    let subscriber = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %log_path.display(),
        "Loan approval starting"
    );
    for stale in prune_launch_logs(&log_dir, MAX_LOG_FILES) {
        tracing::warn!("Could not remove old log {}", stale.display());
    }
    Ok(())
}

/// Delete all but the newest `keep` launch logs; returns paths that could not
/// be removed. Files without the launch-log prefix are left alone.
fn prune_launch_logs(dir: &Path, keep: usize) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut launches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_launch_log(path))
        .collect();
    if launches.len() <= keep {
        return Vec::new();
    }
    launches.sort();
    let excess = launches.len() - keep;
    launches
        .into_iter()
        .take(excess)
        .filter(|path| fs::remove_file(path).is_err())
        .collect()
}

fn is_launch_log(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log"))
}

fn launch_file_name(now: OffsetDateTime) -> Result<String, time::error::Format> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    Ok(format!("{LOG_FILE_PREFIX}{}.log", now.format(NAME_FORMAT)?))
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
