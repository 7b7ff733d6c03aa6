// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_ENV};

#[doc(hidden)]
pub use tracing;

/// Install the global subscriber. Lines go to `log_file` (append mode),
/// falling back to stderr when the file can't be opened.
/// Safe to call more than once; later calls are no-ops.
pub fn init(log_file: &Path) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }

    let builder = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_target(false)
        .with_ansi(false);

    let _ = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => builder.with_writer(Mutex::new(file)).try_init(),
        Err(_) => builder.with_writer(std::io::stderr).try_init(),
    };
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
