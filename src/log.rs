// src/log.rs
use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing;

const DEFAULT_FILTER: &str = "info,auction_scrape=debug,headless_chrome=warn";

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Terminal (CLI)
    Stderr,
    /// `.store/debug.log` (GUI has no terminal on Windows)
    File,
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
/// Safe to call twice; the second call is a no-op.
pub fn init(sink: Sink) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match sink {
        Sink::Stderr => {
            let _ = registry.with(fmt::layer().with_writer(std::io::stderr)).try_init();
        }
        Sink::File => match open_log_file() {
            Ok(file) => {
                let _ = registry
                    .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                    .try_init();
            }
            Err(e) => {
                eprintln!("Log file unavailable ({e}); logging to stderr");
                let _ = registry.with(fmt::layer().with_writer(std::io::stderr)).try_init();
            }
        },
    }
}

fn open_log_file() -> std::io::Result<fs::File> {
    fs::create_dir_all(STORE_DIR)?;
    OpenOptions::new().create(true).append(true).open(LOG_FILE)
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

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
