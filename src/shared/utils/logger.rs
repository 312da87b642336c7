use log::{debug, error, info, log, Level};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Connection acquires slower than this are reported
pub const SLOW_ACQUIRE_MS: u64 = 100;

/// Install env_logger once; `RUST_LOG` overrides the built-in filters.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("movie_records", log::LevelFilter::Debug)
            // diesel and the HTTP stack are noisy at info
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_env("RUST_LOG")
            .format_timestamp_secs()
            .format_module_path(false)
            .init();

        info!("Logger ready");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

/// One-line log records for the things this service does repeatedly
pub struct LogContext;

impl LogContext {
    pub fn db_operation(operation: &str, table: &str, duration_ms: u64) {
        debug!("DB: {} on {} took {}ms", operation, table, duration_ms);
    }

    /// Server errors at error, client errors at warn, the rest at info
    pub fn http_request(method: &str, path: &str, status: u16, duration_ms: u64) {
        log!(
            level_for_status(status),
            "HTTP: {} {} -> {} in {}ms",
            method,
            path,
            status,
            duration_ms
        );
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    pub fn slow_operation(operation: &str, duration_ms: u64) {
        info!("Slow: {} took {}ms", operation, duration_ms);
    }
}

fn level_for_status(status: u16) -> Level {
    match status {
        500..=599 => Level::Error,
        400..=499 => Level::Warn,
        _ => Level::Info,
    }
}

/// Wall-clock timer for a named operation
pub struct TimedOperation {
    start: Instant,
    operation: &'static str,
}

impl TimedOperation {
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish_with_info(self, info: &str) {
        debug!("{} done in {}ms ({})", self.operation, self.elapsed_ms(), info);
    }
}
