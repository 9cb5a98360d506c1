//! # ghost-rdp Logging Module
//!
//! Process-wide logger behind the `log` facade.
//!
//! ## Usage
//!
//! ```
//! use ghostrdp_utils::logging::{self, prelude::*};
//!
//! logging::init_with_format("info", "text").expect("Failed to initialize logger");
//! info!("Backend is running");
//! ```
//!
//! Records go to stderr, either as a single human-readable line or as one JSON
//! object per line. The level can be changed at runtime with [`update_log_level`].

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub use log::{debug, error, info, trace, warn};

static LOGGER: GhostLogger = GhostLogger;
static CURRENT_LEVEL: AtomicUsize = AtomicUsize::new(LevelFilter::Info as usize);
static JSON_FORMAT: AtomicBool = AtomicBool::new(false);
static INIT: OnceCell<()> = OnceCell::new();

/// Logger installed by [`init`] / [`init_with_format`].
pub struct GhostLogger;

impl log::Log for GhostLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= current_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if JSON_FORMAT.load(Ordering::Relaxed) {
            eprintln!("{}", json_line(record));
        } else {
            eprintln!(
                "{} {:<5} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn json_line(record: &Record) -> serde_json::Value {
    serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "level": record.level().to_string().to_lowercase(),
        "target": record.target(),
        "message": record.args().to_string(),
        "module": record.module_path(),
        "line": record.line()
    })
}

/// Initializes the logger with text output.
///
/// # Arguments
/// * `level` - "off", "error", "warn", "info", "debug" or "trace". Unknown values fall back to "info".
pub fn init(level: &str) -> Result<(), SetLoggerError> {
    init_with_format(level, "text")
}

/// Initializes the logger with the given level and output format.
///
/// Calling it again only updates the level and format; the logger itself is
/// installed once per process.
///
/// # Arguments
/// * `level` - Log level name
/// * `format` - "text" for human-readable lines, "json" for structured lines
pub fn init_with_format(level: &str, format: &str) -> Result<(), SetLoggerError> {
    INIT.get_or_try_init(|| {
        log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
    })?;

    let level_filter = parse_level(level).unwrap_or(LevelFilter::Info);
    JSON_FORMAT.store(format.eq_ignore_ascii_case("json"), Ordering::Relaxed);
    set_level(level_filter);
    Ok(())
}

/// Updates the current log level.
///
/// Unknown level names are rejected and leave the current level untouched.
pub fn update_log_level(level: &str) -> Result<(), String> {
    let new_level = parse_level(level).ok_or_else(|| format!("Unknown log level '{}'", level))?;
    set_level(new_level);
    Ok(())
}

fn set_level(level: LevelFilter) {
    CURRENT_LEVEL.store(level as usize, Ordering::Relaxed);
    log::set_max_level(level);
}

fn current_level() -> LevelFilter {
    match CURRENT_LEVEL.load(Ordering::Relaxed) {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

pub mod prelude {
    pub use log::{debug, error, info, trace, warn};
}
