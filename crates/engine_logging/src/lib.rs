#![deny(missing_docs)]
//! Shared logging utilities for the counter workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! a per-thread worker label that prefixes lines logged from counting workers,
//! and a minimal test initializer for the global logger.

use std::cell::RefCell;

#[doc(hidden)]
pub use log as __log;

thread_local! {
    /// Thread-local label of the counting worker running on this thread.
    static WORKER_LABEL: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Tags every subsequent `engine_*` line logged from the current thread.
/// Worker threads call this once when they start.
pub fn set_worker_label(label: impl Into<String>) {
    let label = label.into();
    WORKER_LABEL.with(|v| *v.borrow_mut() = Some(label));
}

/// Removes the label set by [`set_worker_label`] for the current thread.
pub fn clear_worker_label() {
    WORKER_LABEL.with(|v| *v.borrow_mut() = None);
}

/// Returns the label of the current thread, if one was set.
pub fn worker_label() -> Option<String> {
    WORKER_LABEL.with(|v| v.borrow().clone())
}

/// Prefix prepended by the logging macros: `"[label] "` or an empty string.
#[doc(hidden)]
pub fn line_prefix() -> String {
    WORKER_LABEL.with(|v| match v.borrow().as_deref() {
        Some(label) => format!("[{label}] "),
        None => String::new(),
    })
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!("{}{}", $crate::line_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}
