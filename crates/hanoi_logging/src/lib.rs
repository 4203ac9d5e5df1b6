#![deny(missing_docs)]
//! Shared logging utilities for the hanoi workspace.
//!
//! This crate provides the `hanoi_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every record emitted
//! through the macros is prefixed with the move count of the game running on
//! the current thread, so a log file reads like a replay.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the move count of the active game.
    static MOVE_COUNT: Cell<u32> = const { Cell::new(0) };
}

/// Sets the move count for the current thread.
/// The game core calls this whenever its move counter changes.
pub fn set_move_count(moves: u32) {
    MOVE_COUNT.with(|v| v.set(moves));
}

/// Retrieves the move count for the current thread.
/// Returns 0 if no game has reported a count yet.
pub fn current_move_count() -> u32 {
    MOVE_COUNT.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current move count.
#[macro_export]
macro_rules! hanoi_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[move {}] {}", $crate::current_move_count(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current move count.
#[macro_export]
macro_rules! hanoi_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[move {}] {}", $crate::current_move_count(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current move count.
#[macro_export]
macro_rules! hanoi_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[move {}] {}", $crate::current_move_count(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current move count.
#[macro_export]
macro_rules! hanoi_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[move {}] {}", $crate::current_move_count(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current move count.
#[macro_export]
macro_rules! hanoi_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[move {}] {}", $crate::current_move_count(), format_args!($($arg)*));
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
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
