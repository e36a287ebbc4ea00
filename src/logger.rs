//! Logging utilities with colored module prefixes.
//!
//! This module provides:
//! - `log!` macro for status output on stdout
//! - `warn!` macro for non-fatal problems on stderr
//! - `debug!` macro gated on the global verbose flag
//!
//! # Example
//!
//! ```ignore
//! log!("publish"; "copied {} files", count);
//! warn!("install"; "asset copy skipped: {}", err);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Macros
// ============================================================================

/// Log a status message with a colored module prefix (stdout)
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a warning with a colored module prefix (stderr)
///
/// Warnings go to stderr so lifecycle-hook runners that capture stdout
/// still surface them.
#[macro_export]
macro_rules! warn {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::warn($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a status message with a colored module prefix to stdout
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut out = stdout().lock();
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Write a warning with a colored module prefix to stderr
#[inline]
pub fn warn(module: &str, message: &str) {
    let prefix = format!("[{module}]").bright_yellow().bold().to_string();
    let mut err = stderr().lock();
    writeln!(err, "{prefix} {} {message}", "⚠".yellow()).ok();
    err.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let module_lower = module.to_ascii_lowercase();
    let prefix = format!("[{module}]");
    match module_lower.as_str() {
        "install" => prefix.bright_blue().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
