//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output that only shows up with `--verbose`
//!
//! `[error]` and `[warning]` lines go to stderr, everything else to stdout.
//!
//! # Example
//!
//! ```ignore
//! log!("convert"; "processing {}", path.display());
//! log!("warning"; "No input files found!");
//! ```

use owo_colors::{OwoColorize, Stream, Style};
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
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
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

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
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

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();

    if is_diagnostic(&module_lower) {
        let prefix = colorize_prefix(module, &module_lower, Stream::Stderr);
        let mut stderr = stderr().lock();
        writeln!(stderr, "{prefix} {message}").ok();
        stderr.flush().ok();
    } else {
        let prefix = colorize_prefix(module, &module_lower, Stream::Stdout);
        let mut stdout = stdout().lock();
        writeln!(stdout, "{prefix} {message}").ok();
        stdout.flush().ok();
    }
}

/// Modules whose lines belong on stderr
#[inline]
fn is_diagnostic(module_lower: &str) -> bool {
    matches!(module_lower, "error" | "warning")
}

/// Apply color to a module prefix based on module type.
///
/// Colors follow `--color` (see `owo_colors::set_override`) and the target
/// stream's TTY detection.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "error" => Style::new().bright_red().bold(),
        "warning" => Style::new().bright_yellow().bold(),
        "write" | "done" => Style::new().bright_green().bold(),
        "config" => Style::new().bright_blue().bold(),
        _ => Style::new().bright_cyan().bold(),
    };
    prefix
        .if_supports_color(stream, |text| text.style(style))
        .to_string()
}
