//! Convenient macros for application messaging and logging.
//!
//! The macros route every user-facing message either to `tracing` (debug
//! mode) or to plain console output (normal mode), so command code never has
//! to care which one is active.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is enabled when either of these environment variables is set:
//! - **`SLEEPTRACK_DEBUG`**: Explicit debug mode enablement
//! - **`RUST_LOG`**: Standard Rust logging configuration
//!
//! The check runs once and is cached for the lifetime of the process.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//! - **`msg_bail_anyhow!`**: Return early with an `anyhow::Error`
//!
//! ## Usage Examples
//!
//! ```rust
//! use sleeptrack::{msg_info, msg_success};
//! use sleeptrack::libs::messages::Message;
//!
//! msg_success!(Message::TrackingStarted("22:41".to_string()));
//! msg_info!(Message::NoActiveSession, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Returns `true` when `SLEEPTRACK_DEBUG` or `RUST_LOG` is present in the
/// environment. The first result is cached.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Check for application-specific debug flag
        std::env::var("SLEEPTRACK_DEBUG").is_ok() ||
        // Check for standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Routes one line either to `tracing` at `$level` or to stdout.
///
/// The `padded` form surrounds the line with blank lines.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_route {
    ($level:ident, $prefix:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            println!("{}{}", $prefix, $msg);
        }
    };
    ($level:ident, $prefix:literal, $msg:expr, padded) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("\n{}{}\n", $prefix, $msg);
        } else {
            println!("\n{}{}\n", $prefix, $msg);
        }
    };
}

/// Prints a general message.
///
/// ```rust
/// # use sleeptrack::{msg_print, libs::messages::Message};
/// msg_print!(Message::SessionsHeader, true);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_route!(info, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, "", $msg, padded)
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_route!(info, "✅ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, "✅ ", $msg, padded)
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_route!(warn, "⚠️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(warn, "⚠️ ", $msg, padded)
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_route!(info, "ℹ️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, "ℹ️ ", $msg, padded)
    };
}

/// Emits a debug event; silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
