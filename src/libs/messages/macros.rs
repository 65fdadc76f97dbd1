//! Output macros for application messages.
//!
//! Every macro checks whether debug mode is on. In debug mode the message is
//! emitted as a `tracing` event, so it lands in the same stream as the rest of
//! the diagnostics; otherwise it is printed directly to the console.
//!
//! Debug mode is enabled when either of these environment variables is set:
//! - **`TIMETRACK_DEBUG`**: application-specific debug flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! ```rust
//! use timetrack::{msg_debug, msg_print};
//! use timetrack::libs::messages::Message;
//!
//! msg_print!(Message::ActivityAdded("reading".to_string()));
//! msg_debug!(format!("Closed {} sessions", 1));
//! ```

use std::sync::OnceLock;

/// Cached result of the debug mode check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `TIMETRACK_DEBUG` or `RUST_LOG` is set.
///
/// The environment is only inspected on the first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TIMETRACK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a plain message.
///
/// - **Debug Mode**: `tracing::info!`
/// - **Normal Mode**: `println!`
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints an error with a ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Debug-only message with a 🔍 prefix. Suppressed entirely in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
