//! Message display macros.
//!
//! Every macro prints a [`Message`](super::Message) (or anything that
//! implements `Display`). In debug mode the text goes through `tracing`
//! instead of plain stdout/stderr, so CLI output and server logs end up in
//! the same stream.
//!
//! Debug mode is on when `LTODO_DEBUG` or `RUST_LOG` is set. The check is
//! cached on first use. The server turns it on unconditionally through
//! [`route_to_tracing`] so that its output only ever goes through `tracing`.
//!
//! ```rust
//! use ltodo::{msg_info, msg_success, msg_error};
//! use ltodo::libs::messages::Message;
//!
//! msg_success!(Message::TodoCreated("Buy milk".to_string()));
//! msg_info!(Message::NoTodosYet, true);
//! msg_error!(Message::LoadTodosFailed);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("LTODO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Sends every message macro to `tracing` for the rest of the process.
///
/// Returns whether messages now go to `tracing`. Once any macro has run the
/// mode is fixed, so calling this late has no effect.
pub fn route_to_tracing() -> bool {
    DEBUG_MODE.set(true).is_ok() || is_debug_mode()
}

/// Shared body of the display macros: `tracing` at `$level` in debug mode,
/// `$print` otherwise.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $fmt:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!($fmt, $msg);
        } else {
            $print!($fmt, $msg);
        }
    };
}

/// Prints a message as-is. Pass `true` as second argument to pad it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n✅ {}\n", $msg)
    };
}

/// Error line on stderr. Client commands use it for failed API calls.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "\n❌ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, eprintln, "⚠️ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\nℹ️ {}\n", $msg)
    };
}

/// Only emitted in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
