use crate::libs::messages::macros::{is_debug_mode, route_to_tracing};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used by `ltodo serve` when `RUST_LOG` is not set.
pub const SERVER_LOG_FILTER: &str = "ltodo=info,tower_http=info";

/// Filter for client commands running in debug mode.
pub const DEBUG_LOG_FILTER: &str = "ltodo=debug";

/// Installs the global tracing subscriber.
///
/// The server always logs, and its message macros (migration progress
/// included) go through the subscriber as well. Client commands only log
/// when debug mode is on; otherwise the message macros print straight to the
/// terminal and no subscriber is needed. Calling this twice is harmless.
pub fn init(server: bool) {
    if server {
        route_to_tracing();
    } else if !is_debug_mode() {
        return;
    }
    let default_filter = if server { SERVER_LOG_FILTER } else { DEBUG_LOG_FILTER };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
