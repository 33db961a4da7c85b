//! Tracing subscriber setup.
//!
//! Output macros only route through `tracing` in debug mode, so the
//! subscriber is installed only then. `RUST_LOG` selects the filter; with
//! just `WORKTIME_DEBUG` set everything from this crate down to `debug` is
//! shown.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

const DEFAULT_FILTER: &str = "worktime=debug";

/// Installs the global subscriber when debug mode is on.
///
/// Returns `true` when a subscriber was installed by this call.
pub fn init() -> bool {
    if !is_debug_mode() {
        return false;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
