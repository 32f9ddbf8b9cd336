//! Styled console logging for the holdmypics front end.
//!
//! Every message is prefixed with a `%c[holdmypics]` badge and routed to
//! `console.log` during development or `console.debug` in production builds.

use std::sync::OnceLock;

pub mod config;
pub mod console;
pub mod constants;
pub mod logger;
pub mod logging;
pub mod style;

#[cfg(target_arch = "wasm32")]
#[path = "web_console.rs"]
pub mod host_console;

#[cfg(not(target_arch = "wasm32"))]
#[path = "std_console.rs"]
pub mod host_console;

pub use config::LoggerConfig;
pub use console::{Channel, Console, Recorder};
pub use host_console::{HostConsole, HostValue};
pub use logger::Logger;
pub use style::StyleDescriptor;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, configured from the build on first use
#[must_use]
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(&LoggerConfig::from_build(), HostConsole))
}
