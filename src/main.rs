#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::suspicious)]
use holdmypics_log::log;

fn main() {
    console_error_panic_hook::set_once();
    log!("client ready", env!("CARGO_PKG_VERSION"));
}
