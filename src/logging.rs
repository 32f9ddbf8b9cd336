/// Labelled console logging through the process-wide logger
///
/// The `log!` macro converts each argument into a host console value and
/// forwards them, after the styled `[holdmypics]` label, to [`crate::logger`].
///
/// Output goes to:
/// - `console.log` in debug builds, or when the `console_logging` feature is
///   explicitly enabled
/// - `console.debug` in production (release) builds
///
/// # Examples
///
/// ```rust
/// use holdmypics_log::log;
///
/// log!("Image generated:", "300x200");
/// log!("Request took", 12.5, "ms");
///
/// let path = String::from("/api/300x200.png");
/// log!("Serving", &path);
/// ```
#[macro_export]
macro_rules! log {
    () => {
        $crate::logger().log(::std::iter::empty())
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::logger().log([$($crate::host_console::to_host_value($arg)),+])
    };
}

pub use log;
