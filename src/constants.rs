/// Name shown in the bracketed console label
pub const DEFAULT_NAME: &str = "holdmypics";

/// Declarations making up the label badge, in render order
pub const DEFAULT_STYLE_DECLARATIONS: [&str; 5] = [
    "border-radius: 0.3em;",
    "font-weight: 700;",
    "padding: 2px 0.33em;",
    "background-color: #1273d7;",
    "color: #fff;",
];

/// Console format directive that applies the next argument as CSS
pub const STYLE_DIRECTIVE: &str = "%c";

/// Whether this build counts as a production build
///
/// Release builds are production builds unless the `console_logging` feature
/// is enabled, in which case output stays on the standard channel.
pub const PRODUCTION: bool = !cfg!(any(debug_assertions, feature = "console_logging"));
