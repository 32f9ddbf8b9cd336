use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NAME, PRODUCTION, STYLE_DIRECTIVE};
use crate::style::StyleDescriptor;

/// Settings a logger is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Route output to the quiet debug channel instead of the standard one
    #[serde(default)]
    pub production: bool,
    /// Text shown inside the brackets of the label
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub style: StyleDescriptor,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            production: false,
            name: default_name(),
            style: StyleDescriptor::default(),
        }
    }
}

impl LoggerConfig {
    /// Create a development config with the default label and style
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with the production flag taken from the build
    #[must_use]
    pub fn from_build() -> Self {
        Self::default().with_production(PRODUCTION)
    }

    /// Parse a config from JSON, filling missing fields with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid config object
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse logger config: {e}"))
    }

    #[must_use]
    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleDescriptor) -> Self {
        self.style = style;
        self
    }

    /// Label passed as the first console argument, e.g. `%c[holdmypics]`
    #[must_use]
    pub fn label_token(&self) -> String {
        format!("{STYLE_DIRECTIVE}[{}]", self.name)
    }
}
