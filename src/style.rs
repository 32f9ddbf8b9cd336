use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STYLE_DECLARATIONS;

/// Ordered list of CSS declarations applied to the console label
///
/// Rendered as the declarations joined by single spaces. Serializes as a plain
/// array of declaration strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleDescriptor {
    declarations: Vec<String>,
}

impl StyleDescriptor {
    #[must_use]
    pub fn new<I, S>(declarations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declarations: declarations.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn declarations(&self) -> &[String] {
        &self.declarations
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render the declarations into the string handed to the console
    #[must_use]
    pub fn render(&self) -> String {
        self.declarations.join(" ")
    }
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_STYLE_DECLARATIONS)
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
