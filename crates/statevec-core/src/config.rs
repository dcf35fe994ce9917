//! Formatting configuration for coordinate listings.
//!
//! [`format_coordinates`](crate::concept::format_coordinates) renders a vector
//! as one `name = value` line per coordinate. How the lines look is controlled
//! by a [`FormatConfig`], either built explicitly or taken from the
//! process-wide default.

use once_cell::sync::Lazy;
use std::sync::Arc;

/// How coordinates are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Digits after the decimal point, or `None` for the scalar's own formatting.
    pub precision: Option<usize>,
    /// Text between a coordinate name and its value.
    pub assignment: String,
    /// Text between two coordinates.
    pub separator: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            precision: None,
            assignment: " = ".to_string(),
            separator: "\n".to_string(),
        }
    }
}

/// Global default formatting configuration.
pub static FORMAT_CONFIG: Lazy<Arc<FormatConfig>> = Lazy::new(|| Arc::new(FormatConfig::default()));

/// Get the default formatting configuration.
pub fn format_config() -> &'static FormatConfig {
    &FORMAT_CONFIG
}

/// Builder for creating a custom formatting configuration.
pub struct FormatConfigBuilder {
    config: FormatConfig,
}

impl FormatConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: FormatConfig::default(),
        }
    }

    /// Render values with a fixed number of decimals.
    pub fn precision(mut self, digits: usize) -> Self {
        self.config.precision = Some(digits);
        self
    }

    /// Set the text placed between a name and its value.
    pub fn assignment<S: Into<String>>(mut self, assignment: S) -> Self {
        self.config.assignment = assignment.into();
        self
    }

    /// Set the text placed between coordinates.
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> FormatConfig {
        self.config
    }
}

impl Default for FormatConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
