//! Per-run generation arguments.

use crate::error::{GenerateError, Result};

/// Arguments of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Timestamp shown in the description banner
    pub timestamp: String,
    /// Indent unit
    pub indent: String,
    /// Line separator
    pub line_separator: String,
}

impl GenerateOptions {
    /// Create options from the three required arguments.
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        indent: impl Into<String>,
        line_separator: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            indent: indent.into(),
            line_separator: line_separator.into(),
        }
    }

    /// Check that every argument is non-empty.
    ///
    /// # Errors
    /// Returns [`GenerateError::MissingArgument`] naming the first empty one.
    pub fn validate(&self) -> Result<()> {
        for (argument, value) in [
            ("timestamp", &self.timestamp),
            ("indent", &self.indent),
            ("line_separator", &self.line_separator),
        ] {
            if value.is_empty() {
                return Err(GenerateError::MissingArgument { argument });
            }
        }
        Ok(())
    }
}
