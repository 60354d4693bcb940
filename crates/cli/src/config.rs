//! Generator configuration from `jobxml.toml` and command line overrides.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use jobxml_generator::GenerateOptions;
use serde::Deserialize;

use crate::errors::CliError;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "jobxml.toml";

/// Line separator choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineSeparator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Settings applied to every generated document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub indent: String,
    pub line_separator: LineSeparator,
    pub timestamp_format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            line_separator: LineSeparator::Lf,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

/// Command line overrides of the configuration file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub indent: Option<String>,
    pub line_separator: Option<LineSeparator>,
    pub timestamp: Option<String>,
}

impl GeneratorConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `jobxml.toml` in the working
    /// directory is used when present and the defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.is_file() {
                    tracing::debug!("No {CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| CliError::file_error("read", &path, e))?;
        let config = Self::parse(&path.display().to_string(), &content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded generator configuration");
        Ok(config)
    }

    /// Parse configuration text; `source` names it in diagnostics.
    pub fn parse(source: &str, content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::config_parse_error(source, content, &e))
    }

    /// Apply command line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(indent) = &overrides.indent {
            self.indent.clone_from(indent);
        }
        if let Some(line_separator) = overrides.line_separator {
            self.line_separator = line_separator;
        }
        self
    }

    /// Current local time in the configured format.
    pub fn timestamp(&self) -> Result<String, CliError> {
        let mut timestamp = String::new();
        write!(timestamp, "{}", chrono::Local::now().format(&self.timestamp_format)).map_err(|_| {
            CliError::InvalidTimestampFormat {
                format: self.timestamp_format.clone(),
            }
        })?;
        Ok(timestamp)
    }

    /// Generation options for one run.
    ///
    /// An explicit timestamp wins over the formatted current time.
    pub fn generate_options(&self, timestamp: Option<&str>) -> Result<GenerateOptions, CliError> {
        let timestamp = match timestamp {
            Some(timestamp) => timestamp.to_string(),
            None => self.timestamp()?,
        };
        Ok(GenerateOptions::new(
            timestamp,
            self.indent.as_str(),
            self.line_separator.as_str(),
        ))
    }
}
