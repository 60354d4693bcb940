//! Errors raised while loading a job definition.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for job loading
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read job definition {}", path.display())]
    #[diagnostic(code(jobxml::model::io))]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The YAML document does not describe a job
    #[error("invalid YAML job definition: {0}")]
    #[diagnostic(code(jobxml::model::yaml))]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document does not describe a job
    #[error("invalid JSON job definition: {0}")]
    #[diagnostic(code(jobxml::model::json))]
    Json(#[from] serde_json::Error),

    /// The TOML document does not describe a job
    #[error("invalid TOML job definition: {0}")]
    #[diagnostic(code(jobxml::model::toml))]
    Toml(#[from] toml::de::Error),

    /// The file extension does not map to a known format
    #[error("unsupported job definition format '{extension}'")]
    #[diagnostic(
        code(jobxml::model::unsupported_format),
        help("use a .yaml, .yml, .json or .toml file")
    )]
    UnsupportedFormat {
        /// Extension found on the path
        extension: String,
    },
}

/// Result type for job loading
pub type Result<T> = std::result::Result<T, LoadError>;
