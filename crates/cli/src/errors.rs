//! Error reporting for the jobxml CLI
//!
//! CLI errors carry miette diagnostics so failures print with codes, source
//! snippets and help text.

use std::path::PathBuf;

use jobxml_generator::GenerateError;
use jobxml_model::LoadError;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// CLI-specific error types with diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Failed to {operation} '{}'", path.display())]
    #[diagnostic(
        code(jobxml::cli::file_error),
        help("Check file permissions and ensure the path exists")
    )]
    FileError {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write generated output")]
    #[diagnostic(code(jobxml::cli::output_error))]
    OutputError {
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parsing failed: {message}")]
    #[diagnostic(code(jobxml::cli::config_parse_error))]
    ConfigParseError {
        message: String,
        #[source_code]
        src: miette::NamedSource<String>,
        #[label("error occurred here")]
        error_span: Option<SourceSpan>,
        #[help]
        help_text: Option<String>,
    },

    #[error("Invalid timestamp format '{format}'")]
    #[diagnostic(
        code(jobxml::cli::invalid_timestamp_format),
        help("Use chrono strftime specifiers, e.g. \"%Y-%m-%d %H:%M:%S\"")
    )]
    InvalidTimestampFormat { format: String },

    #[error("Tracing initialization failed for {config_used} output")]
    #[diagnostic(
        code(jobxml::cli::tracing_error),
        help("Check RUST_LOG and the --level option")
    )]
    TracingError {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        config_used: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generate(#[from] GenerateError),
}

impl CliError {
    pub fn file_error(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileError {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_error(
        config_file: impl AsRef<str>,
        src: impl Into<String>,
        error: &toml::de::Error,
    ) -> Self {
        Self::ConfigParseError {
            message: error.message().to_string(),
            src: miette::NamedSource::new(config_file, src.into()),
            error_span: error.span().map(SourceSpan::from),
            help_text: Some(
                "Valid keys are indent, line_separator (lf | crlf) and timestamp_format".to_string(),
            ),
        }
    }

    pub fn tracing(
        source: impl std::error::Error + Send + Sync + 'static,
        config_used: impl Into<String>,
    ) -> Self {
        Self::TracingError {
            source: Box::new(source),
            config_used: config_used.into(),
        }
    }
}
