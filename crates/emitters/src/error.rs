//! Errors raised by sub-emitters.

use jobxml_markup::MarkupError;
use miette::Diagnostic;
use thiserror::Error;

/// Error types for emitter operations
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    /// The markup sink rejected an operation
    #[error(transparent)]
    #[diagnostic(transparent)]
    Markup(#[from] MarkupError),

    /// A field the emitter needs is empty
    #[error("{emitter} requires a non-empty '{field}'")]
    #[diagnostic(code(jobxml::emit::missing_field))]
    MissingField {
        /// Emitter reporting the problem
        emitter: &'static str,
        /// Field that is missing
        field: &'static str,
    },

    /// No SCM strategy is registered under the requested name
    #[error("unknown SCM strategy '{name}'. Available: {available}")]
    #[diagnostic(code(jobxml::emit::unknown_strategy))]
    UnknownStrategy {
        /// Requested strategy name
        name: String,
        /// Comma separated registered names
        available: String,
    },
}

impl EmitError {
    /// Shorthand for [`EmitError::MissingField`].
    #[must_use]
    pub const fn missing(emitter: &'static str, field: &'static str) -> Self {
        Self::MissingField { emitter, field }
    }
}

/// Result type for emitter operations
pub type EmitResult<T> = std::result::Result<T, EmitError>;
