//! Errors raised while generating a job document.

use jobxml_emitters::EmitError;
use jobxml_markup::MarkupError;
use jobxml_model::JobType;
use miette::Diagnostic;
use thiserror::Error;

/// Error types for document generation
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    /// A generation argument is empty
    #[error("generation argument '{argument}' must not be empty")]
    #[diagnostic(code(jobxml::generate::missing_argument))]
    MissingArgument {
        /// Name of the argument
        argument: &'static str,
    },

    /// A section reserved for one job type was requested for another
    #[error("section '{section}' is only valid for {expected} jobs, not {actual}")]
    #[diagnostic(code(jobxml::generate::job_type_mismatch))]
    JobTypeMismatch {
        /// Section being emitted
        section: &'static str,
        /// Job type the section belongs to
        expected: JobType,
        /// Job type of the model
        actual: JobType,
    },

    /// A mandatory section lacks data
    #[error("section '{section}' requires '{field}'")]
    #[diagnostic(code(jobxml::generate::missing_field))]
    MissingField {
        /// Section being emitted
        section: &'static str,
        /// Field that is missing
        field: &'static str,
    },

    /// The job selects an SCM strategy nobody registered
    #[error("unknown SCM strategy '{name}'")]
    #[diagnostic(
        code(jobxml::generate::unknown_scm_strategy),
        help("available strategies: {available}")
    )]
    UnknownScmStrategy {
        /// Requested strategy
        name: String,
        /// Comma separated registered names
        available: String,
    },

    /// A sub-emitter failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Emit(EmitError),

    /// The markup sink rejected an operation
    #[error(transparent)]
    #[diagnostic(transparent)]
    Markup(#[from] MarkupError),
}

impl From<EmitError> for GenerateError {
    fn from(error: EmitError) -> Self {
        match error {
            EmitError::UnknownStrategy { name, available } => {
                Self::UnknownScmStrategy { name, available }
            }
            EmitError::Markup(markup) => Self::Markup(markup),
            other => Self::Emit(other),
        }
    }
}

/// Result type for document generation
pub type Result<T> = std::result::Result<T, GenerateError>;
