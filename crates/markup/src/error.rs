//! Errors raised while assembling markup.

use miette::Diagnostic;
use thiserror::Error;

/// Error types for markup assembly
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum MarkupError {
    /// A scope was closed while a deeper element was still open
    #[error("cannot close element at depth {depth}: innermost open element is '{open}'")]
    #[diagnostic(code(jobxml::markup::unbalanced_end))]
    UnbalancedEnd {
        /// Depth recorded in the scope handle
        depth: usize,
        /// Name of the innermost open element
        open: String,
    },

    /// Text or raw content was written after child elements, or vice versa
    #[error("element '{element}' cannot mix text and child elements")]
    #[diagnostic(code(jobxml::markup::mixed_content))]
    MixedContent {
        /// Element receiving the conflicting content
        element: String,
    },

    /// The document was finished with elements still open
    #[error("document finished with element '{element}' still open")]
    #[diagnostic(code(jobxml::markup::unclosed))]
    Unclosed {
        /// Innermost element left open
        element: String,
    },

    /// Content was written outside of any element
    #[error("no element is open to receive content")]
    #[diagnostic(code(jobxml::markup::no_open_element))]
    NoOpenElement,

    /// The element or attribute name is not a valid XML name
    #[error("'{name}' is not a valid XML name")]
    #[diagnostic(
        code(jobxml::markup::invalid_name),
        help("names start with a letter or '_' and contain only letters, digits, '-', '_', '.' or ':'")
    )]
    InvalidName {
        /// The offending name
        name: String,
    },

    /// The underlying XML writer failed
    #[error("failed to write XML: {message}")]
    #[diagnostic(code(jobxml::markup::write))]
    Write {
        /// Writer error message
        message: String,
    },
}

impl From<quick_xml::Error> for MarkupError {
    fn from(error: quick_xml::Error) -> Self {
        Self::Write {
            message: error.to_string(),
        }
    }
}

/// Result type for markup operations
pub type Result<T> = std::result::Result<T, MarkupError>;
