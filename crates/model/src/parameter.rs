//! Build parameter definitions.

use serde::{Deserialize, Serialize};

/// A build parameter.
///
/// `ExternalTracker` is not a parameter definition on the host side: it is a
/// job property linking the job to an issue tracker site, and is written next
/// to the parameter definitions rather than inside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parameter {
    /// Free text on one line
    String {
        /// Parameter name
        name: String,
        /// Default value
        #[serde(default)]
        default: Option<String>,
        /// Help text
        #[serde(default)]
        description: Option<String>,
    },
    /// Multi-line text
    Text {
        /// Parameter name
        name: String,
        /// Default value
        #[serde(default)]
        default: Option<String>,
        /// Help text
        #[serde(default)]
        description: Option<String>,
    },
    /// A checkbox
    Boolean {
        /// Parameter name
        name: String,
        /// Default value
        #[serde(default)]
        default: bool,
        /// Help text
        #[serde(default)]
        description: Option<String>,
    },
    /// One of a fixed list; the first choice is the default
    Choice {
        /// Parameter name
        name: String,
        /// Allowed values
        choices: Vec<String>,
        /// Help text
        #[serde(default)]
        description: Option<String>,
    },
    /// A masked value
    Password {
        /// Parameter name
        name: String,
        /// Default value
        #[serde(default)]
        default: Option<String>,
        /// Help text
        #[serde(default)]
        description: Option<String>,
    },
    /// Issue tracker site link
    ExternalTracker {
        /// Configured tracker site name
        site_name: String,
    },
}

impl Parameter {
    /// Parameter name; tracker links are named after their site.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::String { name, .. }
            | Self::Text { name, .. }
            | Self::Boolean { name, .. }
            | Self::Choice { name, .. }
            | Self::Password { name, .. } => name,
            Self::ExternalTracker { site_name } => site_name,
        }
    }

    /// Short kind label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Text { .. } => "text",
            Self::Boolean { .. } => "boolean",
            Self::Choice { .. } => "choice",
            Self::Password { .. } => "password",
            Self::ExternalTracker { .. } => "external-tracker",
        }
    }

    /// Help text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::String { description, .. }
            | Self::Text { description, .. }
            | Self::Boolean { description, .. }
            | Self::Choice { description, .. }
            | Self::Password { description, .. } => description.as_deref(),
            Self::ExternalTracker { .. } => None,
        }
    }

    /// Default value as displayed to users. Passwords are never shown.
    #[must_use]
    pub fn display_default(&self) -> String {
        match self {
            Self::String { default, .. } | Self::Text { default, .. } => {
                default.clone().unwrap_or_default()
            }
            Self::Boolean { default, .. } => default.to_string(),
            Self::Choice { choices, .. } => choices.first().cloned().unwrap_or_default(),
            Self::Password { default, .. } => {
                if default.is_some() { "****".to_string() } else { String::new() }
            }
            Self::ExternalTracker { .. } => String::new(),
        }
    }

    /// True for issue tracker links.
    #[must_use]
    pub const fn is_external_tracker(&self) -> bool {
        matches!(self, Self::ExternalTracker { .. })
    }
}
