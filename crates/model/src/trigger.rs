//! Build triggers.

use serde::{Deserialize, Serialize};

/// Which plugin handles a trigger.
///
/// Written as a plain string: `timer`, `scm_poll`, or a fully qualified
/// trigger class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerKind {
    /// Periodic build on a cron schedule
    Timer,
    /// Poll the SCM on a cron schedule
    ScmPoll,
    /// Any other trigger, identified by its fully qualified class
    Class(String),
}

impl TriggerKind {
    /// Class identifier used as the trigger's element name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        match self {
            Self::Timer => "hudson.triggers.TimerTrigger",
            Self::ScmPoll => "hudson.triggers.SCMTrigger",
            Self::Class(class) => class,
        }
    }
}

impl From<String> for TriggerKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "timer" => Self::Timer,
            "scm_poll" => Self::ScmPoll,
            _ => Self::Class(value),
        }
    }
}

impl From<TriggerKind> for String {
    fn from(kind: TriggerKind) -> Self {
        match kind {
            TriggerKind::Timer => "timer".to_string(),
            TriggerKind::ScmPoll => "scm_poll".to_string(),
            TriggerKind::Class(class) => class,
        }
    }
}

/// A build trigger with its schedule expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Trigger plugin
    pub kind: TriggerKind,
    /// Schedule expression, e.g. `H 2 * * *`. Push-style triggers leave it empty.
    #[serde(default)]
    pub spec: String,
    /// Human readable description, written as a comment above the expression
    #[serde(default)]
    pub description: Option<String>,
}

impl Trigger {
    /// Create a trigger without a description.
    #[must_use]
    pub fn new(kind: TriggerKind, spec: impl Into<String>) -> Self {
        Self {
            kind,
            spec: spec.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
