//! Build tasks and build steps.

use serde::{Deserialize, Serialize};

/// A single build task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Task {
    /// Run a shell script
    Shell {
        /// Script body
        command: String,
    },
    /// Run a Windows batch script
    Batch {
        /// Script body
        command: String,
    },
    /// Invoke Ant targets
    Ant {
        /// Space separated targets
        #[serde(default)]
        targets: String,
        /// Ant installation name
        #[serde(default)]
        ant_name: Option<String>,
        /// Build file path
        #[serde(default)]
        build_file: Option<String>,
        /// Properties in `key=value` lines
        #[serde(default)]
        properties: Option<String>,
    },
    /// Invoke top-level Maven targets
    Maven {
        /// Goals to run
        targets: String,
        /// Maven installation name
        #[serde(default)]
        maven_name: Option<String>,
        /// POM path
        #[serde(default)]
        pom: Option<String>,
        /// Properties in `key=value` lines
        #[serde(default)]
        properties: Option<String>,
    },
    /// Invoke a Gradle build
    Gradle {
        /// Tasks to run
        tasks: String,
        /// Extra switches
        #[serde(default)]
        switches: Option<String>,
        /// Use the project's wrapper instead of an installation
        #[serde(default)]
        use_wrapper: bool,
        /// Gradle installation name
        #[serde(default)]
        gradle_name: Option<String>,
    },
    /// A pre-rendered builder fragment
    Raw {
        /// XML fragment injected verbatim
        xml: String,
    },
}

impl Task {
    /// Short kind label, used in logs and the description table.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Shell { .. } => "shell",
            Self::Batch { .. } => "batch",
            Self::Ant { .. } => "ant",
            Self::Maven { .. } => "maven",
            Self::Gradle { .. } => "gradle",
            Self::Raw { .. } => "raw",
        }
    }

    /// True for script-based tasks.
    #[must_use]
    pub const fn is_scripted(&self) -> bool {
        matches!(self, Self::Shell { .. } | Self::Batch { .. })
    }
}

/// Phase of a Maven build a step is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MavenPhase {
    /// Runs before the Maven build
    Pre,
    /// Runs after the Maven build
    Post,
}

/// A build step: a task plus the Maven phase it belongs to, if any.
///
/// Free-style jobs run every step in declaration order. Maven jobs only run
/// steps flagged with a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStep {
    /// The task to run
    #[serde(flatten)]
    pub task: Task,
    /// Maven phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<MavenPhase>,
}

impl BuildStep {
    /// A step without a phase.
    #[must_use]
    pub const fn new(task: Task) -> Self {
        Self { task, phase: None }
    }

    /// A step attached to a Maven phase.
    #[must_use]
    pub const fn in_phase(task: Task, phase: MavenPhase) -> Self {
        Self {
            task,
            phase: Some(phase),
        }
    }

    /// Shorthand for a shell step.
    #[must_use]
    pub fn shell(command: impl Into<String>) -> Self {
        Self::new(Task::Shell {
            command: command.into(),
        })
    }
}
