//! The job model root and its section-presence predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::maven::MavenSettings;
use crate::parameter::Parameter;
use crate::publisher::{ArtifactRepository, DeploySettings, DownstreamTrigger, MailSettings};
use crate::scm::ScmSelection;
use crate::task::{BuildStep, Task};
use crate::trigger::Trigger;

/// Kind of job, which decides the overall document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    /// A free-style project built from a list of build steps
    #[default]
    Freestyle,
    /// A Maven module set driven by a POM
    Maven,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Freestyle => write!(f, "freestyle"),
            Self::Maven => write!(f, "maven"),
        }
    }
}

/// How long build records and artifacts are kept.
///
/// Each threshold is independent; `None` means "not configured".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Retention {
    /// Days to keep build records
    pub days_to_keep: Option<u32>,
    /// Number of build records to keep
    pub num_to_keep: Option<u32>,
    /// Days to keep artifacts
    pub artifact_days_to_keep: Option<u32>,
    /// Number of builds whose artifacts are kept
    pub artifact_num_to_keep: Option<u32>,
}

impl Retention {
    /// True when at least one threshold is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.days_to_keep.is_some()
            || self.num_to_keep.is_some()
            || self.artifact_days_to_keep.is_some()
            || self.artifact_num_to_keep.is_some()
    }
}

/// Pre-rendered XML fragments injected verbatim into their sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSections {
    /// Children of `<properties>`
    pub properties: Option<String>,
    /// Used as the SCM section when no SCM strategy is selected
    pub scm: Option<String>,
    /// Children of `<publishers>`, before generated publishers
    pub publishers: Option<String>,
    /// Children of `<buildWrappers>`
    pub build_wrappers: Option<String>,
    /// Children of the Maven `<reporters>` element
    pub reporters: Option<String>,
    /// Children of `<prebuilders>`, before generated steps
    pub prebuilders: Option<String>,
    /// Children of `<postbuilders>`, before generated steps
    pub postbuilders: Option<String>,
}

/// Full description of one CI job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobModel {
    /// Job name as known to the CI host
    pub name: String,
    /// Shape of the job
    pub job_type: JobType,
    /// Optional display name shown instead of `name`
    pub display_name: Option<String>,
    /// Free-text description, may contain HTML
    pub description: Option<String>,
    /// Where this job definition came from (file, build, tool)
    pub generated_from: String,
    /// Build record retention
    pub retention: Retention,
    /// Node label expression the job is restricted to
    pub assigned_node: Option<String>,
    /// Whether the job is disabled
    pub disabled: bool,
    /// Block while a downstream project is building
    pub block_on_downstream: bool,
    /// Block while an upstream project is building
    pub block_on_upstream: bool,
    /// Quiet period in seconds
    pub quiet_period: u32,
    /// Number of SCM checkout retries
    pub scm_checkout_retry_count: u32,
    /// Name of the JDK installation
    pub jdk: Option<String>,
    /// Token for triggering builds remotely
    pub auth_token: Option<String>,
    /// Build steps in declaration order
    pub steps: Vec<BuildStep>,
    /// Tasks run before the Maven build
    pub pre_build_tasks: Vec<Task>,
    /// Tasks run after the Maven build
    pub post_build_tasks: Vec<Task>,
    /// Build triggers
    pub triggers: Vec<Trigger>,
    /// Build parameters
    pub parameters: Vec<Parameter>,
    /// SCM strategy and repositories
    pub scm: Option<ScmSelection>,
    /// Source-hosting project page
    pub project_url: Option<String>,
    /// Maven settings, required for Maven jobs
    pub maven: Option<MavenSettings>,
    /// E-mail notification settings
    pub mail: Option<MailSettings>,
    /// Maven repository deployment
    pub deploy: Option<DeploySettings>,
    /// Artifact repository (Artifactory) deployment
    pub artifact_repository: Option<ArtifactRepository>,
    /// Downstream jobs triggered after this one
    pub downstream: Option<DownstreamTrigger>,
    /// Pre-rendered fragments
    pub raw: RawSections,
}

impl JobModel {
    /// Create an empty job of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, job_type: JobType) -> Self {
        Self {
            name: name.into(),
            job_type,
            ..Self::default()
        }
    }

    /// True for Maven jobs.
    #[must_use]
    pub fn is_maven(&self) -> bool {
        self.job_type == JobType::Maven
    }

    /// Display name, if one is set and non-empty.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.display_name.as_deref())
    }

    /// Assigned node, if one is set and non-empty.
    #[must_use]
    pub fn assigned_node(&self) -> Option<&str> {
        non_empty(self.assigned_node.as_deref())
    }

    /// Whether the log rotator section is emitted.
    #[must_use]
    pub const fn has_log_rotator(&self) -> bool {
        self.retention.is_configured()
    }

    /// Whether the job may run on any node.
    #[must_use]
    pub fn can_roam(&self) -> bool {
        self.assigned_node().is_none()
    }

    /// Mail settings, if recipients are configured.
    #[must_use]
    pub fn mail_recipients(&self) -> Option<&MailSettings> {
        self.mail
            .as_ref()
            .filter(|mail| !mail.recipients.trim().is_empty())
    }

    /// Whether the free-style mailer publisher is emitted.
    #[must_use]
    pub fn has_mailer(&self) -> bool {
        !self.is_maven() && self.mail_recipients().is_some()
    }

    /// Deploy settings, if a deploy URL is configured.
    #[must_use]
    pub fn deploy_target(&self) -> Option<&DeploySettings> {
        self.deploy.as_ref().filter(|deploy| !deploy.url.trim().is_empty())
    }

    /// Whether the Maven redeploy publisher is emitted.
    #[must_use]
    pub fn has_deploy(&self) -> bool {
        self.is_maven() && self.deploy_target().is_some()
    }

    /// Artifact repository settings, if a repository name is configured.
    #[must_use]
    pub fn artifact_repository_target(&self) -> Option<&ArtifactRepository> {
        self.artifact_repository
            .as_ref()
            .filter(|repo| !repo.name.trim().is_empty())
    }

    /// Whether the artifact repository publisher is emitted.
    #[must_use]
    pub fn has_artifact_repository(&self) -> bool {
        self.is_maven() && self.artifact_repository_target().is_some()
    }

    /// Downstream trigger settings, if any downstream project is configured.
    #[must_use]
    pub fn downstream_target(&self) -> Option<&DownstreamTrigger> {
        self.downstream
            .as_ref()
            .filter(|downstream| downstream.projects.iter().any(|p| !p.trim().is_empty()))
    }

    /// Whether the parameterized downstream trigger is emitted.
    #[must_use]
    pub fn has_downstream_trigger(&self) -> bool {
        self.downstream_target().is_some()
    }

    /// Whether the parameter definitions holder is emitted.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Project URL, if set and non-empty.
    #[must_use]
    pub fn project_url(&self) -> Option<&str> {
        non_empty(self.project_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
