//! Post-build publisher settings.

use serde::{Deserialize, Serialize};

/// E-mail notification settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    /// Whitespace separated recipient list
    pub recipients: String,
    /// Send a mail for every unstable build
    pub notify_every_unstable_build: bool,
    /// Also mail the people who broke the build
    pub send_to_individuals: bool,
}

/// Maven repository deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploySettings {
    /// Repository id, matched against `settings.xml` credentials
    pub id: Option<String>,
    /// Repository URL
    pub url: String,
    /// Assign unique versions to snapshots
    pub unique_version: bool,
    /// Deploy even if the build is unstable
    pub even_if_unstable: bool,
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            id: None,
            url: String::new(),
            unique_version: true,
            even_if_unstable: false,
        }
    }
}

/// Artifact repository server deployment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactRepository {
    /// Configured server name
    pub name: String,
    /// Repository key for releases
    pub release_repository: String,
    /// Repository key for snapshots; the release key when unset
    pub snapshot_repository: Option<String>,
    /// Deployer user name
    pub username: Option<String>,
    /// Deployer password, already scrambled
    pub password: Option<String>,
}

impl ArtifactRepository {
    /// Repository key used for snapshots.
    #[must_use]
    pub fn snapshot_key(&self) -> &str {
        self.snapshot_repository
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or(&self.release_repository)
    }
}

/// Build result required before downstream jobs are triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCondition {
    /// Stable builds only
    #[default]
    Success,
    /// Unstable builds only
    Unstable,
    /// Stable or unstable builds
    UnstableOrBetter,
    /// Unstable or failed builds
    UnstableOrWorse,
    /// Failed builds only
    Failed,
    /// Every build
    Always,
}

impl TriggerCondition {
    /// Condition code written to the document.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Unstable => "UNSTABLE",
            Self::UnstableOrBetter => "UNSTABLE_OR_BETTER",
            Self::UnstableOrWorse => "UNSTABLE_OR_WORSE",
            Self::Failed => "FAILED",
            Self::Always => "ALWAYS",
        }
    }
}

/// Downstream jobs triggered with parameters once this job finishes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownstreamTrigger {
    /// Jobs to trigger
    pub projects: Vec<String>,
    /// Required result
    pub condition: TriggerCondition,
    /// Trigger even when no parameters are passed
    pub trigger_with_no_parameters: bool,
    /// Pass this build's parameters along
    pub current_build_parameters: bool,
    /// `key=value` lines passed as parameters
    pub predefined_properties: Option<String>,
    /// Workspace file holding parameters
    pub properties_file: Option<String>,
    /// Pass the built git revision
    pub git_revision: bool,
    /// Pass the built subversion revision
    pub subversion_revision: bool,
}

impl DownstreamTrigger {
    /// Predefined properties, if set and non-empty.
    #[must_use]
    pub fn predefined_properties(&self) -> Option<&str> {
        self.predefined_properties
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }

    /// Properties file, if set and non-empty.
    #[must_use]
    pub fn properties_file(&self) -> Option<&str> {
        self.properties_file.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// True when any parameter-passing option is set.
    #[must_use]
    pub fn passes_parameters(&self) -> bool {
        self.current_build_parameters
            || self.predefined_properties().is_some()
            || self.properties_file().is_some()
            || self.git_revision
            || self.subversion_revision
    }

    /// Comma separated project list.
    #[must_use]
    pub fn project_list(&self) -> String {
        self.projects
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }
}
