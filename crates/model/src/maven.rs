//! Maven module set settings.

use serde::{Deserialize, Serialize};

/// Where a Maven build keeps its local repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalRepository {
    /// One repository per job
    PerJob,
    /// One repository per executor
    PerExecutor,
}

impl LocalRepository {
    /// Locator class written on the `localRepository` element.
    #[must_use]
    pub const fn locator_class(self) -> &'static str {
        match self {
            Self::PerJob => "hudson.maven.local_repo.PerJobLocalRepositoryLocator",
            Self::PerExecutor => "hudson.maven.local_repo.PerExecutorLocalRepositoryLocator",
        }
    }
}

/// Build result threshold for running Maven post steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStepsResult {
    /// Only when the build succeeded
    Success,
    /// When the build succeeded or is unstable
    Unstable,
    /// Regardless of the build result
    #[default]
    Failure,
}

impl PostStepsResult {
    /// Result name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Unstable => "UNSTABLE",
            Self::Failure => "FAILURE",
        }
    }

    /// Result ordinal
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Unstable => 1,
            Self::Failure => 2,
        }
    }

    /// Ball color associated with the result
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "BLUE",
            Self::Unstable => "YELLOW",
            Self::Failure => "RED",
        }
    }
}

/// Settings of a Maven module set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MavenSettings {
    /// Path of the root POM
    pub root_pom: String,
    /// Goals and options
    pub goals: String,
    /// Maven installation name
    pub maven_name: String,
    /// `MAVEN_OPTS`
    pub maven_opts: Option<String>,
    /// Build only changed modules
    pub incremental_build: bool,
    /// Private local repository, if requested
    pub local_repository: Option<LocalRepository>,
    /// Trigger on SNAPSHOT dependency builds
    pub build_on_snapshot: bool,
    /// Skip artifact archiving
    pub archiving_disabled: bool,
    /// When post steps run
    pub run_post_steps_if: PostStepsResult,
}

impl Default for MavenSettings {
    fn default() -> Self {
        Self {
            root_pom: "pom.xml".to_string(),
            goals: "clean install".to_string(),
            maven_name: String::new(),
            maven_opts: None,
            incremental_build: false,
            local_repository: None,
            build_on_snapshot: true,
            archiving_disabled: false,
            run_post_steps_if: PostStepsResult::default(),
        }
    }
}
