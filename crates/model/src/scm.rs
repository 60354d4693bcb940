//! SCM selection: which strategy renders the SCM section, and for which repositories.

use serde::{Deserialize, Serialize};

/// One source repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScmRepository {
    /// Remote URL
    pub url: String,
    /// Branch (git) or path below the URL (subversion)
    pub branch: Option<String>,
    /// Remote name
    pub name: Option<String>,
    /// Stored credentials id
    pub credentials_id: Option<String>,
    /// Checkout directory relative to the workspace
    pub local_dir: Option<String>,
}

impl ScmRepository {
    /// Repository at `url` with defaults for everything else.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the branch.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

/// The SCM strategy selected for a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmSelection {
    /// Registered strategy name, e.g. `git` or `subversion`
    pub strategy: String,
    /// Repositories handed to the strategy
    #[serde(default)]
    pub repositories: Vec<ScmRepository>,
}

impl ScmSelection {
    /// Select `strategy` for `repositories`.
    #[must_use]
    pub fn new(strategy: impl Into<String>, repositories: Vec<ScmRepository>) -> Self {
        Self {
            strategy: strategy.into(),
            repositories,
        }
    }
}
