//! Subversion SCM strategy.

use jobxml_markup::MarkupBuilder;
use jobxml_model::ScmRepository;

use super::ScmStrategy;
use crate::error::{EmitError, EmitResult};

/// Renders `hudson.scm.SubversionSCM`, one module location per repository.
///
/// A repository's `branch` is appended to its URL as a path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubversionStrategy;

impl SubversionStrategy {
    fn remote(repo: &ScmRepository) -> String {
        match repo.branch.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
            Some(branch) => format!(
                "{}/{}",
                repo.url.trim_end_matches('/'),
                branch.trim_start_matches('/')
            ),
            None => repo.url.clone(),
        }
    }
}

impl ScmStrategy for SubversionStrategy {
    fn name(&self) -> &'static str {
        "subversion"
    }

    fn description(&self) -> &'static str {
        "Subversion module locations via the subversion plugin"
    }

    fn emit(&self, repositories: &[ScmRepository], out: &mut MarkupBuilder) -> EmitResult<()> {
        if repositories.is_empty() {
            return Err(EmitError::missing("subversion", "repositories"));
        }
        if repositories.iter().any(|repo| repo.url.trim().is_empty()) {
            return Err(EmitError::missing("subversion", "url"));
        }

        out.element(
            "scm",
            &[("class", "hudson.scm.SubversionSCM"), ("plugin", "subversion")],
            |out| {
                out.element("locations", &[], |out| {
                    for repo in repositories {
                        out.element("hudson.scm.SubversionSCM_-ModuleLocation", &[], |out| {
                            out.leaf("remote", Self::remote(repo))?;
                            if let Some(credentials) = repo.credentials_id.as_deref() {
                                out.leaf("credentialsId", credentials)?;
                            }
                            out.leaf("local", repo.local_dir.as_deref().unwrap_or("."))?;
                            out.leaf("depthOption", "infinity")?;
                            out.leaf("ignoreExternalsOption", true)
                        })?;
                    }
                    Ok::<(), EmitError>(())
                })?;
                out.empty("excludedRegions", &[])?;
                out.empty("includedRegions", &[])?;
                out.empty("excludedUsers", &[])?;
                out.empty("excludedRevprop", &[])?;
                out.empty("excludedCommitMessages", &[])?;
                out.empty("workspaceUpdater", &[("class", "hudson.scm.subversion.UpdateUpdater")])?;
                out.leaf("ignoreDirPropChanges", false)?;
                out.leaf("filterChangelog", false)?;
                Ok(())
            },
        )
    }
}
