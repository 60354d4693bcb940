//! Git SCM strategy.

use jobxml_markup::MarkupBuilder;
use jobxml_model::ScmRepository;

use super::ScmStrategy;
use crate::error::{EmitError, EmitResult};

/// Branch spec used when a repository names no branch
const DEFAULT_BRANCH: &str = "**";

/// Renders `hudson.plugins.git.GitSCM`.
///
/// Every repository becomes a remote; branches are collected from all
/// repositories in order, without duplicates. The first repository's
/// `local_dir` becomes the relative checkout directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitStrategy;

impl ScmStrategy for GitStrategy {
    fn name(&self) -> &'static str {
        "git"
    }

    fn description(&self) -> &'static str {
        "Git repositories via the git plugin"
    }

    fn emit(&self, repositories: &[ScmRepository], out: &mut MarkupBuilder) -> EmitResult<()> {
        let Some(first) = repositories.first() else {
            return Err(EmitError::missing("git", "repositories"));
        };
        if repositories.iter().any(|repo| repo.url.trim().is_empty()) {
            return Err(EmitError::missing("git", "url"));
        }

        let mut branches: Vec<&str> = Vec::new();
        for repo in repositories {
            let branch = repo
                .branch
                .as_deref()
                .filter(|b| !b.trim().is_empty())
                .unwrap_or(DEFAULT_BRANCH);
            if !branches.contains(&branch) {
                branches.push(branch);
            }
        }

        out.element(
            "scm",
            &[("class", "hudson.plugins.git.GitSCM"), ("plugin", "git")],
            |out| {
                out.leaf("configVersion", 2)?;
                out.element("userRemoteConfigs", &[], |out| {
                    for repo in repositories {
                        out.element("hudson.plugins.git.UserRemoteConfig", &[], |out| {
                            if let Some(name) = repo.name.as_deref() {
                                out.leaf("name", name)?;
                            }
                            out.leaf("url", &repo.url)?;
                            if let Some(credentials) = repo.credentials_id.as_deref() {
                                out.leaf("credentialsId", credentials)?;
                            }
                            Ok::<(), EmitError>(())
                        })?;
                    }
                    Ok::<(), EmitError>(())
                })?;
                out.element("branches", &[], |out| {
                    for branch in &branches {
                        out.element("hudson.plugins.git.BranchSpec", &[], |out| {
                            out.leaf("name", branch)
                        })?;
                    }
                    Ok::<(), EmitError>(())
                })?;
                out.leaf("doGenerateSubmoduleConfigurations", false)?;
                out.empty("submoduleCfg", &[("class", "list")])?;
                out.element("extensions", &[], |out| {
                    if let Some(dir) = first.local_dir.as_deref().filter(|d| !d.trim().is_empty()) {
                        out.element(
                            "hudson.plugins.git.extensions.impl.RelativeTargetDirectory",
                            &[],
                            |out| out.leaf("relativeTargetDir", dir),
                        )?;
                    }
                    Ok::<(), EmitError>(())
                })?;
                Ok(())
            },
        )
    }
}
