//! Assembly of one job document.
//!
//! [`ConfigMarkup`] holds everything a single run needs and walks the
//! sections in their fixed order. Each section lives in its own module under
//! `sections/` as an `impl ConfigMarkup` block.

use jobxml_emitters::{DescriptionTable, ScmRegistry};
use jobxml_markup::MarkupBuilder;
use jobxml_model::JobModel;

use crate::error::Result;
use crate::options::GenerateOptions;
use crate::shape::JobShape;

/// Per-run state of the document assembly.
pub(crate) struct ConfigMarkup<'a> {
    pub(crate) job: &'a JobModel,
    pub(crate) options: &'a GenerateOptions,
    pub(crate) shape: JobShape<'a>,
    pub(crate) scm: &'a ScmRegistry,
    pub(crate) description_table: &'a dyn DescriptionTable,
}

impl<'a> ConfigMarkup<'a> {
    pub(crate) fn new(
        job: &'a JobModel,
        options: &'a GenerateOptions,
        scm: &'a ScmRegistry,
        description_table: &'a dyn DescriptionTable,
    ) -> Result<Self> {
        Ok(Self {
            job,
            options,
            shape: JobShape::resolve(job)?,
            scm,
            description_table,
        })
    }

    /// Render the whole document.
    pub(crate) fn render(&self) -> Result<String> {
        let mut out = MarkupBuilder::new(
            self.options.indent.as_str(),
            self.options.line_separator.as_str(),
        );
        self.preamble(&mut out)?;
        out.element(self.shape.root_element(), &[], |out| self.sections(out))?;
        Ok(out.finish()?)
    }

    fn sections(&self, out: &mut MarkupBuilder) -> Result<()> {
        out.empty("actions", &[])?;
        self.description(out)?;
        if let Some(display_name) = self.job.display_name() {
            out.leaf("displayName", display_name)?;
        }
        self.log_rotator(out)?;
        out.leaf("keepDependencies", false)?;
        self.properties(out)?;
        self.scm_section(out)?;
        self.job_settings(out)?;
        self.triggers(out)?;
        out.leaf("concurrentBuild", false)?;

        match self.shape {
            JobShape::Maven(_) => self.maven_root(out)?,
            JobShape::Freestyle => self.builders(out)?,
        }

        self.publishers(out)?;
        out.element("buildWrappers", &[], |out| {
            out.inject(self.job.raw.build_wrappers.as_deref().unwrap_or_default())
        })?;

        // Pre and post builders follow publishers for Maven jobs
        if let JobShape::Maven(_) = self.shape {
            self.maven_builders(out)?;
        }
        Ok(())
    }

    fn preamble(&self, out: &mut MarkupBuilder) -> Result<()> {
        let source = self.generation_source();
        let banner = format!("Generated by jobxml from {source}. Do not edit.");
        let separator = "=".repeat(banner.len());

        out.declaration()?;
        out.comment(&separator)?;
        out.comment(&banner)?;
        out.comment(&separator)?;
        Ok(())
    }

    pub(crate) fn generation_source(&self) -> &str {
        let source = self.job.generated_from.trim();
        if source.is_empty() { "an unnamed job model" } else { source }
    }

    fn log_rotator(&self, out: &mut MarkupBuilder) -> Result<()> {
        if !self.job.has_log_rotator() {
            return Ok(());
        }
        let retention = &self.job.retention;
        let threshold = |value: Option<u32>| value.map_or(-1, i64::from);

        out.element("logRotator", &[("class", "hudson.tasks.LogRotator")], |out| {
            out.leaf("daysToKeep", threshold(retention.days_to_keep))?;
            out.leaf("numToKeep", threshold(retention.num_to_keep))?;
            out.leaf("artifactDaysToKeep", threshold(retention.artifact_days_to_keep))?;
            out.leaf("artifactNumToKeep", threshold(retention.artifact_num_to_keep))
        })?;
        Ok(())
    }

    fn job_settings(&self, out: &mut MarkupBuilder) -> Result<()> {
        let job = self.job;
        out.leaf("quietPeriod", job.quiet_period)?;
        out.leaf("scmCheckoutRetryCount", job.scm_checkout_retry_count)?;
        out.leaf("assignedNode", job.assigned_node().unwrap_or_default())?;
        out.leaf("canRoam", job.can_roam())?;
        out.leaf("disabled", job.disabled)?;
        out.leaf("blockBuildWhenDownstreamBuilding", job.block_on_downstream)?;
        out.leaf("blockBuildWhenUpstreamBuilding", job.block_on_upstream)?;
        out.leaf("jdk", job.jdk.as_deref().unwrap_or_default())?;
        out.leaf("authToken", job.auth_token.as_deref().unwrap_or_default())?;
        Ok(())
    }
}
