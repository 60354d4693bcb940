//! Maven-only sections: the module set root and the pre/post builders.

use jobxml_emitters::Emit;
use jobxml_markup::MarkupBuilder;
use jobxml_model::{MavenPhase, Task};

use crate::document::ConfigMarkup;
use crate::error::Result;

impl ConfigMarkup<'_> {
    /// Emit the POM, goals and Maven build options, then the reporters.
    pub(crate) fn maven_root(&self, out: &mut MarkupBuilder) -> Result<()> {
        let settings = self.shape.require_maven("maven root")?;
        let job = self.job;
        tracing::debug!(pom = %settings.root_pom, goals = %settings.goals, "Emitting maven root");

        out.leaf("rootPOM", &settings.root_pom)?;
        out.leaf("goals", &settings.goals)?;
        out.leaf("mavenName", &settings.maven_name)?;
        out.leaf("mavenOpts", settings.maven_opts.as_deref().unwrap_or_default())?;
        out.leaf("aggregatorStyleBuild", true)?;
        out.leaf("incrementalBuild", settings.incremental_build)?;
        if let Some(local) = settings.local_repository {
            out.empty("localRepository", &[("class", local.locator_class())])?;
        }
        // Element name follows the host's spelling
        out.leaf("ignoreUpstremChanges", !settings.build_on_snapshot)?;
        out.leaf("archivingDisabled", settings.archiving_disabled)?;
        out.leaf("resolveDependencies", false)?;
        out.leaf("processPlugins", false)?;
        out.leaf("mavenValidationLevel", 0)?;

        out.element("reporters", &[], |out| {
            out.inject(job.raw.reporters.as_deref().unwrap_or_default())?;
            if let Some(mail) = job.mail_recipients() {
                out.element("hudson.maven.reporters.MavenMailer", &[], |out| {
                    out.leaf("recipients", mail.recipients.trim())?;
                    out.leaf("dontNotifyEveryUnstableBuild", !mail.notify_every_unstable_build)?;
                    out.leaf("sendToIndividuals", mail.send_to_individuals)?;
                    out.leaf("perModuleEmail", true)
                })?;
            }
            Ok(())
        })
    }

    /// Emit `prebuilders`, `postbuilders` and the post step threshold.
    pub(crate) fn maven_builders(&self, out: &mut MarkupBuilder) -> Result<()> {
        let settings = self.shape.require_maven("maven builders")?;
        let job = self.job;

        let unphased = job.steps.iter().filter(|step| step.phase.is_none()).count();
        if unphased > 0 {
            tracing::warn!(unphased, "Maven jobs only run build steps with a phase; skipping the rest");
        }

        self.phase_builders(out, "prebuilders", job.raw.prebuilders.as_deref(), MavenPhase::Pre, &job.pre_build_tasks)?;
        self.phase_builders(out, "postbuilders", job.raw.postbuilders.as_deref(), MavenPhase::Post, &job.post_build_tasks)?;

        let threshold = settings.run_post_steps_if;
        out.element("runPostStepsIfResult", &[], |out| {
            out.leaf("name", threshold.name())?;
            out.leaf("ordinal", threshold.ordinal())?;
            out.leaf("color", threshold.color())
        })?;
        Ok(())
    }

    fn phase_builders(
        &self,
        out: &mut MarkupBuilder,
        name: &str,
        raw: Option<&str>,
        phase: MavenPhase,
        tasks: &[Task],
    ) -> Result<()> {
        out.element(name, &[], |out| {
            out.inject(raw.unwrap_or_default())?;
            for step in self.job.steps.iter().filter(|step| step.phase == Some(phase)) {
                step.emit(out)?;
            }
            for task in tasks {
                task.emit(out)?;
            }
            Ok(())
        })
    }
}
