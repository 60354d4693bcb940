//! The free-style `<builders>` section.

use jobxml_emitters::Emit;
use jobxml_markup::MarkupBuilder;

use crate::document::ConfigMarkup;
use crate::error::Result;

impl ConfigMarkup<'_> {
    /// Emit every build step, in declaration order.
    pub(crate) fn builders(&self, out: &mut MarkupBuilder) -> Result<()> {
        tracing::debug!(steps = self.job.steps.len(), "Emitting builders");
        out.element("builders", &[], |out| {
            for step in &self.job.steps {
                if let Some(phase) = step.phase {
                    tracing::warn!(?phase, kind = step.task.kind(), "Free-style jobs have no build phases; phase ignored");
                }
                step.emit(out)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use jobxml_model::{BuildStep, JobModel, JobType, MavenPhase, Task};

    use crate::sections::test_support::render_section;

    #[test]
    fn test_steps_in_declaration_order() {
        let mut job = JobModel::new("app", JobType::Freestyle);
        job.steps = vec![
            BuildStep::shell("./configure"),
            BuildStep::in_phase(
                Task::Batch {
                    command: "build.cmd".to_string(),
                },
                MavenPhase::Post,
            ),
        ];

        let xml = render_section(&job, |m, out| m.builders(out)).unwrap();
        let shell = xml.find("<hudson.tasks.Shell>").unwrap();
        let batch = xml.find("<hudson.tasks.BatchFile>").unwrap();
        assert!(shell < batch);
    }

    #[test]
    fn test_failing_step_fails_section() {
        let mut job = JobModel::new("app", JobType::Freestyle);
        job.steps = vec![BuildStep::shell("")];

        assert!(render_section(&job, |m, out| m.builders(out)).is_err());
    }
}
