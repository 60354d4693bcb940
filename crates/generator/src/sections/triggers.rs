//! The `<triggers>` section.

use std::borrow::Cow;

use jobxml_emitters::{Emit, TriggerElement};
use jobxml_markup::MarkupBuilder;
use jobxml_model::Trigger;

use crate::document::ConfigMarkup;
use crate::error::Result;

impl ConfigMarkup<'_> {
    pub(crate) fn triggers(&self, out: &mut MarkupBuilder) -> Result<()> {
        tracing::debug!(triggers = self.job.triggers.len(), "Emitting triggers");
        out.element("triggers", &[("class", "vector")], |out| {
            for trigger in &self.job.triggers {
                TriggerElement::new(&trigger.kind, spec_text(trigger)).emit(out)?;
            }
            Ok(())
        })
    }
}

/// Spec text for a trigger: a non-blank description becomes a leading
/// `#` comment line above the expression.
fn spec_text(trigger: &Trigger) -> Cow<'_, str> {
    match trigger.description.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(description) => Cow::Owned(format!("#{description}\n{}", trigger.spec)),
        None => Cow::Borrowed(&trigger.spec),
    }
}

#[cfg(test)]
mod tests {
    use jobxml_model::{JobModel, JobType, Trigger, TriggerKind};

    use super::spec_text;
    use crate::sections::test_support::render_section;

    #[test]
    fn test_spec_text_with_description() {
        let trigger = Trigger::new(TriggerKind::Timer, "H 2 * * *").with_description("nightly");
        assert_eq!(spec_text(&trigger), "#nightly\nH 2 * * *");
    }

    #[test]
    fn test_spec_text_ignores_blank_description() {
        let trigger = Trigger::new(TriggerKind::ScmPoll, "H/15 * * * *").with_description("  ");
        assert_eq!(spec_text(&trigger), "H/15 * * * *");
    }

    #[test]
    fn test_triggers_with_and_without_description() {
        let mut job = JobModel::new("app", JobType::Freestyle);
        job.triggers = vec![
            Trigger::new(TriggerKind::Timer, "H 2 * * *").with_description("nightly"),
            Trigger::new(TriggerKind::ScmPoll, "H/15 * * * *"),
        ];

        let xml = render_section(&job, |m, out| m.triggers(out)).unwrap();
        assert_eq!(
            xml,
            "<triggers class=\"vector\">\n  <hudson.triggers.TimerTrigger>\n    <spec>#nightly\nH 2 * * *</spec>\n  </hudson.triggers.TimerTrigger>\n  <hudson.triggers.SCMTrigger>\n    <spec>H/15 * * * *</spec>\n  </hudson.triggers.SCMTrigger>\n</triggers>\n"
        );
    }

    #[test]
    fn test_push_trigger_with_empty_spec() {
        let mut job = JobModel::new("app", JobType::Freestyle);
        job.triggers = vec![Trigger::new(
            TriggerKind::Class("com.cloudbees.jenkins.GitHubPushTrigger".to_string()),
            "",
        )];

        let xml = render_section(&job, |m, out| m.triggers(out)).unwrap();
        assert!(xml.contains(
            "  <com.cloudbees.jenkins.GitHubPushTrigger>\n    <spec></spec>\n  </com.cloudbees.jenkins.GitHubPushTrigger>\n"
        ));
    }

    #[test]
    fn test_no_triggers() {
        let job = JobModel::new("app", JobType::Freestyle);
        let xml = render_section(&job, |m, out| m.triggers(out)).unwrap();
        assert_eq!(xml, "<triggers class=\"vector\"/>\n");
    }
}
