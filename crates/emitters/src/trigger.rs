//! Trigger emitters.

use std::borrow::Cow;

use jobxml_markup::MarkupBuilder;
use jobxml_model::TriggerKind;

use crate::emit::Emit;
use crate::error::EmitResult;

/// One trigger element: the class named by `kind` holding a single `<spec>`.
///
/// The `<spec>` text is written exactly as given. An empty one is valid and
/// renders as `<spec></spec>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerElement<'a> {
    kind: &'a TriggerKind,
    spec: Cow<'a, str>,
}

impl<'a> TriggerElement<'a> {
    /// Pair a trigger class with the spec text to write for it.
    #[must_use]
    pub fn new(kind: &'a TriggerKind, spec: impl Into<Cow<'a, str>>) -> Self {
        Self {
            kind,
            spec: spec.into(),
        }
    }
}

impl Emit for TriggerElement<'_> {
    fn emit(&self, out: &mut MarkupBuilder) -> EmitResult<()> {
        out.element(self.kind.class_name(), &[], |out| out.leaf("spec", &self.spec))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmitError;

    fn render(element: &TriggerElement<'_>) -> String {
        let mut out = MarkupBuilder::new("  ", "\n");
        element.emit(&mut out).unwrap();
        out.finish().unwrap()
    }

    #[test]
    fn test_timer_trigger() {
        let kind = TriggerKind::Timer;
        assert_eq!(
            render(&TriggerElement::new(&kind, "H 2 * * *")),
            "<hudson.triggers.TimerTrigger>\n  <spec>H 2 * * *</spec>\n</hudson.triggers.TimerTrigger>\n"
        );
    }

    #[test]
    fn test_spec_text_is_written_unchanged() {
        let kind = TriggerKind::ScmPoll;
        let xml = render(&TriggerElement::new(&kind, String::from("#hourly\nH * * * *")));
        assert!(xml.contains("<spec>#hourly\nH * * * *</spec>"));
    }

    #[test]
    fn test_empty_spec_keeps_open_and_close_tags() {
        let kind = TriggerKind::Class("com.cloudbees.jenkins.GitHubPushTrigger".to_string());
        assert_eq!(
            render(&TriggerElement::new(&kind, "")),
            "<com.cloudbees.jenkins.GitHubPushTrigger>\n  <spec></spec>\n</com.cloudbees.jenkins.GitHubPushTrigger>\n"
        );
    }

    #[test]
    fn test_invalid_class_is_rejected() {
        let kind = TriggerKind::Class("not a class".to_string());
        let mut out = MarkupBuilder::new("  ", "\n");
        let result = TriggerElement::new(&kind, "H * * * *").emit(&mut out);
        assert!(matches!(result, Err(EmitError::Markup(_))));
    }
}
