//! Parameter definition emitters.

use jobxml_markup::MarkupBuilder;
use jobxml_model::Parameter;

use crate::emit::Emit;
use crate::error::{EmitError, EmitResult};

impl Emit for Parameter {
    fn emit(&self, out: &mut MarkupBuilder) -> EmitResult<()> {
        if self.name().trim().is_empty() {
            return Err(EmitError::missing("parameter", "name"));
        }

        match self {
            Self::String {
                name,
                default,
                description,
            } => definition(out, "hudson.model.StringParameterDefinition", name, description.as_deref(), |out| {
                out.leaf("defaultValue", default.as_deref().unwrap_or_default())
            }),
            Self::Text {
                name,
                default,
                description,
            } => definition(out, "hudson.model.TextParameterDefinition", name, description.as_deref(), |out| {
                out.leaf("defaultValue", default.as_deref().unwrap_or_default())
            }),
            Self::Boolean {
                name,
                default,
                description,
            } => definition(out, "hudson.model.BooleanParameterDefinition", name, description.as_deref(), |out| {
                out.leaf("defaultValue", default)
            }),
            Self::Password {
                name,
                default,
                description,
            } => definition(out, "hudson.model.PasswordParameterDefinition", name, description.as_deref(), |out| {
                out.leaf("defaultValue", default.as_deref().unwrap_or_default())
            }),
            Self::Choice {
                name,
                choices,
                description,
            } => {
                if choices.is_empty() {
                    return Err(EmitError::missing("choice parameter", "choices"));
                }
                definition(out, "hudson.model.ChoiceParameterDefinition", name, description.as_deref(), |out| {
                    out.element("choices", &[("class", "java.util.Arrays$ArrayList")], |out| {
                        out.element("a", &[("class", "string-array")], |out| {
                            for choice in choices {
                                out.leaf("string", choice)?;
                            }
                            Ok(())
                        })
                    })
                })
            }
            Self::ExternalTracker { site_name } => {
                out.element("hudson.plugins.jira.JiraProjectProperty", &[("plugin", "jira")], |out| {
                    out.leaf("siteName", site_name)?;
                    Ok(())
                })
            }
        }
    }
}

/// Common `name`/`description` scaffold of a parameter definition.
fn definition<F>(
    out: &mut MarkupBuilder,
    class: &str,
    name: &str,
    description: Option<&str>,
    body: F,
) -> EmitResult<()>
where
    F: FnOnce(&mut MarkupBuilder) -> jobxml_markup::Result<()>,
{
    out.element(class, &[], |out| {
        out.leaf("name", name)?;
        out.leaf("description", description.unwrap_or_default())?;
        body(out)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(parameter: &Parameter) -> String {
        let mut out = MarkupBuilder::new("  ", "\n");
        parameter.emit(&mut out).unwrap();
        out.finish().unwrap()
    }

    #[test]
    fn test_string_parameter() {
        let xml = render(&Parameter::String {
            name: "VERSION".to_string(),
            default: Some("1.0".to_string()),
            description: None,
        });
        assert_eq!(
            xml,
            "<hudson.model.StringParameterDefinition>\n  <name>VERSION</name>\n  <description></description>\n  <defaultValue>1.0</defaultValue>\n</hudson.model.StringParameterDefinition>\n"
        );
    }

    #[test]
    fn test_boolean_parameter() {
        let xml = render(&Parameter::Boolean {
            name: "DRY_RUN".to_string(),
            default: true,
            description: Some("Skip publishing".to_string()),
        });
        assert!(xml.contains("<description>Skip publishing</description>"));
        assert!(xml.contains("<defaultValue>true</defaultValue>"));
    }

    #[test]
    fn test_choice_parameter() {
        let xml = render(&Parameter::Choice {
            name: "ENV".to_string(),
            choices: vec!["staging".to_string(), "prod".to_string()],
            description: None,
        });
        assert!(xml.contains("<choices class=\"java.util.Arrays$ArrayList\">"));
        assert!(xml.contains("<a class=\"string-array\">"));
        assert!(xml.contains("      <string>staging</string>\n      <string>prod</string>\n"));
    }

    #[test]
    fn test_choice_without_choices_is_rejected() {
        let mut out = MarkupBuilder::new("  ", "\n");
        let result = Parameter::Choice {
            name: "ENV".to_string(),
            choices: vec![],
            description: None,
        }
        .emit(&mut out);
        assert!(matches!(result, Err(EmitError::MissingField { field: "choices", .. })));
    }

    #[test]
    fn test_unnamed_parameter_is_rejected() {
        let mut out = MarkupBuilder::new("  ", "\n");
        let result = Parameter::Text {
            name: String::new(),
            default: None,
            description: None,
        }
        .emit(&mut out);
        assert!(matches!(result, Err(EmitError::MissingField { field: "name", .. })));
    }

    #[test]
    fn test_external_tracker_property() {
        let xml = render(&Parameter::ExternalTracker {
            site_name: "https://issues.example.com/".to_string(),
        });
        assert_eq!(
            xml,
            "<hudson.plugins.jira.JiraProjectProperty plugin=\"jira\">\n  <siteName>https://issues.example.com/</siteName>\n</hudson.plugins.jira.JiraProjectProperty>\n"
        );
    }
}
