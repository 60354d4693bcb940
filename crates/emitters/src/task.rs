//! Build step emitters.

use jobxml_markup::MarkupBuilder;
use jobxml_model::{BuildStep, Task};

use crate::emit::Emit;
use crate::error::{EmitError, EmitResult};

/// Installation name the host resolves to its default tool.
const DEFAULT_INSTALLATION: &str = "(Default)";

impl Emit for Task {
    fn emit(&self, out: &mut MarkupBuilder) -> EmitResult<()> {
        tracing::trace!(kind = self.kind(), "Emitting build task");
        match self {
            Self::Shell { command } => script(out, "hudson.tasks.Shell", "shell", command),
            Self::Batch { command } => script(out, "hudson.tasks.BatchFile", "batch", command),
            Self::Ant {
                targets,
                ant_name,
                build_file,
                properties,
            } => out.element("hudson.tasks.Ant", &[("plugin", "ant")], |out| {
                out.leaf("targets", targets)?;
                out.leaf("antName", installation(ant_name.as_deref()))?;
                if let Some(build_file) = present(build_file.as_deref()) {
                    out.leaf("buildFile", build_file)?;
                }
                if let Some(properties) = present(properties.as_deref()) {
                    out.leaf("properties", properties)?;
                }
                Ok(())
            }),
            Self::Maven {
                targets,
                maven_name,
                pom,
                properties,
            } => {
                if targets.trim().is_empty() {
                    return Err(EmitError::missing("maven task", "targets"));
                }
                out.element("hudson.tasks.Maven", &[], |out| {
                    out.leaf("targets", targets)?;
                    out.leaf("mavenName", installation(maven_name.as_deref()))?;
                    if let Some(pom) = present(pom.as_deref()) {
                        out.leaf("pom", pom)?;
                    }
                    if let Some(properties) = present(properties.as_deref()) {
                        out.leaf("properties", properties)?;
                    }
                    out.leaf("usePrivateRepository", false)?;
                    Ok(())
                })
            }
            Self::Gradle {
                tasks,
                switches,
                use_wrapper,
                gradle_name,
            } => {
                if tasks.trim().is_empty() {
                    return Err(EmitError::missing("gradle task", "tasks"));
                }
                out.element("hudson.plugins.gradle.Gradle", &[("plugin", "gradle")], |out| {
                    out.leaf("switches", switches.as_deref().unwrap_or_default())?;
                    out.leaf("tasks", tasks)?;
                    out.leaf("gradleName", installation(gradle_name.as_deref()))?;
                    out.leaf("useWrapper", use_wrapper)?;
                    Ok(())
                })
            }
            Self::Raw { xml } => {
                out.inject(xml)?;
                Ok(())
            }
        }
    }
}

impl Emit for BuildStep {
    fn emit(&self, out: &mut MarkupBuilder) -> EmitResult<()> {
        self.task.emit(out)
    }
}

fn script(out: &mut MarkupBuilder, class: &str, emitter: &'static str, command: &str) -> EmitResult<()> {
    if command.trim().is_empty() {
        return Err(EmitError::missing(emitter, "command"));
    }
    out.element(class, &[], |out| {
        out.leaf("command", command)?;
        Ok(())
    })
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn installation(name: Option<&str>) -> &str {
    present(name).unwrap_or(DEFAULT_INSTALLATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(task: &Task) -> String {
        let mut out = MarkupBuilder::new("  ", "\n");
        task.emit(&mut out).unwrap();
        out.finish().unwrap()
    }

    #[test]
    fn test_shell_task() {
        let xml = render(&Task::Shell {
            command: "make && make test".to_string(),
        });
        assert_eq!(
            xml,
            "<hudson.tasks.Shell>\n  <command>make &amp;&amp; make test</command>\n</hudson.tasks.Shell>\n"
        );
    }

    #[test]
    fn test_batch_task() {
        let xml = render(&Task::Batch {
            command: "build.cmd".to_string(),
        });
        assert!(xml.starts_with("<hudson.tasks.BatchFile>"));
    }

    #[test]
    fn test_empty_script_is_rejected() {
        let mut out = MarkupBuilder::new("  ", "\n");
        let result = Task::Shell {
            command: "  ".to_string(),
        }
        .emit(&mut out);
        assert!(matches!(
            result,
            Err(EmitError::MissingField {
                emitter: "shell",
                field: "command"
            })
        ));
        assert_eq!(out.as_str(), "");
    }

    #[test]
    fn test_ant_task_defaults() {
        let xml = render(&Task::Ant {
            targets: "dist".to_string(),
            ant_name: None,
            build_file: Some("build/build.xml".to_string()),
            properties: None,
        });
        assert!(xml.contains("<hudson.tasks.Ant plugin=\"ant\">"));
        assert!(xml.contains("<antName>(Default)</antName>"));
        assert!(xml.contains("<buildFile>build/build.xml</buildFile>"));
        assert!(!xml.contains("<properties>"));
    }

    #[test]
    fn test_maven_task() {
        let xml = render(&Task::Maven {
            targets: "verify".to_string(),
            maven_name: Some("maven-3".to_string()),
            pom: None,
            properties: Some("skipTests=true".to_string()),
        });
        assert!(xml.contains("<mavenName>maven-3</mavenName>"));
        assert!(xml.contains("<properties>skipTests=true</properties>"));
        assert!(xml.contains("<usePrivateRepository>false</usePrivateRepository>"));
    }

    #[test]
    fn test_gradle_task() {
        let xml = render(&Task::Gradle {
            tasks: "build".to_string(),
            switches: None,
            use_wrapper: true,
            gradle_name: None,
        });
        assert!(xml.contains("<switches></switches>"));
        assert!(xml.contains("<useWrapper>true</useWrapper>"));
    }

    #[test]
    fn test_raw_task_is_injected() {
        let xml = render(&Task::Raw {
            xml: "<org.example.Builder/>".to_string(),
        });
        assert_eq!(xml, "<org.example.Builder/>\n");
    }

    #[test]
    fn test_build_step_delegates_to_task() {
        let mut out = MarkupBuilder::new("  ", "\n");
        BuildStep::shell("ls").emit(&mut out).unwrap();
        assert!(out.finish().unwrap().contains("<command>ls</command>"));
    }
}
