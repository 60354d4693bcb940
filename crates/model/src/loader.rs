//! Reading job definitions from YAML, JSON or TOML.

use std::fmt;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{LoadError, Result};
use crate::job::JobModel;

/// Serialization format of a job definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML (`.yaml`, `.yml`)
    Yaml,
    /// JSON (`.json`)
    Json,
    /// TOML (`.toml`)
    Toml,
}

impl Format {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    /// Returns [`LoadError::UnsupportedFormat`] for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(LoadError::UnsupportedFormat { extension }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// Parse a job definition from a string.
///
/// # Errors
/// Returns the format's parse error if `content` is not a valid job.
pub fn parse_job(content: &str, format: Format) -> Result<JobModel> {
    let job = match format {
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
    };
    Ok(job)
}

/// Load a job definition from a file.
///
/// When the definition leaves `generated_from` empty it is set to `path`.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_job(path: &Path) -> Result<JobModel> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut job = parse_job(&content, format)?;
    if job.generated_from.trim().is_empty() {
        job.generated_from = path.display().to_string();
    }

    debug!(job = %job.name, job_type = %job.job_type, %format, "Loaded job definition");
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobType;
    use crate::task::{MavenPhase, Task};
    use crate::trigger::TriggerKind;
    use std::path::PathBuf;

    const YAML_JOB: &str = r#"
name: library
job_type: maven
retention:
  num_to_keep: 10
steps:
  - type: shell
    command: ./prepare.sh
    phase: pre
triggers:
  - kind: timer
    spec: "H 2 * * *"
    description: nightly
  - kind: com.cloudbees.jenkins.GitHubPushTrigger
    spec: ""
maven:
  goals: deploy
  local_repository: per_job
"#;

    #[test]
    fn test_parse_yaml_job() {
        let job = parse_job(YAML_JOB, Format::Yaml).unwrap();
        assert_eq!(job.name, "library");
        assert_eq!(job.job_type, JobType::Maven);
        assert_eq!(job.retention.num_to_keep, Some(10));
        assert_eq!(job.retention.days_to_keep, None);
        assert_eq!(job.steps[0].phase, Some(MavenPhase::Pre));
        assert!(matches!(job.steps[0].task, Task::Shell { .. }));
        assert_eq!(job.triggers[0].kind, TriggerKind::Timer);
        assert_eq!(
            job.triggers[1].kind.class_name(),
            "com.cloudbees.jenkins.GitHubPushTrigger"
        );
        assert_eq!(job.maven.unwrap().goals, "deploy");
    }

    #[test]
    fn test_parse_toml_job() {
        let job = parse_job(
            r#"
name = "site"
assigned_node = "linux"

[[parameters]]
type = "string"
name = "VERSION"
default = "1.0"
"#,
            Format::Toml,
        )
        .unwrap();
        assert_eq!(job.job_type, JobType::Freestyle);
        assert_eq!(job.assigned_node(), Some("linux"));
        assert_eq!(job.parameters.len(), 1);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(&PathBuf::from("a/job.YML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(&PathBuf::from("job.json")).unwrap(), Format::Json);
        assert!(matches!(
            Format::from_path(&PathBuf::from("job.xml")),
            Err(LoadError::UnsupportedFormat { extension }) if extension == "xml"
        ));
    }

    #[test]
    fn test_load_job_sets_generated_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.json");
        std::fs::write(&path, r#"{"name": "build"}"#).unwrap();

        let job = load_job(&path).unwrap();
        assert_eq!(job.generated_from, path.display().to_string());
    }

    #[test]
    fn test_load_job_keeps_declared_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.yaml");
        std::fs::write(&path, "name: build\ngenerated_from: gradle :jenkinsJobs\n").unwrap();

        let job = load_job(&path).unwrap();
        assert_eq!(job.generated_from, "gradle :jenkinsJobs");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_job(Path::new("/nonexistent/job.yaml"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
