//! The two top-level document shapes.

use jobxml_model::{JobModel, JobType, MavenSettings};

use crate::error::{GenerateError, Result};

/// Document shape of one run, fixed by the job type.
#[derive(Debug, Clone, Copy)]
pub enum JobShape<'a> {
    /// `project`: build steps under `builders`
    Freestyle,
    /// `maven2-moduleset`: POM-driven build with pre and post builders
    Maven(&'a MavenSettings),
}

impl<'a> JobShape<'a> {
    /// Pick the shape for `job`.
    ///
    /// # Errors
    /// Returns [`GenerateError::MissingField`] for a Maven job without Maven settings.
    pub fn resolve(job: &'a JobModel) -> Result<Self> {
        match job.job_type {
            JobType::Freestyle => Ok(Self::Freestyle),
            JobType::Maven => job.maven.as_ref().map(Self::Maven).ok_or(GenerateError::MissingField {
                section: "maven2-moduleset",
                field: "maven",
            }),
        }
    }

    /// Name of the top-level element.
    #[must_use]
    pub const fn root_element(&self) -> &'static str {
        match self {
            Self::Freestyle => "project",
            Self::Maven(_) => "maven2-moduleset",
        }
    }

    /// Job type this shape belongs to.
    #[must_use]
    pub const fn job_type(&self) -> JobType {
        match self {
            Self::Freestyle => JobType::Freestyle,
            Self::Maven(_) => JobType::Maven,
        }
    }

    /// Maven settings, or a job type mismatch naming `section`.
    ///
    /// # Errors
    /// Returns [`GenerateError::JobTypeMismatch`] for free-style shapes.
    pub fn require_maven(&self, section: &'static str) -> Result<&'a MavenSettings> {
        match *self {
            Self::Maven(settings) => Ok(settings),
            Self::Freestyle => Err(GenerateError::JobTypeMismatch {
                section,
                expected: JobType::Maven,
                actual: JobType::Freestyle,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_element_by_type() {
        let freestyle = JobModel::new("a", JobType::Freestyle);
        assert_eq!(JobShape::resolve(&freestyle).unwrap().root_element(), "project");

        let mut maven = JobModel::new("b", JobType::Maven);
        maven.maven = Some(MavenSettings::default());
        let shape = JobShape::resolve(&maven).unwrap();
        assert_eq!(shape.root_element(), "maven2-moduleset");
        assert_eq!(shape.job_type(), JobType::Maven);
    }

    #[test]
    fn test_maven_without_settings() {
        let job = JobModel::new("b", JobType::Maven);
        assert!(matches!(
            JobShape::resolve(&job),
            Err(GenerateError::MissingField { field: "maven", .. })
        ));
    }

    #[test]
    fn test_require_maven_on_freestyle() {
        let err = JobShape::Freestyle.require_maven("reporters").unwrap_err();
        assert!(matches!(
            err,
            GenerateError::JobTypeMismatch {
                section: "reporters",
                expected: JobType::Maven,
                actual: JobType::Freestyle
            }
        ));
    }
}
