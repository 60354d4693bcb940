//! Public entry point for document generation.

use std::sync::Arc;

use jobxml_emitters::{DescriptionTable, HtmlDescriptionTable, ScmRegistry};
use jobxml_model::JobModel;
use tracing::instrument;

use crate::document::ConfigMarkup;
use crate::error::Result;
use crate::options::GenerateOptions;

/// Generates job documents.
///
/// A generator owns the SCM strategies and the description table it hands
/// to each run. It holds no per-run state, so one instance may serve many
/// jobs, including from several threads.
///
/// # Example
///
/// ```rust
/// use jobxml_generator::{ConfigGenerator, GenerateOptions};
/// use jobxml_model::{JobModel, JobType};
///
/// let job = JobModel::new("app", JobType::Freestyle);
/// let options = GenerateOptions::new("2024-01-01 00:00:00", "  ", "\n");
/// let xml = ConfigGenerator::new().generate(&job, &options)?;
/// assert!(xml.contains("<project>"));
/// # Ok::<(), jobxml_generator::GenerateError>(())
/// ```
#[derive(Clone)]
pub struct ConfigGenerator {
    scm: ScmRegistry,
    description_table: Arc<dyn DescriptionTable>,
}

impl ConfigGenerator {
    /// Create a generator with the built-in SCM strategies and HTML tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scm: ScmRegistry::with_defaults(),
            description_table: Arc::new(HtmlDescriptionTable),
        }
    }

    /// Replace the SCM strategy registry.
    #[must_use]
    pub fn with_scm_registry(mut self, registry: ScmRegistry) -> Self {
        self.scm = registry;
        self
    }

    /// Replace the description table renderer.
    #[must_use]
    pub fn with_description_table(mut self, table: impl DescriptionTable + 'static) -> Self {
        self.description_table = Arc::new(table);
        self
    }

    /// The SCM strategies available to jobs.
    #[must_use]
    pub const fn scm_registry(&self) -> &ScmRegistry {
        &self.scm
    }

    /// Generate the document for `job`.
    ///
    /// Arguments are validated before anything is written. On failure no
    /// partial document is returned.
    ///
    /// # Errors
    /// Returns [`GenerateError`](crate::GenerateError) if an argument is
    /// empty, mandatory data is missing, an emitter fails or the SCM strategy
    /// is unknown.
    #[instrument(skip_all, fields(job = %job.name, job_type = %job.job_type))]
    pub fn generate(&self, job: &JobModel, options: &GenerateOptions) -> Result<String> {
        options.validate()?;
        let markup = ConfigMarkup::new(job, options, &self.scm, self.description_table.as_ref())?;
        let document = markup.render()?;
        tracing::debug!(bytes = document.len(), "Generated job document");
        Ok(document)
    }
}

impl Default for ConfigGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigGenerator")
            .field("scm", &self.scm)
            .finish_non_exhaustive()
    }
}

/// Generate `job` with a default [`ConfigGenerator`].
///
/// # Errors
/// See [`ConfigGenerator::generate`].
pub fn generate(job: &JobModel, options: &GenerateOptions) -> Result<String> {
    ConfigGenerator::new().generate(job, options)
}
