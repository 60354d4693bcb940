use std::path::Path;

use jobxml_generator::ConfigGenerator;
use tracing::instrument;

use super::prepare;
use crate::config::Overrides;
use crate::errors::CliError;

/// Generate into memory and summarize the result.
#[instrument(skip(overrides), fields(job = %job.display()))]
pub fn execute_validate(job: &Path, overrides: &Overrides) -> Result<String, CliError> {
    let (model, options) = prepare(job, overrides)?;
    let document = ConfigGenerator::new().generate(&model, &options)?;
    Ok(format!(
        "{}: ok ({} job '{}', {} bytes)",
        job.display(),
        model.job_type,
        model.name,
        document.len()
    ))
}
