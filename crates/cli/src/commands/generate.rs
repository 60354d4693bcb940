use std::path::Path;

use jobxml_generator::ConfigGenerator;
use tracing::instrument;

use super::prepare;
use crate::config::Overrides;
use crate::errors::CliError;

/// Generate the document for the job definition at `job`.
#[instrument(skip(overrides), fields(job = %job.display()))]
pub fn execute_generate(job: &Path, overrides: &Overrides) -> Result<String, CliError> {
    let (model, options) = prepare(job, overrides)?;
    let document = ConfigGenerator::new().generate(&model, &options)?;
    tracing::info!(name = %model.name, job_type = %model.job_type, "Generated job document");
    Ok(document)
}

/// Write a document to `path`, creating parent directories.
pub fn write_document(path: &Path, document: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::file_error("create directory", parent, e))?;
    }
    std::fs::write(path, document).map_err(|e| CliError::file_error("write", path, e))?;
    tracing::info!(path = %path.display(), bytes = document.len(), "Wrote job document");
    Ok(())
}
