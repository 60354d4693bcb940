pub mod generate;
pub mod strategies;
pub mod validate;

use std::io::Write;
use std::path::{Path, PathBuf};

use jobxml_generator::GenerateOptions;
use jobxml_model::JobModel;

use crate::config::{GeneratorConfig, Overrides};
use crate::errors::CliError;

#[derive(Debug, Clone)]
pub enum Command {
    Generate {
        job: PathBuf,
        output: Option<PathBuf>,
        overrides: Overrides,
    },
    Validate {
        job: PathBuf,
        overrides: Overrides,
    },
    Strategies,
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Generate { .. } => "generate",
            Self::Validate { .. } => "validate",
            Self::Strategies => "strategies",
        }
    }
}

/// Run a command, writing its report to stdout.
pub fn execute(command: Command) -> Result<(), CliError> {
    let span = crate::command_span!(command.name());
    let _guard = span.enter();

    match command {
        Command::Generate {
            job,
            output,
            overrides,
        } => {
            let document = generate::execute_generate(&job, &overrides)?;
            match output {
                Some(path) => generate::write_document(&path, &document),
                None => write_stdout(&document),
            }
        }
        Command::Validate { job, overrides } => {
            let report = validate::execute_validate(&job, &overrides)?;
            write_stdout(&format!("{report}\n"))
        }
        Command::Strategies => write_stdout(&strategies::list()),
    }
}

/// Load the generator configuration and the job definition.
fn prepare(job: &Path, overrides: &Overrides) -> Result<(JobModel, GenerateOptions), CliError> {
    let config = GeneratorConfig::load(overrides.config.as_deref())?.with_overrides(overrides);
    let options = config.generate_options(overrides.timestamp.as_deref())?;
    let model = jobxml_model::load_job(job)?;
    Ok((model, options))
}

fn write_stdout(text: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| CliError::OutputError { source })
}
