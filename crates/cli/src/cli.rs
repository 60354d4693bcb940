use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::Command;
use crate::config::{LineSeparator, Overrides};
use crate::tracing::{LogLevel, TracingFormat};

#[derive(Parser, Debug)]
#[command(name = "jobxml")]
#[command(about = "Generate CI server job config.xml documents from job definitions")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Log output format",
        default_value = "compact",
        value_enum
    )]
    pub log_format: TracingFormat,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub json: bool,
}

impl Cli {
    /// Effective log format; `--json` wins over `--log-format`.
    pub const fn tracing_format(&self) -> TracingFormat {
        if self.json {
            TracingFormat::Json
        } else {
            self.log_format
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    #[arg(long, help = "Path to the generator configuration file [default: ./jobxml.toml]")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Indent unit, overrides the configuration file")]
    pub indent: Option<String>,

    #[arg(long, value_enum, help = "Line separator, overrides the configuration file")]
    pub line_separator: Option<LineSeparator>,

    #[arg(long, help = "Timestamp shown in the description instead of the current time")]
    pub timestamp: Option<String>,
}

impl From<GeneratorArgs> for Overrides {
    fn from(args: GeneratorArgs) -> Self {
        Self {
            config: args.config,
            indent: args.indent,
            line_separator: args.line_separator,
            timestamp: args.timestamp,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Generate config.xml for a job definition")]
    Generate {
        #[arg(help = "Job definition file (.yaml, .yml, .json or .toml)")]
        job: PathBuf,
        #[arg(long, short = 'o', help = "Write to this file instead of stdout")]
        output: Option<PathBuf>,
        #[command(flatten)]
        generator: GeneratorArgs,
    },
    #[command(about = "Check that a job definition generates without errors")]
    Validate {
        #[arg(help = "Job definition file (.yaml, .yml, .json or .toml)")]
        job: PathBuf,
        #[command(flatten)]
        generator: GeneratorArgs,
    },
    #[command(about = "List the available SCM strategies")]
    Strategies,
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Generate {
                job,
                output,
                generator,
            } => Self::Generate {
                job,
                output,
                overrides: generator.into(),
            },
            Commands::Validate { job, generator } => Self::Validate {
                job,
                overrides: generator.into(),
            },
            Commands::Strategies => Self::Strategies,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
