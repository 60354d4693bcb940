//! Job configuration model for jobxml
//!
//! Plain data types describing one CI job: its type, build steps, triggers,
//! parameters, SCM selection and publisher settings. Every type is
//! serde-loadable so job definitions can live in YAML, JSON or TOML files.
//!
//! Optional sections are modelled with `Option`; the `has_*` predicates on
//! [`JobModel`] decide whether the matching output section appears.

pub mod error;
pub mod job;
pub mod loader;
pub mod maven;
pub mod parameter;
pub mod publisher;
pub mod scm;
pub mod task;
pub mod trigger;

pub use error::LoadError;
pub use job::{JobModel, JobType, RawSections, Retention};
pub use loader::{Format, load_job, parse_job};
pub use maven::{LocalRepository, MavenSettings, PostStepsResult};
pub use parameter::Parameter;
pub use publisher::{ArtifactRepository, DeploySettings, DownstreamTrigger, MailSettings, TriggerCondition};
pub use scm::{ScmRepository, ScmSelection};
pub use task::{BuildStep, MavenPhase, Task};
pub use trigger::{Trigger, TriggerKind};
