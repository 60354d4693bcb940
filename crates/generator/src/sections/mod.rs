//! Document sections, one module per section of the job document.

mod builders;
mod description;
mod maven;
mod properties;
mod publishers;
mod scm;
mod triggers;
