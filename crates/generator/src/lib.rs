//! Job document generation.
//!
//! Turns a [`JobModel`](jobxml_model::JobModel) into the `config.xml`
//! document a CI server reads. The document is assembled in one pass by a
//! fixed sequence of sections; free-style jobs produce a `project` root and
//! Maven jobs a `maven2-moduleset` root.
//!
//! Build steps, parameters and SCM blocks are rendered by the sub-emitters in
//! [`jobxml_emitters`], all writing into one shared
//! [`MarkupBuilder`](jobxml_markup::MarkupBuilder).

mod document;
pub mod error;
mod generator;
mod options;
mod sections;
mod shape;

pub use error::{GenerateError, Result};
pub use generator::{ConfigGenerator, generate};
pub use options::GenerateOptions;
pub use shape::JobShape;
