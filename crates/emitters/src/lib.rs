//! Sub-markup emitters for jobxml
//!
//! Each emitter renders one bounded subtree of the job document into a
//! [`MarkupBuilder`](jobxml_markup::MarkupBuilder) it borrows for a single
//! call:
//!
//! | Component | Contract | Output |
//! |-----------|----------|--------|
//! | [`Task`](jobxml_model::Task) | [`Emit`] | one builder element |
//! | [`Parameter`](jobxml_model::Parameter) | [`Emit`] | one parameter definition or tracker property |
//! | [`TriggerElement`] | [`Emit`] | one trigger with its spec |
//! | SCM strategy | [`ScmStrategy`] | the `<scm>` element |
//! | Description table | [`DescriptionTable`] | an HTML fragment |

pub mod description;
pub mod emit;
pub mod error;
pub mod parameter;
pub mod scm;
pub mod task;
pub mod trigger;

pub use description::{DescriptionTable, HtmlDescriptionTable, NoDescriptionTable};
pub use emit::{Emit, emit_all};
pub use error::{EmitError, EmitResult};
pub use scm::{GitStrategy, ScmRegistry, ScmStrategy, StrategyInfo, SubversionStrategy};
pub use trigger::TriggerElement;
