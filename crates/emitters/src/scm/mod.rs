//! SCM strategies
//!
//! An SCM strategy renders the whole `<scm>` element for a list of
//! repositories. Strategies are looked up by name through the
//! [`ScmRegistry`], so jobs select them declaratively and callers can plug in
//! their own.

mod git;
mod registry;
mod subversion;

pub use git::GitStrategy;
pub use registry::{ScmRegistry, StrategyInfo};
pub use subversion::SubversionStrategy;

use jobxml_markup::MarkupBuilder;
use jobxml_model::ScmRepository;

use crate::error::EmitResult;

/// Trait for SCM section emitters
///
/// # Example
///
/// ```rust
/// use jobxml_emitters::{EmitResult, ScmStrategy};
/// use jobxml_markup::MarkupBuilder;
/// use jobxml_model::ScmRepository;
///
/// struct NullStrategy;
///
/// impl ScmStrategy for NullStrategy {
///     fn name(&self) -> &'static str {
///         "none"
///     }
///
///     fn emit(&self, _repositories: &[ScmRepository], out: &mut MarkupBuilder) -> EmitResult<()> {
///         out.empty("scm", &[("class", "hudson.scm.NullSCM")])?;
///         Ok(())
///     }
/// }
/// ```
pub trait ScmStrategy: Send + Sync {
    /// Name used to select this strategy
    fn name(&self) -> &'static str;

    /// Human-readable description of this strategy
    fn description(&self) -> &'static str {
        "SCM strategy"
    }

    /// Write the `<scm>` element for `repositories` into `out`.
    ///
    /// # Errors
    /// Returns an error if the repositories lack data the strategy needs or
    /// the builder rejects an operation.
    fn emit(&self, repositories: &[ScmRepository], out: &mut MarkupBuilder) -> EmitResult<()>;
}
