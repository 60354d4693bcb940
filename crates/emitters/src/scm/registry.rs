//! Lookup of SCM strategies by the name a job selects.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use jobxml_markup::MarkupBuilder;
use jobxml_model::ScmRepository;

use super::{GitStrategy, ScmStrategy, SubversionStrategy};
use crate::error::{EmitError, EmitResult};

/// SCM strategies keyed by selection name.
///
/// Cloning is cheap; strategies are shared.
///
/// # Example
///
/// ```rust
/// use jobxml_emitters::ScmRegistry;
///
/// let registry = ScmRegistry::with_defaults();
/// assert_eq!(registry.names(), vec!["git", "subversion"]);
/// ```
#[derive(Default, Clone)]
pub struct ScmRegistry {
    strategies: BTreeMap<&'static str, Arc<dyn ScmStrategy>>,
}

impl ScmRegistry {
    /// The built-in git and subversion strategies.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
            .with_strategy(GitStrategy)
            .with_strategy(SubversionStrategy)
    }

    /// Add `strategy` under its own name, replacing any earlier one.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl ScmStrategy + 'static) -> Self {
        self.strategies.insert(strategy.name(), Arc::new(strategy));
        self
    }

    /// Selection names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.keys().copied().collect()
    }

    /// Name and description of every strategy, sorted by name.
    #[must_use]
    pub fn info(&self) -> Vec<StrategyInfo> {
        self.strategies
            .values()
            .map(|strategy| StrategyInfo {
                name: strategy.name(),
                description: strategy.description(),
            })
            .collect()
    }

    /// Write the `<scm>` element with the strategy selected as `name`.
    ///
    /// # Errors
    /// Returns [`EmitError::UnknownStrategy`] if no strategy has that name,
    /// or the strategy's own error.
    pub fn emit(&self, name: &str, repositories: &[ScmRepository], out: &mut MarkupBuilder) -> EmitResult<()> {
        let Some(strategy) = self.strategies.get(name) else {
            return Err(EmitError::UnknownStrategy {
                name: name.to_string(),
                available: self.names().join(", "),
            });
        };
        tracing::debug!(strategy = name, repositories = repositories.len(), "Emitting SCM section");
        strategy.emit(repositories, out)
    }
}

impl fmt::Debug for ScmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.strategies.keys()).finish()
    }
}

/// A registered strategy as listed to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyInfo {
    /// Selection name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingStrategy {
        name: &'static str,
    }

    impl ScmStrategy for CountingStrategy {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "Writes the repository count"
        }

        fn emit(&self, repositories: &[ScmRepository], out: &mut MarkupBuilder) -> EmitResult<()> {
            out.leaf_with("scm", &[("class", self.name)], repositories.len())?;
            Ok(())
        }
    }

    #[test]
    fn test_defaults_are_listed_sorted() {
        let registry = ScmRegistry::with_defaults()
            .with_strategy(CountingStrategy { name: "cvs" })
            .with_strategy(CountingStrategy { name: "perforce" });
        assert_eq!(registry.names(), vec!["cvs", "git", "perforce", "subversion"]);
    }

    #[test]
    fn test_emit_with_selected_strategy() {
        let registry = ScmRegistry::default().with_strategy(CountingStrategy { name: "counting" });

        let mut out = MarkupBuilder::new("  ", "\n");
        registry
            .emit("counting", &[ScmRepository::new("a"), ScmRepository::new("b")], &mut out)
            .unwrap();
        assert_eq!(out.finish().unwrap(), "<scm class=\"counting\">2</scm>\n");
    }

    #[test]
    fn test_unknown_strategy_lists_available_and_writes_nothing() {
        let registry = ScmRegistry::with_defaults();
        let mut out = MarkupBuilder::new("  ", "\n");

        let err = registry.emit("darcs", &[], &mut out).unwrap_err();
        assert!(matches!(err, EmitError::UnknownStrategy { .. }));
        assert!(err.to_string().contains("Available: git, subversion"));
        assert_eq!(out.as_str(), "");
    }

    #[test]
    fn test_later_strategy_replaces_same_name() {
        let registry = ScmRegistry::with_defaults().with_strategy(CountingStrategy { name: "git" });

        let mut out = MarkupBuilder::new("  ", "\n");
        registry.emit("git", &[ScmRepository::new("a")], &mut out).unwrap();
        assert_eq!(out.finish().unwrap(), "<scm class=\"git\">1</scm>\n");
    }

    #[test]
    fn test_info() {
        let registry = ScmRegistry::default().with_strategy(CountingStrategy { name: "counting" });
        assert_eq!(
            registry.info(),
            vec![StrategyInfo {
                name: "counting",
                description: "Writes the repository count"
            }]
        );
    }
}
