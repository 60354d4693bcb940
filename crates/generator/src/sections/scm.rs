//! The `<scm>` section.

use jobxml_markup::MarkupBuilder;

use crate::document::ConfigMarkup;
use crate::error::Result;

impl ConfigMarkup<'_> {
    /// Emit the SCM section through the selected strategy, or inject the raw
    /// SCM fragment when no strategy is selected.
    pub(crate) fn scm_section(&self, out: &mut MarkupBuilder) -> Result<()> {
        let raw = self.job.raw.scm.as_deref().unwrap_or_default();
        match &self.job.scm {
            Some(selection) => {
                if !raw.trim().is_empty() {
                    tracing::warn!(
                        strategy = %selection.strategy,
                        "Job selects an SCM strategy; ignoring raw scm fragment"
                    );
                }
                self.scm.emit(&selection.strategy, &selection.repositories, out)?;
            }
            None => out.inject(raw)?,
        }
        Ok(())
    }
}
