//! The `<description>` section.

use jobxml_markup::{MarkupBuilder, escape};

use crate::document::ConfigMarkup;
use crate::error::Result;

/// Marker bracketing generated description content.
const DO_NOT_EDIT: &str = "<!-- jobxml: generated content, do not edit -->";

impl ConfigMarkup<'_> {
    /// Emit the description as a CDATA block.
    ///
    /// The HTML carries the generation banner, the free-text description and
    /// the description table between two do-not-edit markers.
    pub(crate) fn description(&self, out: &mut MarkupBuilder) -> Result<()> {
        let html = self.description_html();
        out.element("description", &[], |out| out.cdata(&html))?;
        Ok(())
    }

    fn description_html(&self) -> String {
        let banner = format!(
            "<p>Generated from <code>{}</code> on {}. Manual changes will be overwritten.</p>",
            escape(self.generation_source()),
            escape(&self.options.timestamp),
        );
        let table = self.description_table.render(self.job);

        let mut lines = vec![DO_NOT_EDIT, banner.as_str()];
        if let Some(description) = self.job.description.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            lines.push(description);
        }
        if !table.is_empty() {
            lines.push(table.as_str());
        }
        lines.push(DO_NOT_EDIT);

        // Fragments may carry their own line breaks; normalize them all
        lines
            .iter()
            .flat_map(|fragment| fragment.lines())
            .collect::<Vec<_>>()
            .join(self.options.line_separator.as_str())
    }
}
