//! The `<properties>` section.

use jobxml_emitters::{Emit, emit_all};
use jobxml_markup::MarkupBuilder;
use jobxml_model::Parameter;

use crate::document::ConfigMarkup;
use crate::error::Result;

impl ConfigMarkup<'_> {
    /// Emit job properties: the raw fragment, parameter definitions, and the
    /// project link.
    pub(crate) fn properties(&self, out: &mut MarkupBuilder) -> Result<()> {
        let job = self.job;
        tracing::debug!(parameters = job.parameters.len(), "Emitting properties");
        out.element("properties", &[], |out| {
            out.inject(job.raw.properties.as_deref().unwrap_or_default())?;

            if job.has_parameters() {
                let (trackers, definitions): (Vec<&Parameter>, Vec<&Parameter>) =
                    job.parameters.iter().partition(|p| p.is_external_tracker());

                out.element("hudson.model.ParametersDefinitionProperty", &[], |out| {
                    out.element("parameterDefinitions", &[], |out| emit_all(&definitions, out))
                })?;
                // Tracker links are properties of their own, not definitions
                for tracker in trackers {
                    tracker.emit(out)?;
                }
            }

            if let Some(url) = job.project_url() {
                out.element(
                    "com.coravy.hudson.plugins.github.GithubProjectProperty",
                    &[("plugin", "github")],
                    |out| out.leaf("projectUrl", url),
                )?;
            }
            Ok(())
        })
    }
}
