//! Description table emitters
//!
//! The job description shown by the host is HTML. Besides the free-text
//! description it carries a summary table of the job's settings and
//! parameters, rendered by a [`DescriptionTable`].

use std::fmt::Write as _;

use jobxml_markup::escape;
use jobxml_model::{JobModel, Parameter};

/// Renders the summary fragment embedded in the job description.
pub trait DescriptionTable: Send + Sync {
    /// Render an HTML fragment for `job`. An empty string means "no table".
    fn render(&self, job: &JobModel) -> String;
}

/// Renders no table at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDescriptionTable;

impl DescriptionTable for NoDescriptionTable {
    fn render(&self, _job: &JobModel) -> String {
        String::new()
    }
}

/// Default HTML tables: one for job settings, one for parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDescriptionTable;

impl HtmlDescriptionTable {
    fn settings(job: &JobModel) -> Vec<(&'static str, String)> {
        let mut rows = vec![("Type", job.job_type.to_string())];
        if let Some(node) = job.assigned_node() {
            rows.push(("Node", node.to_string()));
        }
        if let Some(jdk) = job.jdk.as_deref().filter(|j| !j.is_empty()) {
            rows.push(("JDK", jdk.to_string()));
        }
        if let Some(maven) = job.maven.as_ref().filter(|_| job.is_maven()) {
            rows.push(("POM", maven.root_pom.clone()));
            rows.push(("Goals", maven.goals.clone()));
        }
        if let Some(scm) = &job.scm {
            let urls: Vec<&str> = scm.repositories.iter().map(|r| r.url.as_str()).collect();
            rows.push(("SCM", format!("{}: {}", scm.strategy, urls.join(", "))));
        }
        if let Some(downstream) = job.downstream_target() {
            rows.push(("Triggers", downstream.project_list()));
        }
        rows
    }

    fn parameter_row(html: &mut String, parameter: &Parameter) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(parameter.name()),
            parameter.kind(),
            escape(&parameter.display_default()),
            escape(parameter.description().unwrap_or_default()),
        );
    }
}

impl DescriptionTable for HtmlDescriptionTable {
    fn render(&self, job: &JobModel) -> String {
        let mut html = String::from("<table class=\"jobxml-settings\">\n");
        for (key, value) in Self::settings(job) {
            let _ = writeln!(html, "<tr><th>{key}</th><td>{}</td></tr>", escape(&value));
        }
        html.push_str("</table>");

        let parameters: Vec<&Parameter> = job
            .parameters
            .iter()
            .filter(|p| !p.is_external_tracker())
            .collect();
        if !parameters.is_empty() {
            html.push_str("\n<table class=\"jobxml-parameters\">\n");
            html.push_str("<tr><th>Name</th><th>Type</th><th>Default</th><th>Description</th></tr>\n");
            for parameter in parameters {
                Self::parameter_row(&mut html, parameter);
            }
            html.push_str("</table>");
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobxml_model::{JobType, MavenSettings};

    #[test]
    fn test_settings_table() {
        let mut job = JobModel::new("lib", JobType::Maven);
        job.assigned_node = Some("linux".to_string());
        job.maven = Some(MavenSettings::default());

        let html = HtmlDescriptionTable.render(&job);
        assert!(html.starts_with("<table class=\"jobxml-settings\">\n<tr><th>Type</th><td>maven</td></tr>\n"));
        assert!(html.contains("<tr><th>Node</th><td>linux</td></tr>"));
        assert!(html.contains("<tr><th>Goals</th><td>clean install</td></tr>"));
        assert!(!html.contains("jobxml-parameters"));
    }

    #[test]
    fn test_parameter_table_escapes_and_skips_trackers() {
        let mut job = JobModel::new("app", JobType::Freestyle);
        job.parameters = vec![
            Parameter::String {
                name: "FLAGS".to_string(),
                default: Some("-a <b>".to_string()),
                description: Some("Compiler & linker".to_string()),
            },
            Parameter::ExternalTracker {
                site_name: "jira".to_string(),
            },
        ];

        let html = HtmlDescriptionTable.render(&job);
        assert!(html.contains(
            "<tr><td>FLAGS</td><td>string</td><td>-a &lt;b&gt;</td><td>Compiler &amp; linker</td></tr>"
        ));
        assert!(!html.contains("jira"));
    }

    #[test]
    fn test_no_table() {
        let job = JobModel::new("app", JobType::Freestyle);
        assert_eq!(NoDescriptionTable.render(&job), "");
    }
}
