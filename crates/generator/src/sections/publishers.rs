//! The `<publishers>` section.

use jobxml_markup::MarkupBuilder;
use jobxml_model::{ArtifactRepository, DeploySettings, DownstreamTrigger, MailSettings};

use crate::document::ConfigMarkup;
use crate::error::{GenerateError, Result};

impl ConfigMarkup<'_> {
    /// Emit the raw publishers fragment followed by every configured
    /// publisher.
    pub(crate) fn publishers(&self, out: &mut MarkupBuilder) -> Result<()> {
        let job = self.job;
        if !job.is_maven() && job.deploy_target().is_some() {
            tracing::warn!("Deploy settings only apply to Maven jobs; ignored");
        }

        tracing::debug!(
            mailer = job.has_mailer(),
            deploy = job.has_deploy(),
            artifact_repository = job.has_artifact_repository(),
            downstream = job.has_downstream_trigger(),
            "Emitting publishers"
        );
        out.element("publishers", &[], |out| {
            out.inject(job.raw.publishers.as_deref().unwrap_or_default())?;

            if let Some(mail) = job.mail_recipients().filter(|_| job.has_mailer()) {
                mailer(out, mail)?;
            }
            if let Some(deploy) = job.deploy_target().filter(|_| job.has_deploy()) {
                redeploy(out, deploy)?;
            }
            if let Some(repository) = job
                .artifact_repository_target()
                .filter(|_| job.has_artifact_repository())
            {
                artifact_repository(out, repository)?;
            }
            if let Some(downstream) = job.downstream_target() {
                build_trigger(out, downstream)?;
            }
            Ok(())
        })
    }
}

fn mailer(out: &mut MarkupBuilder, mail: &MailSettings) -> Result<()> {
    out.element("hudson.tasks.Mailer", &[("plugin", "mailer")], |out| {
        out.leaf("recipients", mail.recipients.trim())?;
        out.leaf("dontNotifyEveryUnstableBuild", !mail.notify_every_unstable_build)?;
        out.leaf("sendToIndividuals", mail.send_to_individuals)
    })?;
    Ok(())
}

fn redeploy(out: &mut MarkupBuilder, deploy: &DeploySettings) -> Result<()> {
    out.element("hudson.maven.RedeployPublisher", &[], |out| {
        out.leaf("id", deploy.id.as_deref().unwrap_or_default())?;
        out.leaf("url", deploy.url.trim())?;
        out.leaf("uniqueVersion", deploy.unique_version)?;
        out.leaf("evenIfUnstable", deploy.even_if_unstable)
    })?;
    Ok(())
}

fn artifact_repository(out: &mut MarkupBuilder, repository: &ArtifactRepository) -> Result<()> {
    if repository.release_repository.trim().is_empty() {
        return Err(GenerateError::MissingField {
            section: "artifact repository publisher",
            field: "release_repository",
        });
    }

    out.element(
        "org.jfrog.hudson.ArtifactoryRedeployPublisher",
        &[("plugin", "artifactory")],
        |out| {
            out.element("details", &[], |out| {
                out.leaf("artifactoryName", repository.name.trim())?;
                out.leaf("repositoryKey", &repository.release_repository)?;
                out.leaf("snapshotsRepositoryKey", repository.snapshot_key())
            })?;
            out.leaf("deployArtifacts", true)?;
            out.leaf("username", repository.username.as_deref().unwrap_or_default())?;
            out.leaf("scrambledPassword", repository.password.as_deref().unwrap_or_default())?;
            out.leaf("deployBuildInfo", true)?;
            out.leaf("includeEnvVars", false)?;
            out.leaf("evenIfUnstable", false)?;
            out.leaf("runChecks", false)?;
            out.leaf("skipBuildInfoDeploy", false)
        },
    )?;
    Ok(())
}

fn build_trigger(out: &mut MarkupBuilder, downstream: &DownstreamTrigger) -> Result<()> {
    out.element(
        "hudson.plugins.parameterizedtrigger.BuildTrigger",
        &[("plugin", "parameterized-trigger")],
        |out| {
            out.element("configs", &[], |out| {
                out.element("hudson.plugins.parameterizedtrigger.BuildTriggerConfig", &[], |out| {
                    if downstream.passes_parameters() {
                        out.element("configs", &[], |out| parameter_configs(out, downstream))?;
                    } else {
                        out.empty("configs", &[("class", "java.util.Collections$EmptyList")])?;
                    }
                    out.leaf("projects", downstream.project_list())?;
                    out.leaf("condition", downstream.condition.code())?;
                    out.leaf("triggerWithNoParameters", downstream.trigger_with_no_parameters)
                })
            })
        },
    )?;
    Ok(())
}

fn parameter_configs(out: &mut MarkupBuilder, downstream: &DownstreamTrigger) -> jobxml_markup::Result<()> {
    if downstream.current_build_parameters {
        out.empty("hudson.plugins.parameterizedtrigger.CurrentBuildParameters", &[])?;
    }
    if let Some(properties) = downstream.predefined_properties() {
        out.element("hudson.plugins.parameterizedtrigger.PredefinedBuildParameters", &[], |out| {
            out.leaf("properties", properties)
        })?;
    }
    if let Some(file) = downstream.properties_file() {
        out.element("hudson.plugins.parameterizedtrigger.FileBuildParameters", &[], |out| {
            out.leaf("propertiesFile", file)?;
            out.leaf("failTriggerOnMissing", false)
        })?;
    }
    if downstream.git_revision {
        out.element(
            "hudson.plugins.git.GitRevisionBuildParameters",
            &[("plugin", "git")],
            |out| out.leaf("combineQueuedCommits", false),
        )?;
    }
    if downstream.subversion_revision {
        out.empty("hudson.plugins.parameterizedtrigger.SubversionRevisionBuildParameters", &[])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use jobxml_model::{
        ArtifactRepository, DeploySettings, DownstreamTrigger, JobModel, JobType, MailSettings,
        MavenSettings, TriggerCondition,
    };

    use crate::error::GenerateError;
    use crate::sections::test_support::render_section;

    fn maven_job() -> JobModel {
        let mut job = JobModel::new("lib", JobType::Maven);
        job.maven = Some(MavenSettings::default());
        job
    }

    fn deploy() -> DeploySettings {
        DeploySettings {
            id: Some("releases".to_string()),
            url: "https://repo.example.com/releases".to_string(),
            unique_version: true,
            even_if_unstable: false,
        }
    }

    #[test]
    fn test_mailer_only_for_freestyle() {
        let mail = MailSettings {
            recipients: "team@example.com".to_string(),
            notify_every_unstable_build: true,
            send_to_individuals: false,
        };

        let mut freestyle = JobModel::new("app", JobType::Freestyle);
        freestyle.mail = Some(mail.clone());
        let xml = render_section(&freestyle, |m, out| m.publishers(out)).unwrap();
        assert!(xml.contains("<hudson.tasks.Mailer plugin=\"mailer\">"));
        assert!(xml.contains("<dontNotifyEveryUnstableBuild>false</dontNotifyEveryUnstableBuild>"));

        let mut maven = maven_job();
        maven.mail = Some(mail);
        let xml = render_section(&maven, |m, out| m.publishers(out)).unwrap();
        assert!(!xml.contains("hudson.tasks.Mailer"));
    }

    #[test]
    fn test_deploy_only_for_maven() {
        let mut maven = maven_job();
        maven.deploy = Some(deploy());
        let xml = render_section(&maven, |m, out| m.publishers(out)).unwrap();
        assert_eq!(xml.matches("<hudson.maven.RedeployPublisher>").count(), 1);
        assert!(xml.contains("<url>https://repo.example.com/releases</url>"));

        let mut freestyle = JobModel::new("app", JobType::Freestyle);
        freestyle.deploy = Some(deploy());
        let xml = render_section(&freestyle, |m, out| m.publishers(out)).unwrap();
        assert!(!xml.contains("RedeployPublisher"));
    }

    #[test]
    fn test_artifact_repository_publisher() {
        let mut job = maven_job();
        job.artifact_repository = Some(ArtifactRepository {
            name: "central-mirror".to_string(),
            release_repository: "libs-release-local".to_string(),
            snapshot_repository: None,
            username: Some("deployer".to_string()),
            password: None,
        });

        let xml = render_section(&job, |m, out| m.publishers(out)).unwrap();
        assert!(xml.contains("<artifactoryName>central-mirror</artifactoryName>"));
        assert!(xml.contains("<snapshotsRepositoryKey>libs-release-local</snapshotsRepositoryKey>"));
        assert!(xml.contains("<scrambledPassword></scrambledPassword>"));
        assert!(xml.contains("<skipBuildInfoDeploy>false</skipBuildInfoDeploy>"));
    }

    #[test]
    fn test_artifact_repository_requires_release_key() {
        let mut job = maven_job();
        job.artifact_repository = Some(ArtifactRepository {
            name: "central-mirror".to_string(),
            ..ArtifactRepository::default()
        });

        let err = render_section(&job, |m, out| m.publishers(out)).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::MissingField {
                field: "release_repository",
                ..
            }
        ));
    }

    #[test]
    fn test_downstream_without_parameters_uses_empty_marker() {
        let mut job = JobModel::new("app", JobType::Freestyle);
        job.downstream = Some(DownstreamTrigger {
            projects: vec!["deploy".to_string(), " smoke ".to_string()],
            condition: TriggerCondition::UnstableOrBetter,
            ..DownstreamTrigger::default()
        });

        let xml = render_section(&job, |m, out| m.publishers(out)).unwrap();
        assert!(xml.contains("<configs class=\"java.util.Collections$EmptyList\"/>"));
        assert!(xml.contains("<projects>deploy,smoke</projects>"));
        assert!(xml.contains("<condition>UNSTABLE_OR_BETTER</condition>"));
    }

    #[test]
    fn test_downstream_parameter_options() {
        let mut job = JobModel::new("app", JobType::Freestyle);
        job.downstream = Some(DownstreamTrigger {
            projects: vec!["deploy".to_string()],
            current_build_parameters: true,
            properties_file: Some("build.properties".to_string()),
            subversion_revision: true,
            ..DownstreamTrigger::default()
        });

        let xml = render_section(&job, |m, out| m.publishers(out)).unwrap();
        assert!(!xml.contains("EmptyList"));
        assert!(xml.contains("<hudson.plugins.parameterizedtrigger.CurrentBuildParameters/>"));
        assert!(xml.contains("<propertiesFile>build.properties</propertiesFile>"));
        assert!(xml.contains("<hudson.plugins.parameterizedtrigger.SubversionRevisionBuildParameters/>"));
        assert!(!xml.contains("PredefinedBuildParameters"));
        assert!(!xml.contains("GitRevisionBuildParameters"));
    }

    #[test]
    fn test_raw_publishers_come_first() {
        let mut job = JobModel::new("app", JobType::Freestyle);
        job.raw.publishers = Some("<hudson.tasks.ArtifactArchiver/>".to_string());
        job.mail = Some(MailSettings {
            recipients: "team@example.com".to_string(),
            ..MailSettings::default()
        });

        let xml = render_section(&job, |m, out| m.publishers(out)).unwrap();
        assert!(xml.find("ArtifactArchiver").unwrap() < xml.find("hudson.tasks.Mailer").unwrap());
    }
}
