//! Alert-to-issue pipeline.
//!
//! Each stage consumes the previous stage's typed output, so no request is
//! built from a value that was never obtained. There is no rollback: if
//! linking fails the issue stays created, and the returned [`PublishError`]
//! records how far the run got.

use crate::alert::Alert;
use crate::config::{ProjectConfig, PublisherConfig};
use crate::github::{GitHubClient, GitHubError, GitHubResult, ProjectFields};
use log::{info, warn};
use std::fmt;
use thiserror::Error;

/// Progress of one `publish` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStage {
    Init,
    IssueCreated,
    IssueLinked,
    FieldsResolved,
    Done,
}

impl fmt::Display for PublishStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublishStage::Init => "init",
            PublishStage::IssueCreated => "issue created",
            PublishStage::IssueLinked => "issue linked",
            PublishStage::FieldsResolved => "fields resolved",
            PublishStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// A failed run: the last stage reached and the request error that stopped it.
#[derive(Debug, Error)]
#[error("alert publishing failed after stage `{stage}`: {source}")]
pub struct PublishError {
    pub stage: PublishStage,
    #[source]
    pub source: GitHubError,
}

impl PublishError {
    /// True when the failure left an issue behind on GitHub.
    #[must_use]
    pub fn issue_was_created(&self) -> bool {
        self.stage != PublishStage::Init
    }
}

/// Output of the issue stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCreated {
    pub number: u64,
    pub html_url: Option<String>,
}

/// Output of the linking stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLinked {
    /// Sent unchanged as the link mutation's `contentId`.
    pub issue_node_id: String,
    pub project_id: String,
    pub item_id: String,
}

/// Output of the field lookup stage: field ids paired with the values to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldsResolved {
    pub assignments: Vec<FieldAssignment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub field_name: String,
    pub field_id: String,
    pub value: String,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub issue: IssueCreated,
    /// `None` in issue-only mode.
    pub project: Option<ProjectOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOutcome {
    pub link: IssueLinked,
    pub fields: FieldsResolved,
}

/// Runs the pipeline against one repository (and optionally one project).
#[derive(Debug, Clone)]
pub struct Publisher {
    client: GitHubClient,
    config: PublisherConfig,
}

impl Publisher {
    pub fn new(client: GitHubClient, config: PublisherConfig) -> Self {
        Self { client, config }
    }

    /// Build the GitHub client from the configuration's token and base URI.
    pub fn from_config(config: PublisherConfig) -> GitHubResult<Self> {
        let mut builder = GitHubClient::builder().personal_token(config.token.clone());
        if let Some(uri) = &config.api_base_uri {
            builder = builder.base_uri(uri.clone());
        }
        Ok(Self::new(builder.build()?, config))
    }

    #[must_use]
    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// Create the issue and, when a project is configured, file it there.
    pub async fn publish(&self, alert: &Alert) -> Result<PublishOutcome, PublishError> {
        let mut stage = PublishStage::Init;
        match self.run(alert, &mut stage).await {
            Ok(outcome) => Ok(outcome),
            Err(source) => {
                warn!(
                    "publishing {} alert for {} stopped after stage `{stage}`",
                    alert.level, alert.app_name
                );
                Err(PublishError { stage, source })
            }
        }
    }

    async fn run(&self, alert: &Alert, stage: &mut PublishStage) -> GitHubResult<PublishOutcome> {
        let issue = self.create_issue(alert).await?;
        *stage = PublishStage::IssueCreated;

        let Some(project) = &self.config.project else {
            *stage = PublishStage::Done;
            return Ok(PublishOutcome {
                issue,
                project: None,
            });
        };

        let link = self.link_issue(project, &issue).await?;
        *stage = PublishStage::IssueLinked;

        let fields = self.resolve_fields(project, &link, alert).await?;
        *stage = PublishStage::FieldsResolved;

        self.set_fields(&link, &fields).await?;
        *stage = PublishStage::Done;

        Ok(PublishOutcome {
            issue,
            project: Some(ProjectOutcome { link, fields }),
        })
    }

    async fn create_issue(&self, alert: &Alert) -> GitHubResult<IssueCreated> {
        let PublisherConfig {
            repo_owner,
            repo_name,
            triage_label,
            ..
        } = &self.config;

        let created = self
            .client
            .create_issue(
                repo_owner.as_str(),
                repo_name.as_str(),
                alert.issue_title(),
                alert.issue_body(),
                alert.issue_labels(triage_label),
            )
            .join()
            .await?;
        info!("created issue {repo_owner}/{repo_name}#{}", created.number);

        Ok(IssueCreated {
            number: created.number,
            html_url: created.html_url,
        })
    }

    async fn link_issue(
        &self,
        project: &ProjectConfig,
        issue: &IssueCreated,
    ) -> GitHubResult<IssueLinked> {
        let issue_node_id = self
            .client
            .get_issue_node_id(
                self.config.repo_owner.as_str(),
                self.config.repo_name.as_str(),
                issue.number,
            )
            .join()
            .await?;

        let project_id = self
            .client
            .get_project_id(project.owner_kind, project.owner.as_str(), project.number)
            .join()
            .await?;

        let item_id = self
            .client
            .add_issue_to_project(project_id.as_str(), issue_node_id.as_str())
            .join()
            .await?;
        info!(
            "linked issue #{} to project {} as item {item_id}",
            issue.number, project.number
        );

        Ok(IssueLinked {
            issue_node_id,
            project_id,
            item_id,
        })
    }

    async fn resolve_fields(
        &self,
        project: &ProjectConfig,
        link: &IssueLinked,
        alert: &Alert,
    ) -> GitHubResult<FieldsResolved> {
        let fields = self
            .client
            .get_project_field_ids(link.project_id.as_str())
            .join()
            .await?;

        let wanted = [
            (project.alert_level_field.as_str(), alert.level.as_str()),
            (project.app_name_field.as_str(), alert.app_name.as_str()),
        ];
        let assignments = assignments_for(&fields, &wanted)?;

        Ok(FieldsResolved { assignments })
    }

    async fn set_fields(&self, link: &IssueLinked, fields: &FieldsResolved) -> GitHubResult<()> {
        for assignment in &fields.assignments {
            self.client
                .set_project_field_value_text(
                    link.project_id.as_str(),
                    link.item_id.as_str(),
                    assignment.field_id.as_str(),
                    assignment.value.as_str(),
                )
                .join()
                .await?;
            info!("set field {} on item {}", assignment.field_name, link.item_id);
        }
        Ok(())
    }
}

/// Pair each wanted field name with its id. Every name must resolve before
/// any value is written.
fn assignments_for(
    fields: &ProjectFields,
    wanted: &[(&str, &str)],
) -> GitHubResult<Vec<FieldAssignment>> {
    wanted
        .iter()
        .map(|&(name, value)| {
            let field = fields.require(name)?;
            if !field.is_text() {
                warn!(
                    "project field {name} is declared {}; writing a text value anyway",
                    field.data_type.as_deref().unwrap_or("with no type")
                );
            }
            Ok(FieldAssignment {
                field_name: name.to_string(),
                field_id: field.id.clone(),
                value: value.to_string(),
            })
        })
        .collect()
}

/// One-shot convenience: build a [`Publisher`] from `config` and run it.
pub async fn publish(config: PublisherConfig, alert: &Alert) -> Result<PublishOutcome, PublishError> {
    let publisher = Publisher::from_config(config).map_err(|source| PublishError {
        stage: PublishStage::Init,
        source,
    })?;
    publisher.publish(alert).await
}
