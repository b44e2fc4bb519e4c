//! Project item creation for an existing issue.

use crate::github::graphql::{self, IdNode};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const MUTATION: &str = r"
mutation($projectId: ID!, $contentId: ID!) {
  addProjectV2ItemById(input: {projectId: $projectId, contentId: $contentId}) {
    item {
      id
    }
  }
}
";

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(rename = "addProjectV2ItemById")]
    add_item: Option<AddItemPayload>,
}

#[derive(Debug, Deserialize)]
struct AddItemPayload {
    item: Option<IdNode>,
}

/// Link the issue to the project and return the project item id.
///
/// The node id is sent as `contentId` untouched. Whether a second call for the
/// same pair creates another item is up to GitHub.
pub(crate) fn add_issue_to_project(
    inner: Arc<Octocrab>,
    project_id: impl Into<String>,
    issue_node_id: impl Into<String>,
) -> AsyncTask<Result<String, GitHubError>> {
    let (project_id, issue_node_id) = (project_id.into(), issue_node_id.into());

    spawn_task(async move {
        let variables = json!({ "projectId": project_id, "contentId": issue_node_id });
        let data: Data =
            graphql::execute(&inner, "add_issue_to_project", MUTATION, variables).await?;

        data.add_item
            .and_then(|payload| payload.item)
            .map(|item| item.id)
            .ok_or_else(|| {
                GitHubError::Api(format!(
                    "adding {issue_node_id} to project {project_id} returned no item"
                ))
            })
    })
}
