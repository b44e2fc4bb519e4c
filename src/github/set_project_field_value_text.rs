//! Text value update on a project item field.

use crate::github::graphql;
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::json;
use std::sync::Arc;

const MUTATION: &str = r"
mutation($input: UpdateProjectV2ItemFieldValueInput!) {
  updateProjectV2ItemFieldValue(input: $input) {
    projectV2Item {
      id
    }
  }
}
";

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(rename = "updateProjectV2ItemFieldValue")]
    update: Option<UpdatePayload>,
}

#[derive(Debug, Deserialize)]
struct UpdatePayload {
    #[serde(rename = "projectV2Item")]
    item: Option<IgnoredAny>,
}

/// Set `value` as the text of `field_id` on `item_id`.
///
/// GitHub rejects the mutation when the field is not text-typed; that
/// rejection is returned as a GraphQL error.
pub(crate) fn set_project_field_value_text(
    inner: Arc<Octocrab>,
    project_id: impl Into<String>,
    item_id: impl Into<String>,
    field_id: impl Into<String>,
    value: impl Into<String>,
) -> AsyncTask<Result<(), GitHubError>> {
    let variables = json!({
        "input": {
            "projectId": project_id.into(),
            "itemId": item_id.into(),
            "fieldId": field_id.into(),
            "value": { "text": value.into() },
        }
    });

    spawn_task(async move {
        let data: Data =
            graphql::execute(&inner, "set_project_field_value_text", MUTATION, variables).await?;

        match data.update {
            Some(UpdatePayload { item: Some(_) }) => Ok(()),
            _ => Err(GitHubError::Api(
                "field value update returned no project item".into(),
            )),
        }
    })
}
