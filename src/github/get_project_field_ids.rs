//! Project custom field listing.
//!
//! Only the first page is requested. A board with more than
//! [`FIELDS_PAGE_SIZE`] fields loses the rest from the mapping, and a lookup
//! for one of them comes back as "not found".

use crate::github::graphql;
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use log::warn;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// Number of fields fetched from a project.
pub const FIELDS_PAGE_SIZE: usize = 20;

const QUERY: &str = r"
query($projectId: ID!, $first: Int!) {
  node(id: $projectId) {
    ... on ProjectV2 {
      fields(first: $first) {
        nodes {
          ... on ProjectV2FieldCommon {
            id
            name
            dataType
          }
        }
      }
    }
  }
}
";

#[derive(Debug, Deserialize)]
struct Data {
    node: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
struct ProjectNode {
    fields: Option<FieldConnection>,
}

#[derive(Debug, Deserialize)]
struct FieldConnection {
    #[serde(default)]
    nodes: Vec<Option<FieldNode>>,
}

#[derive(Debug, Deserialize)]
struct FieldNode {
    id: Option<String>,
    name: Option<String>,
    #[serde(rename = "dataType")]
    data_type: Option<String>,
}

/// A custom field of a project board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectField {
    pub id: String,
    pub name: String,
    /// GraphQL `ProjectV2FieldType`, e.g. `TEXT` or `SINGLE_SELECT`.
    pub data_type: Option<String>,
}

impl ProjectField {
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.data_type.as_deref() == Some("TEXT")
    }
}

/// Field name to field mapping for one project.
#[derive(Debug, Clone, Default)]
pub struct ProjectFields {
    by_name: HashMap<String, ProjectField>,
}

impl ProjectFields {
    /// Build the mapping from already-fetched fields. Later duplicates win.
    pub fn from_fields(fields: impl IntoIterator<Item = ProjectField>) -> Self {
        Self {
            by_name: fields
                .into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProjectField> {
        self.by_name.get(name)
    }

    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|field| field.id.as_str())
    }

    /// Like [`ProjectFields::get`], but a missing name is a `NotFound` error.
    pub fn require(&self, name: &str) -> Result<&ProjectField, GitHubError> {
        self.get(name)
            .ok_or_else(|| GitHubError::NotFound(format!("project field `{name}`")))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Plain name to id mapping.
    #[must_use]
    pub fn ids(&self) -> HashMap<String, String> {
        self.by_name
            .iter()
            .map(|(name, field)| (name.clone(), field.id.clone()))
            .collect()
    }
}

/// Fetch the first page of the project's fields.
pub(crate) fn get_project_field_ids(
    inner: Arc<Octocrab>,
    project_id: impl Into<String>,
) -> AsyncTask<Result<ProjectFields, GitHubError>> {
    let project_id = project_id.into();

    spawn_task(async move {
        let variables = json!({ "projectId": project_id, "first": FIELDS_PAGE_SIZE });
        let data: Data =
            graphql::execute(&inner, "get_project_field_ids", QUERY, variables).await?;

        let nodes = data
            .node
            .and_then(|node| node.fields)
            .map(|fields| fields.nodes)
            .ok_or_else(|| GitHubError::NotFound(format!("fields of project {project_id}")))?;

        if nodes.len() >= FIELDS_PAGE_SIZE {
            warn!(
                "project {project_id} returned a full page of {FIELDS_PAGE_SIZE} fields; \
                 fields past the first page are not visible"
            );
        }

        // The page size also caps what a misbehaving server can hand us.
        let fields = nodes
            .into_iter()
            .take(FIELDS_PAGE_SIZE)
            .flatten()
            .filter_map(|node| match (node.id, node.name) {
                (Some(id), Some(name)) => Some(ProjectField {
                    id,
                    name,
                    data_type: node.data_type,
                }),
                _ => None,
            });

        Ok(ProjectFields::from_fields(fields))
    })
}
