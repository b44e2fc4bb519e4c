//! Project (v2) id lookup by owner and number.

use crate::github::graphql::{self, IdNode};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which kind of account owns the project board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectOwnerKind {
    #[default]
    User,
    Organization,
}

impl ProjectOwnerKind {
    /// GraphQL root field that resolves this kind of owner.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectOwnerKind::User => "user",
            ProjectOwnerKind::Organization => "organization",
        }
    }

    fn query(self) -> String {
        // Aliased to `owner` so both variants decode into the same shape.
        format!(
            r"
query($owner: String!, $number: Int!) {{
  owner: {root}(login: $owner) {{
    projectV2(number: $number) {{
      id
    }}
  }}
}}
",
            root = self.as_str()
        )
    }
}

impl fmt::Display for ProjectOwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectOwnerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(ProjectOwnerKind::User),
            "organization" | "org" => Ok(ProjectOwnerKind::Organization),
            other => Err(format!("expected `user` or `organization`, got `{other}`")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Data {
    owner: Option<Owner>,
}

#[derive(Debug, Deserialize)]
struct Owner {
    #[serde(rename = "projectV2")]
    project_v2: Option<IdNode>,
}

/// Resolve the node id of project `project_number` owned by `owner`.
pub(crate) fn get_project_id(
    inner: Arc<Octocrab>,
    owner_kind: ProjectOwnerKind,
    owner: impl Into<String>,
    project_number: u64,
) -> AsyncTask<Result<String, GitHubError>> {
    let owner = owner.into();

    spawn_task(async move {
        let variables = json!({ "owner": owner, "number": project_number });
        let data: Data =
            graphql::execute(&inner, "get_project_id", &owner_kind.query(), variables).await?;

        data.owner
            .and_then(|o| o.project_v2)
            .map(|project| project.id)
            .ok_or_else(|| {
                GitHubError::NotFound(format!("project #{project_number} of {owner_kind} {owner}"))
            })
    })
}
