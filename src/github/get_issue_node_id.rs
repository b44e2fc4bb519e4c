//! Issue number to GraphQL node id lookup.

use crate::github::graphql::{self, IdNode};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const QUERY: &str = r"
query($owner: String!, $repo: String!, $issue: Int!) {
  repository(owner: $owner, name: $repo) {
    issue(number: $issue) {
      id
    }
  }
}
";

#[derive(Debug, Deserialize)]
struct Data {
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
struct Repository {
    issue: Option<IdNode>,
}

/// Resolve `owner/repo#issue_number` to the issue's global node id.
pub(crate) fn get_issue_node_id(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
) -> AsyncTask<Result<String, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(async move {
        let variables = json!({ "owner": owner, "repo": repo, "issue": issue_number });
        let data: Data = graphql::execute(&inner, "get_issue_node_id", QUERY, variables).await?;

        data.repository
            .and_then(|r| r.issue)
            .map(|issue| issue.id)
            .ok_or_else(|| GitHubError::NotFound(format!("issue {owner}/{repo}#{issue_number}")))
    })
}
