//! GitHub Issue creation operation.

use crate::github::{error::GitHubError, util::issues_route, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct CreateIssueBody {
    title: String,
    body: String,
    labels: Vec<String>,
}

/// The parts of the created issue the publisher chains on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Create a new issue.
///
/// Sent as a raw REST call so only `number` has to be present in the reply.
/// Octocrab turns any non-2xx status into an error.
pub(crate) fn create_issue(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    title: impl Into<String>,
    body: impl Into<String>,
    labels: Vec<String>,
) -> AsyncTask<Result<CreatedIssue, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    let payload = CreateIssueBody {
        title: title.into(),
        body: body.into(),
        labels,
    };

    spawn_task(async move {
        let route = issues_route(&owner, &repo);
        inner
            .post::<_, CreatedIssue>(route, Some(&payload))
            .await
            .map_err(GitHubError::from)
    })
}
