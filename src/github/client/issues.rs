//! Issues API methods

use super::GitHubClient;
use crate::github::create_issue::CreatedIssue;
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Create a new issue
    pub fn create_issue(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        labels: Vec<String>,
    ) -> AsyncTask<Result<CreatedIssue, GitHubError>> {
        crate::github::create_issue::create_issue(
            self.inner.clone(),
            owner,
            repo,
            title,
            body,
            labels,
        )
    }

    /// Resolve a repository-scoped issue number to its GraphQL node id
    pub fn get_issue_node_id(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
    ) -> AsyncTask<Result<String, GitHubError>> {
        crate::github::get_issue_node_id::get_issue_node_id(
            self.inner.clone(),
            owner,
            repo,
            issue_number,
        )
    }
}
