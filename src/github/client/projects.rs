//! Projects (v2) API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::get_project_field_ids::ProjectFields;
use crate::github::get_project_id::ProjectOwnerKind;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Look up the node id of a project by owner login and project number
    pub fn get_project_id(
        &self,
        owner_kind: ProjectOwnerKind,
        owner: impl Into<String>,
        project_number: u64,
    ) -> AsyncTask<Result<String, GitHubError>> {
        crate::github::get_project_id::get_project_id(
            self.inner.clone(),
            owner_kind,
            owner,
            project_number,
        )
    }

    /// Add an issue (by node id) to a project, returning the new item id
    pub fn add_issue_to_project(
        &self,
        project_id: impl Into<String>,
        issue_node_id: impl Into<String>,
    ) -> AsyncTask<Result<String, GitHubError>> {
        crate::github::add_issue_to_project::add_issue_to_project(
            self.inner.clone(),
            project_id,
            issue_node_id,
        )
    }

    /// List the first page of a project's custom fields
    pub fn get_project_field_ids(
        &self,
        project_id: impl Into<String>,
    ) -> AsyncTask<Result<ProjectFields, GitHubError>> {
        crate::github::get_project_field_ids::get_project_field_ids(self.inner.clone(), project_id)
    }

    /// Write a text value into one field of a project item
    pub fn set_project_field_value_text(
        &self,
        project_id: impl Into<String>,
        item_id: impl Into<String>,
        field_id: impl Into<String>,
        value: impl Into<String>,
    ) -> AsyncTask<Result<(), GitHubError>> {
        crate::github::set_project_field_value_text::set_project_field_value_text(
            self.inner.clone(),
            project_id,
            item_id,
            field_id,
            value,
        )
    }
}
