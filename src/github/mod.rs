//! GitHub API operations module
//!
//! Issue creation goes through Octocrab's REST surface; project work goes
//! through the GraphQL endpoint.

pub mod client;
pub mod error;
pub mod util;

pub(crate) mod graphql;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// Re-export operation types
pub use create_issue::CreatedIssue;
pub use get_project_field_ids::{FIELDS_PAGE_SIZE, ProjectField, ProjectFields};
pub use get_project_id::ProjectOwnerKind;

// GitHub API operations - Issues (internal)
pub(crate) mod create_issue;
pub(crate) mod get_issue_node_id;

// GitHub API operations - Projects v2 (internal)
pub(crate) mod add_issue_to_project;
pub(crate) mod get_project_field_ids;
pub(crate) mod get_project_id;
pub(crate) mod set_project_field_value_text;
