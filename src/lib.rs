//! `gh_alert_publisher` - GitHub issues and project items from alerts
//!
//! Turns an [`Alert`] into a GitHub issue and, when a Projects (v2) board is
//! configured, adds the issue to the board and writes the alert's level and
//! application name into the board's custom fields. All GitHub traffic goes
//! through Octocrab, one request at a time.

// Module declarations
pub mod alert;
pub mod config;
pub mod github;
pub mod handler;
pub mod publisher;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export project types
pub use github::{CreatedIssue, FIELDS_PAGE_SIZE, ProjectField, ProjectFields, ProjectOwnerKind};

pub use alert::{Alert, AlertEvent};
pub use config::{ConfigError, ProjectConfig, PublisherConfig};
pub use handler::{HandlerResponse, handle};
pub use publisher::{
    FieldAssignment, FieldsResolved, IssueCreated, IssueLinked, ProjectOutcome, PublishError,
    PublishOutcome, PublishStage, Publisher, publish,
};
