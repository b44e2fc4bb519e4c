//! GitHub API error types

use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error (transport failures and non-2xx responses)
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// GraphQL request answered with an `errors` array
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// Generic GitHub API error
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Resource not found (missing data path, unknown field name)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The task driving a request went away before answering
    #[error("Task channel closed: {0}")]
    TaskJoin(#[from] tokio::sync::oneshot::error::RecvError),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// True for "the thing you asked for is not there", from either API surface.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            GitHubError::NotFound(_) => true,
            GitHubError::Octocrab(octocrab::Error::GitHub { source, .. }) => {
                source.status_code.as_u16() == 404
            }
            _ => false,
        }
    }
}
