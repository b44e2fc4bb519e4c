//! GitHub API client wrapper
//!
//! Provides a clean API for the issue and project operations without exposing
//! Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gh_alert_publisher::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let issue = gh
//!         .create_issue("owner", "repo", "Disk full", "body", vec!["ops".into()])
//!         .join()
//!         .await?;
//!     let node_id = gh.get_issue_node_id("owner", "repo", issue.number).join().await?;
//!     println!("created #{} ({node_id})", issue.number);
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use std::sync::Arc;

mod issues;
mod projects;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Get inner Octocrab client
    #[must_use]
    pub fn inner(&self) -> &Arc<Octocrab> {
        &self.inner
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise or a local test server)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    ///
    /// Octocrab's retry middleware is switched off: every operation is sent
    /// exactly once and its failure is reported as-is.
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
