//! Publisher configuration, read once from the environment at start-up.

use crate::alert::DEFAULT_TRIAGE_LABEL;
use crate::github::ProjectOwnerKind;
use thiserror::Error;

pub const DEFAULT_ALERT_LEVEL_FIELD: &str = "alert_level";
pub const DEFAULT_APP_NAME_FIELD: &str = "app_name";

/// Largest project number the GraphQL API accepts.
pub const MAX_PROJECT_NUMBER: u64 = i32::MAX as u64;

/// Missing or unusable configuration. Always fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {key} has invalid value `{value}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where the project board lives and which of its fields receive alert data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub owner: String,
    pub owner_kind: ProjectOwnerKind,
    pub number: u64,
    pub alert_level_field: String,
    pub app_name_field: String,
}

/// Everything `publish` needs besides the alert itself.
#[derive(Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    pub token: String,
    pub repo_owner: String,
    pub repo_name: String,
    /// API base URI; `None` means api.github.com.
    pub api_base_uri: Option<String>,
    pub triage_label: String,
    /// `None` runs in issue-only mode.
    pub project: Option<ProjectConfig>,
}

// Keeps the token out of logs.
impl std::fmt::Debug for PublisherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublisherConfig")
            .field("token", &"<redacted>")
            .field("repo_owner", &self.repo_owner)
            .field("repo_name", &self.repo_name)
            .field("api_base_uri", &self.api_base_uri)
            .field("triage_label", &self.triage_label)
            .field("project", &self.project)
            .finish()
    }
}

impl PublisherConfig {
    /// Configuration for a repository with no project board attached.
    pub fn new(
        token: impl Into<String>,
        repo_owner: impl Into<String>,
        repo_name: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            repo_owner: repo_owner.into(),
            repo_name: repo_name.into(),
            api_base_uri: None,
            triage_label: DEFAULT_TRIAGE_LABEL.to_string(),
            project: None,
        }
    }

    /// Attach a user-owned project, with the default field names.
    #[must_use]
    pub fn with_project(mut self, owner: impl Into<String>, number: u64) -> Self {
        self.project = Some(ProjectConfig {
            owner: owner.into(),
            owner_kind: ProjectOwnerKind::User,
            number,
            alert_level_field: DEFAULT_ALERT_LEVEL_FIELD.to_string(),
            app_name_field: DEFAULT_APP_NAME_FIELD.to_string(),
        });
        self
    }

    #[must_use]
    pub fn with_api_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.api_base_uri = Some(uri.into());
        self
    }

    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_empty(lookup(key));
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let token = match get("PROJECT_GITHUB_TOKEN") {
            Some(token) => token,
            None => require("GITHUB_TOKEN").map_err(|_| ConfigError::Missing("PROJECT_GITHUB_TOKEN"))?,
        };
        let repo_owner = require("REPO_OWNER")?;
        let repo_name = require("REPO_NAME")?;

        let project = match get("PROJECT_NUMBER") {
            None => None,
            Some(raw) => {
                let number = parse_project_number(&raw)?;
                let owner_kind = match get("PROJECT_OWNER_TYPE") {
                    None => ProjectOwnerKind::default(),
                    Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                        key: "PROJECT_OWNER_TYPE",
                        value: raw.clone(),
                        reason,
                    })?,
                };
                Some(ProjectConfig {
                    owner: get("PROJECT_OWNER").unwrap_or_else(|| repo_owner.clone()),
                    owner_kind,
                    number,
                    alert_level_field: get("ALERT_LEVEL_FIELD")
                        .unwrap_or_else(|| DEFAULT_ALERT_LEVEL_FIELD.to_string()),
                    app_name_field: get("APP_NAME_FIELD")
                        .unwrap_or_else(|| DEFAULT_APP_NAME_FIELD.to_string()),
                })
            }
        };

        Ok(Self {
            token,
            repo_owner,
            repo_name,
            api_base_uri: get("GITHUB_API_URL"),
            triage_label: get("TRIAGE_LABEL").unwrap_or_else(|| DEFAULT_TRIAGE_LABEL.to_string()),
            project,
        })
    }
}

fn parse_project_number(raw: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        key: "PROJECT_NUMBER",
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    // GraphQL `Int` is a signed 32-bit value.
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid("project numbers start at 1")),
        Ok(n) if n > MAX_PROJECT_NUMBER => Err(invalid(&format!(
            "project numbers cannot exceed {MAX_PROJECT_NUMBER}"
        ))),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(&e.to_string())),
    }
}

/// Unset and blank values are treated alike.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
