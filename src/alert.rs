//! Alert events and how they render into an issue.

use crate::config::{ConfigError, non_empty};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

/// Label attached to every new alert issue unless configured otherwise.
pub const DEFAULT_TRIAGE_LABEL: &str = "untriaged";

/// One alert raised by a monitored application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub app_name: String,
    pub level: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    /// Create an alert stamped with the current UTC time.
    pub fn new(
        app_name: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::at(app_name, level, message, Utc::now())
    }

    /// Create an alert with an explicit timestamp.
    pub fn at(
        app_name: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            level: level.into(),
            message: message.into(),
            timestamp,
        }
    }

    /// Read `ALERT_APP_NAME`, `ALERT_LEVEL` and `ALERT_MESSAGE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, stamped now. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| non_empty(lookup(key)).ok_or(ConfigError::Missing(key));
        Ok(Self::new(
            require("ALERT_APP_NAME")?,
            require("ALERT_LEVEL")?,
            require("ALERT_MESSAGE")?,
        ))
    }

    #[must_use]
    pub fn issue_title(&self) -> String {
        format!("[{}] {} Alert", self.level, self.app_name)
    }

    /// Markdown body; the message is embedded verbatim.
    #[must_use]
    pub fn issue_body(&self) -> String {
        format!(
            "## Alert details\n\
             \n\
             - **Application**: {app}\n\
             - **Alert level**: {level}\n\
             - **Occurred at (UTC)**: {at}\n\
             \n\
             ---\n\
             \n\
             ### Message\n\
             \n\
             {message}\n",
            app = self.app_name,
            level = self.level,
            at = self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            message = self.message,
        )
    }

    /// `[app, level, triage_label]`, in that order.
    #[must_use]
    pub fn issue_labels(&self, triage_label: &str) -> Vec<String> {
        vec![
            self.app_name.clone(),
            self.level.clone(),
            triage_label.to_string(),
        ]
    }
}

/// Alert as delivered by an event source (webhook, serverless trigger).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlertEvent {
    #[serde(alias = "appName")]
    pub app_name: String,
    #[serde(alias = "alertLevel", alias = "level")]
    pub alert_level: String,
    pub message: String,
}

impl From<AlertEvent> for Alert {
    fn from(event: AlertEvent) -> Self {
        Alert::new(event.app_name, event.alert_level, event.message)
    }
}
