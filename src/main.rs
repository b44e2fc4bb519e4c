// Publishes one alert from the environment as a GitHub issue.
//
// Configuration comes from PROJECT_GITHUB_TOKEN, REPO_OWNER, REPO_NAME and the
// optional PROJECT_* variables; the alert from ALERT_APP_NAME, ALERT_LEVEL and
// ALERT_MESSAGE. Any failure exits non-zero.

use anyhow::{Context, Result};
use gh_alert_publisher::{Alert, PublisherConfig, publish};
use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PublisherConfig::from_env().context("invalid configuration")?;
    let alert = Alert::from_env().context("invalid alert")?;

    let outcome = publish(config, &alert).await?;

    match &outcome.project {
        Some(project) => info!(
            "done: issue #{} filed as project item {} with {} fields set",
            outcome.issue.number,
            project.link.item_id,
            project.fields.assignments.len()
        ),
        None => info!("done: issue #{} created", outcome.issue.number),
    }
    Ok(())
}
