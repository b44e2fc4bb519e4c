//! Tests for issue creation and issue node id lookup.

use crate::common::*;
use gh_alert_publisher::GitHubError;
use mockito::Server;
use serde_json::json;

#[tokio::test]
async fn test_create_issue_posts_title_body_and_labels() {
    let mut server = Server::new_async().await;
    let mock = mock_create_issue(
        &mut server,
        "acme",
        "alerts",
        json!({
            "title": "[High] MyApp1 Alert",
            "body": "disk is full",
            "labels": ["MyApp1", "High", "untriaged"],
        }),
        42,
    )
    .await;

    let issue = client_for(&server)
        .create_issue(
            "acme",
            "alerts",
            "[High] MyApp1 Alert",
            "disk is full",
            vec!["MyApp1".into(), "High".into(), "untriaged".into()],
        )
        .join()
        .await
        .expect("issue is created");

    mock.assert_async().await;
    assert_eq!(issue.number, 42);
    assert_eq!(
        issue.html_url.as_deref(),
        Some("https://github.com/acme/alerts/issues/42")
    );
}

#[tokio::test]
async fn test_create_issue_non_success_status_is_an_error() {
    let mut server = Server::new_async().await;
    let mock = mock_create_issue_failure(&mut server, "acme", "alerts", 422).await;

    let result = client_for(&server)
        .create_issue("acme", "alerts", "title", "body", vec![])
        .join()
        .await;

    mock.assert_async().await;
    assert!(matches!(result, Err(GitHubError::Octocrab(_))), "{result:?}");
}

#[tokio::test]
async fn test_get_issue_node_id() {
    let mut server = Server::new_async().await;
    let mock = mock_graphql(
        &mut server,
        ISSUE_NODE_QUERY,
        json!({ "owner": "acme", "repo": "alerts", "issue": 42 }),
        json!({ "repository": { "issue": { "id": "I_123" } } }),
    )
    .await;

    let node_id = client_for(&server)
        .get_issue_node_id("acme", "alerts", 42)
        .join()
        .await
        .expect("node id resolves");

    mock.assert_async().await;
    assert_eq!(node_id, "I_123");
}

#[tokio::test]
async fn test_get_issue_node_id_missing_issue_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = mock_graphql(
        &mut server,
        ISSUE_NODE_QUERY,
        json!({ "issue": 9999 }),
        json!({ "repository": { "issue": null } }),
    )
    .await;

    let err = client_for(&server)
        .get_issue_node_id("acme", "alerts", 9999)
        .join()
        .await
        .expect_err("issue does not exist");

    assert!(matches!(err, GitHubError::NotFound(_)), "{err:?}");
    assert!(err.is_not_found());
}
