//! Tests for the Projects (v2) GraphQL operations.

use crate::common::*;
use gh_alert_publisher::{FIELDS_PAGE_SIZE, GitHubError, ProjectOwnerKind};
use mockito::Server;
use serde_json::{Value, json};

#[tokio::test]
async fn test_get_project_id_for_user() {
    let mut server = Server::new_async().await;
    let mock = mock_graphql(
        &mut server,
        USER_PROJECT_QUERY,
        json!({ "owner": "octo", "number": 3 }),
        json!({ "owner": { "projectV2": { "id": "P_456" } } }),
    )
    .await;

    let project_id = client_for(&server)
        .get_project_id(ProjectOwnerKind::User, "octo", 3)
        .join()
        .await
        .expect("project resolves");

    mock.assert_async().await;
    assert_eq!(project_id, "P_456");
}

#[tokio::test]
async fn test_get_project_id_for_organization() {
    let mut server = Server::new_async().await;
    let org = mock_graphql(
        &mut server,
        ORG_PROJECT_QUERY,
        json!({ "owner": "acme", "number": 1 }),
        json!({ "owner": { "projectV2": { "id": "PVT_org" } } }),
    )
    .await;
    let user = forbid_graphql(&mut server, USER_PROJECT_QUERY).await;

    let project_id = client_for(&server)
        .get_project_id(ProjectOwnerKind::Organization, "acme", 1)
        .join()
        .await
        .expect("project resolves");

    org.assert_async().await;
    user.assert_async().await;
    assert_eq!(project_id, "PVT_org");
}

#[tokio::test]
async fn test_get_project_id_unknown_project_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = mock_graphql_body(
        &mut server,
        USER_PROJECT_QUERY,
        json!({ "number": 9 }),
        json!({
            "data": { "owner": { "projectV2": null } },
            "errors": [{
                "type": "NOT_FOUND",
                "path": ["owner", "projectV2"],
                "message": "Could not resolve to a ProjectV2 with the number 9."
            }]
        }),
    )
    .await;

    let err = client_for(&server)
        .get_project_id(ProjectOwnerKind::User, "octo", 9)
        .join()
        .await
        .expect_err("project does not exist");

    assert!(err.is_not_found(), "{err:?}");
}

#[tokio::test]
async fn test_get_project_id_null_owner_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = mock_graphql(
        &mut server,
        USER_PROJECT_QUERY,
        json!({ "owner": "ghost" }),
        json!({ "owner": null }),
    )
    .await;

    let err = client_for(&server)
        .get_project_id(ProjectOwnerKind::User, "ghost", 1)
        .join()
        .await
        .expect_err("owner does not exist");

    assert!(matches!(err, GitHubError::NotFound(_)), "{err:?}");
}

#[tokio::test]
async fn test_add_issue_to_project_sends_node_id_as_content_id() {
    let mut server = Server::new_async().await;
    let mock = mock_graphql(
        &mut server,
        ADD_ITEM_MUTATION,
        json!({ "projectId": "P_456", "contentId": "I_kwDOAbc+/=" }),
        json!({ "addProjectV2ItemById": { "item": { "id": "IT_789" } } }),
    )
    .await;

    let item_id = client_for(&server)
        .add_issue_to_project("P_456", "I_kwDOAbc+/=")
        .join()
        .await
        .expect("issue is linked");

    mock.assert_async().await;
    assert_eq!(item_id, "IT_789");
}

#[tokio::test]
async fn test_get_project_field_ids_maps_names_to_ids() {
    let mut server = Server::new_async().await;
    let nodes = field_nodes(&[
        ("F_title", "Title", "TITLE"),
        ("F_1", "alert_level", "TEXT"),
        ("F_2", "app_name", "TEXT"),
        ("F_status", "Status", "SINGLE_SELECT"),
    ]);
    let mock = mock_graphql(
        &mut server,
        FIELDS_QUERY,
        json!({ "projectId": "P_456", "first": 20 }),
        fields_data(nodes),
    )
    .await;

    let fields = client_for(&server)
        .get_project_field_ids("P_456")
        .join()
        .await
        .expect("fields resolve");

    mock.assert_async().await;
    assert_eq!(fields.len(), 4);
    assert_eq!(fields.id_of("alert_level"), Some("F_1"));
    assert_eq!(fields.id_of("app_name"), Some("F_2"));
    assert!(fields.get("alert_level").is_some_and(|f| f.is_text()));
    assert!(!fields.get("Status").is_some_and(|f| f.is_text()));
    assert_eq!(fields.ids().get("Title").map(String::as_str), Some("F_title"));
}

#[tokio::test]
async fn test_get_project_field_ids_skips_nodes_without_common_fields() {
    let mut server = Server::new_async().await;
    let nodes = json!([
        { "id": "F_1", "name": "alert_level", "dataType": "TEXT" },
        {},
        null,
        { "id": "F_2", "name": "app_name", "dataType": "TEXT" }
    ]);
    let _mock = mock_graphql(&mut server, FIELDS_QUERY, json!({}), fields_data(nodes)).await;

    let fields = client_for(&server)
        .get_project_field_ids("P_456")
        .join()
        .await
        .expect("fields resolve");

    assert_eq!(fields.len(), 2);
}

#[tokio::test]
async fn test_fields_past_first_page_are_not_found() {
    let mut server = Server::new_async().await;
    let nodes: Vec<Value> = (1..=FIELDS_PAGE_SIZE + 1)
        .map(|i| json!({ "id": format!("F_{i}"), "name": format!("field_{i}"), "dataType": "TEXT" }))
        .collect();
    let _mock = mock_graphql(
        &mut server,
        FIELDS_QUERY,
        json!({}),
        fields_data(Value::Array(nodes)),
    )
    .await;

    let fields = client_for(&server)
        .get_project_field_ids("P_456")
        .join()
        .await
        .expect("fields resolve");

    assert_eq!(fields.len(), FIELDS_PAGE_SIZE);
    assert_eq!(fields.id_of("field_20"), Some("F_20"));
    assert_eq!(fields.id_of("field_21"), None);

    let err = fields.require("field_21").expect_err("past the first page");
    assert!(matches!(err, GitHubError::NotFound(_)), "{err:?}");
}

#[tokio::test]
async fn test_set_project_field_value_text_sends_text_input() {
    let mut server = Server::new_async().await;
    let mock = mock_graphql(
        &mut server,
        UPDATE_FIELD_MUTATION,
        json!({
            "input": {
                "projectId": "P_456",
                "itemId": "IT_789",
                "fieldId": "F_1",
                "value": { "text": "High" }
            }
        }),
        json!({ "updateProjectV2ItemFieldValue": { "projectV2Item": { "id": "IT_789" } } }),
    )
    .await;

    client_for(&server)
        .set_project_field_value_text("P_456", "IT_789", "F_1", "High")
        .join()
        .await
        .expect("field is set");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_project_field_value_text_reports_graphql_errors() {
    let mut server = Server::new_async().await;
    let _mock = mock_graphql_body(
        &mut server,
        UPDATE_FIELD_MUTATION,
        json!({}),
        json!({
            "data": { "updateProjectV2ItemFieldValue": null },
            "errors": [{ "message": "The field of type single_select does not accept text values" }]
        }),
    )
    .await;

    let err = client_for(&server)
        .set_project_field_value_text("P_456", "IT_789", "F_status", "High")
        .join()
        .await
        .expect_err("remote rejects the value");

    match err {
        GitHubError::GraphQl(message) => assert!(message.contains("does not accept text")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_set_project_field_value_text_without_item_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = mock_graphql(
        &mut server,
        UPDATE_FIELD_MUTATION,
        json!({}),
        json!({ "updateProjectV2ItemFieldValue": { "projectV2Item": null } }),
    )
    .await;

    let err = client_for(&server)
        .set_project_field_value_text("P_456", "IT_789", "F_1", "High")
        .join()
        .await
        .expect_err("no item came back");

    assert!(matches!(err, GitHubError::Api(_)), "{err:?}");
}

#[test]
fn test_project_owner_kind_parsing() {
    assert_eq!("user".parse::<ProjectOwnerKind>(), Ok(ProjectOwnerKind::User));
    assert_eq!("Organization".parse::<ProjectOwnerKind>(), Ok(ProjectOwnerKind::Organization));
    assert_eq!("org".parse::<ProjectOwnerKind>(), Ok(ProjectOwnerKind::Organization));
    assert!("team".parse::<ProjectOwnerKind>().is_err());
    assert_eq!(ProjectOwnerKind::default(), ProjectOwnerKind::User);
}
