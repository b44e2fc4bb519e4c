//! GraphQL transport shared by the project operations.
//!
//! Octocrab posts the payload to `/graphql` and hands back the raw body; this
//! module owns the `{query, variables}` request shape and the `{data, errors}`
//! response envelope.

use crate::github::error::{GitHubError, GitHubResult};
use log::debug;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Object carrying only an `id`, the leaf of every lookup here.
#[derive(Debug, Deserialize)]
pub(crate) struct IdNode {
    pub id: String,
}

/// Send one GraphQL document and decode its `data` as `D`.
///
/// A populated `errors` array fails the call even when partial data came
/// back. Errors typed `NOT_FOUND` become [`GitHubError::NotFound`].
pub(crate) async fn execute<V, D>(
    inner: &Octocrab,
    operation: &str,
    query: &str,
    variables: V,
) -> GitHubResult<D>
where
    V: Serialize,
    D: DeserializeOwned,
{
    let payload = GraphQlRequest { query, variables };
    let raw: serde_json::Value = inner.graphql(&payload).await?;
    debug!("{operation} response: {raw}");

    let response: GraphQlResponse<D> = serde_json::from_value(raw)
        .map_err(|e| GitHubError::Api(format!("{operation}: malformed response: {e}")))?;

    if !response.errors.is_empty() {
        let messages = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let not_found = response
            .errors
            .iter()
            .any(|e| e.kind.as_deref() == Some("NOT_FOUND"));
        return Err(if not_found {
            GitHubError::NotFound(format!("{operation}: {messages}"))
        } else {
            GitHubError::GraphQl(format!("{operation}: {messages}"))
        });
    }

    response
        .data
        .ok_or_else(|| GitHubError::Api(format!("{operation}: response carried no data")))
}
