//! GitHub API utilities

use crate::runtime::AsyncTask;
use std::future::Future;

/// Spawn an async task for a GitHub API operation.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// REST route for a repository's issue collection.
pub(crate) fn issues_route(owner: &str, repo: &str) -> String {
    format!("/repos/{owner}/{repo}/issues")
}
