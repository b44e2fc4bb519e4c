//! Tests for async task runtime primitives.

use gh_alert_publisher::{AsyncTask, GitHubError, GitHubResult};

#[tokio::test]
async fn test_async_task_spawn_async() {
    let task = AsyncTask::spawn_async(async { 42 });
    let result = task.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_join_flattens_operation_result() {
    let task: AsyncTask<GitHubResult<u64>> = AsyncTask::spawn_async(async { Ok(7) });
    assert_eq!(task.join().await.unwrap(), 7);

    let task: AsyncTask<GitHubResult<u64>> =
        AsyncTask::spawn_async(async { Err(GitHubError::Api("boom".into())) });
    assert!(matches!(task.join().await, Err(GitHubError::Api(_))));
}

#[tokio::test]
async fn test_join_reports_dropped_task() {
    let task: AsyncTask<GitHubResult<u64>> = AsyncTask::spawn_async(async {
        if true {
            panic!("worker died");
        }
        Ok(0)
    });
    assert!(matches!(task.join().await, Err(GitHubError::TaskJoin(_))));
}
