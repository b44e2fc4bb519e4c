//! Single-result task handle for GitHub API operations.
//!
//! Every request is spawned onto the tokio runtime and answered over a
//! oneshot channel, so callers decide when (and whether) to wait.

use crate::github::error::GitHubResult;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// A handle to an asynchronous task that produces a single result.
pub struct AsyncTask<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> AsyncTask<T>
where
    T: Send + 'static,
{
    #[inline]
    #[must_use]
    pub fn new(rx: oneshot::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Spawn an async operation onto the current runtime.
    #[inline]
    pub fn spawn_async<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn(async move {
            let _ = tx.send(future.await);
        });
        Self::new(rx)
    }
}

impl<T> AsyncTask<GitHubResult<T>>
where
    T: Send + 'static,
{
    /// Wait for the task and fold a closed channel into the operation's error.
    pub async fn join(self) -> GitHubResult<T> {
        self.await?
    }
}

impl<T> Future for AsyncTask<T> {
    type Output = Result<T, oneshot::error::RecvError>;

    #[inline]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx)
    }
}
