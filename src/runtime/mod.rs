//! Runtime module
//!
//! Provides the task handle GitHub operations hand back to their callers.

pub mod async_task;

pub use async_task::AsyncTask;
