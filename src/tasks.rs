//! Small async building blocks: a value that resolves, an error that is
//! raised, and work handed off to a worker thread.

use crate::model::{Error, Result};

pub const ANSWER: i64 = 42;
pub const EXPECTED_ERROR: &str = "Expected error";

pub async fn resolve_answer() -> i64 {
    ANSWER
}

pub async fn reject_with_expected_error() -> Result<i64> {
    Err(Error::Rejected(EXPECTED_ERROR.to_string()))
}

pub fn compute_answer() -> i64 {
    ANSWER
}

/// Runs `work` on tokio's blocking pool and waits for it. A panic inside
/// `work` comes back as [`Error::Worker`].
pub async fn run_in_worker<F, T>(work: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let value = tokio::task::spawn_blocking(work).await?;
    Ok(value)
}

pub async fn answer_in_worker() -> Result<i64> {
    run_in_worker(compute_answer).await
}
