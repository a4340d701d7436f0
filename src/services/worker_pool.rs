use std::{future::Future, sync::Arc, time::Duration};

use thiserror::Error;
use tokio::{sync::Semaphore, task::JoinHandle};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("task exceeded its {0:?} deadline")]
    Timeout(Duration),

    #[error("worker task failed: {0}")]
    Failed(String),
}

/// Runs provider calls on separate tasks, at most `size` at a time, so a slow
/// provider never blocks the request path. Each dispatch carries a deadline;
/// a task that misses it is aborted.
#[derive(Clone, Debug)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

/// Aborts the task when the caller stops waiting for it, including when the
/// caller's own future is dropped.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Waits for a free worker, then runs `task` under `deadline`. Time spent
    /// queued for a worker does not count against the deadline.
    pub async fn run<F, T>(&self, deadline: Duration, task: F) -> Result<T, PoolError>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|e| PoolError::Failed(e.to_string()))?;

        let mut handle = AbortOnDrop(tokio::spawn(async move {
            let _permit = permit;
            task.await
        }));

        match tokio::time::timeout(deadline, &mut handle.0).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(join_err)) => Err(PoolError::Failed(join_err.to_string())),
            Err(_) => Err(PoolError::Timeout(deadline)),
        }
    }
}
