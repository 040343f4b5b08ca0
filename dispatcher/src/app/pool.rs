use std::collections::HashMap;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};
use tokio::task::{self, JoinError, JoinSet};

type Result<T> = std::result::Result<T, PoolError>;

#[derive(thiserror::Error, Debug)]
pub enum PoolError {
    #[error("Failed to start worker pool: {0}")]
    Build(#[from] std::io::Error),

    #[error("Subtask {index} failed: {source}")]
    Worker {
        index: usize,
        #[source]
        source: JoinError,
    },
}

/// Bounded pool of blocking workers.
///
/// Units of work run on a dedicated runtime whose blocking threads are capped at
/// `size`, so at most `size` of them execute at once. Every map call blocks until
/// the whole batch is done. Dropping the pool waits for in-flight units and
/// releases its threads.
pub struct WorkerPool {
    runtime: Runtime,
    size: usize,
}

impl WorkerPool {
    /// Pool sized to the number of processing units on this host.
    pub fn new() -> Result<WorkerPool> {
        WorkerPool::with_size(num_cpus::get())
    }

    pub fn with_size(size: usize) -> Result<WorkerPool> {
        let size = size.max(1);
        let runtime = Builder::new_current_thread()
            .max_blocking_threads(size)
            .thread_name("pool-worker")
            .build()?;

        log::debug!("Worker pool started with {} workers", size);
        Ok(WorkerPool { runtime, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Applies `f` to every item and returns the outputs in input order.
    pub fn map<I, O, F>(&self, items: Vec<I>, f: F) -> Result<Vec<O>>
    where
        I: Send + 'static,
        O: Send + 'static,
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.runtime.block_on(async move {
            // submit everything up front; the blocking pool caps how many run
            let handles: Vec<_> = items
                .into_iter()
                .map(|item| {
                    let f = Arc::clone(&f);
                    task::spawn_blocking(move || f(item))
                })
                .collect();

            // awaiting in submission order keeps outputs positional
            let mut outputs = Vec::with_capacity(handles.len());
            for (index, handle) in handles.into_iter().enumerate() {
                let output = handle
                    .await
                    .map_err(|source| PoolError::Worker { index, source })?;
                log::debug!("Collected output of subtask {}", index);
                outputs.push(output);
            }
            Ok::<_, PoolError>(outputs)
        })
    }

    /// Like [`WorkerPool::map`] for functions taking two arguments.
    pub fn starmap<A, B, O, F>(&self, items: Vec<(A, B)>, f: F) -> Result<Vec<O>>
    where
        A: Send + 'static,
        B: Send + 'static,
        O: Send + 'static,
        F: Fn(A, B) -> O + Send + Sync + 'static,
    {
        self.map(items, move |(a, b)| f(a, b))
    }

    /// Applies `f` to every item and returns the outputs as they complete.
    pub fn map_unordered<I, O, F>(&self, items: Vec<I>, f: F) -> Result<Vec<O>>
    where
        I: Send + 'static,
        O: Send + 'static,
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.runtime.block_on(async move {
            // remember which task id belongs to which submitted item
            let mut set = JoinSet::new();
            let mut indices = HashMap::new();
            for (index, item) in items.into_iter().enumerate() {
                let f = Arc::clone(&f);
                let handle = set.spawn_blocking(move || f(item));
                indices.insert(handle.id(), index);
            }

            // collect outputs in whatever order the workers finish
            let mut outputs = Vec::with_capacity(set.len());
            while let Some(joined) = set.join_next_with_id().await {
                match joined {
                    Ok((id, output)) => {
                        log::debug!("Collected output of subtask {}", indices[&id]);
                        outputs.push(output);
                    }
                    Err(source) => {
                        let index = indices[&source.id()];
                        return Err(PoolError::Worker { index, source });
                    }
                }
            }
            Ok::<_, PoolError>(outputs)
        })
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        log::debug!("Shutting down worker pool of {} workers", self.size);
    }
}
